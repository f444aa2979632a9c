//! Line classification for task documents

use regex::Regex;
use std::sync::LazyLock;

// Lines are trimmed before matching, so the patterns anchor at both ends
// without allowing for surrounding whitespace.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\*\*Issue Title:\*\*\s*(.+)$").expect("title pattern"));
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\*\*Description:\*\*").expect("description pattern"));
static LABELS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\*\*Suggested Labels:\*\*\s*(.+)$").expect("labels pattern")
});
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-{3,}$").expect("separator pattern"));

/// A classified input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `**Issue Title:** <text>` with non-empty text
    Title(&'a str),
    /// `**Description:**`, trailing content ignored
    DescriptionStart,
    /// `**Suggested Labels:** <comma separated>` with non-empty text
    Labels(&'a str),
    /// Three or more hyphens and nothing else
    Separator,
    /// Anything else, trimmed
    Plain(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim();

        if let Some(caps) = TITLE_RE.captures(line) {
            if let Some(m) = caps.get(1) {
                return Line::Title(m.as_str().trim());
            }
        }

        if DESCRIPTION_RE.is_match(line) {
            return Line::DescriptionStart;
        }

        if let Some(caps) = LABELS_RE.captures(line) {
            if let Some(m) = caps.get(1) {
                return Line::Labels(m.as_str().trim());
            }
        }

        if SEPARATOR_RE.is_match(line) {
            return Line::Separator;
        }

        Line::Plain(line)
    }
}

/// Split a label declaration on commas, dropping empty pieces.
pub fn split_labels(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        assert_eq!(
            Line::classify("**Issue Title:** Fix bug"),
            Line::Title("Fix bug")
        );
        assert_eq!(
            Line::classify("  **issue title:**Fix bug   "),
            Line::Title("Fix bug")
        );
    }

    #[test]
    fn test_title_without_text_is_plain() {
        assert_eq!(
            Line::classify("**Issue Title:**   "),
            Line::Plain("**Issue Title:**")
        );
    }

    #[test]
    fn test_description_ignores_trailing_text() {
        assert_eq!(Line::classify("**Description:**"), Line::DescriptionStart);
        assert_eq!(
            Line::classify("**DESCRIPTION:** inline text"),
            Line::DescriptionStart
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            Line::classify("**Suggested Labels:** bug, urgent"),
            Line::Labels("bug, urgent")
        );
    }

    #[test]
    fn test_labels_without_text_is_plain() {
        assert_eq!(
            Line::classify("**suggested labels:**  "),
            Line::Plain("**suggested labels:**")
        );
    }

    #[test]
    fn test_separator() {
        assert_eq!(Line::classify("---"), Line::Separator);
        assert_eq!(Line::classify("   ----------  "), Line::Separator);
        assert_eq!(Line::classify("--"), Line::Plain("--"));
        assert_eq!(Line::classify("--- x"), Line::Plain("--- x"));
    }

    #[test]
    fn test_plain() {
        assert_eq!(Line::classify(""), Line::Plain(""));
        assert_eq!(Line::classify("   "), Line::Plain(""));
        assert_eq!(
            Line::classify("Some text **Issue Title:** inline"),
            Line::Plain("Some text **Issue Title:** inline")
        );
        assert_eq!(Line::classify("**Title:** x"), Line::Plain("**Title:** x"));
    }

    #[test]
    fn test_split_labels() {
        assert_eq!(split_labels("a, b ,, c"), vec!["a", "b", "c"]);
        assert_eq!(split_labels("bug, bug"), vec!["bug", "bug"]);
        assert!(split_labels("").is_empty());
        assert!(split_labels(" , ,").is_empty());
    }
}
