//! Task record model

use serde::{Deserialize, Serialize};

/// One parsed task block, destined to become a single issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Issue title, never empty for records produced by the parser
    pub title: String,

    /// Free-text body, outer whitespace stripped
    #[serde(default)]
    pub description: String,

    /// Labels in declaration order
    #[serde(default)]
    pub labels: Vec<String>,
}

impl TaskRecord {
    /// Create a record with an empty description and no labels
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            labels: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Append labels that are not already present, keeping order. Extra
    /// labels are trimmed and blank ones skipped.
    pub fn add_labels<'a>(&mut self, extra: impl IntoIterator<Item = &'a String>) {
        for label in extra {
            let label = label.trim();
            if !label.is_empty() && !self.labels.iter().any(|l| l == label) {
                self.labels.push(label.to_string());
            }
        }
    }

    /// Number of lines in the description (0 when empty)
    pub fn description_lines(&self) -> usize {
        if self.description.is_empty() {
            0
        } else {
            self.description.lines().count()
        }
    }

    /// Format as a markdown task block, closed by a separator
    pub fn to_markdown_block(&self) -> String {
        let mut block = format!("**Issue Title:** {}\n", self.title);

        if !self.description.is_empty() {
            block.push_str("**Description:**\n");
            block.push_str(&self.description);
            block.push('\n');
        }

        if !self.labels.is_empty() {
            block.push_str(&format!("**Suggested Labels:** {}\n", self.labels.join(", ")));
        }

        block.push_str("---\n");
        block
    }
}
