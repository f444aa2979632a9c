//! Issue sinks: where task records become issues

use std::io::Write;

use serde::Serialize;

use super::error::{Result, SinkError};
use super::repo::RepoName;
use crate::task::TaskRecord;

/// Longest label most trackers accept
pub const MAX_LABEL_LEN: usize = 50;

/// An issue created by a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedIssue {
    pub id: u64,
    pub title: String,
    /// Human-facing reference, e.g. `owner/repo#12`
    pub reference: String,
}

/// Creates one issue per task record.
///
/// Each call is independent: a failure for one record says nothing about
/// the next, and callers keep going.
pub trait IssueSink {
    fn create_issue(&mut self, task: &TaskRecord) -> Result<CreatedIssue>;
}

/// Check a record the way a tracker would before accepting it
pub fn validate(task: &TaskRecord) -> Result<()> {
    if task.title.trim().is_empty() {
        return Err(SinkError::EmptyTitle);
    }
    for label in &task.labels {
        if label.trim().is_empty() {
            return Err(SinkError::EmptyLabel);
        }
        if label.chars().count() > MAX_LABEL_LEN {
            return Err(SinkError::LabelTooLong {
                label: label.clone(),
                max: MAX_LABEL_LEN,
            });
        }
        if label.contains(',') {
            return Err(SinkError::InvalidLabel(label.clone()));
        }
    }
    Ok(())
}

/// Writes a preview of each create-issue call instead of performing it
pub struct DryRunSink<W: Write> {
    repo: RepoName,
    out: W,
    next_id: u64,
}

impl<W: Write> DryRunSink<W> {
    pub fn new(repo: RepoName, out: W) -> Self {
        Self {
            repo,
            out,
            next_id: 1,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> IssueSink for DryRunSink<W> {
    fn create_issue(&mut self, task: &TaskRecord) -> Result<CreatedIssue> {
        validate(task)?;

        let id = self.next_id;
        let reference = format!("{}#{}", self.repo, id);

        writeln!(self.out, "Would create issue {}: '{}'", reference, task.title)?;
        if !task.labels.is_empty() {
            writeln!(self.out, "  labels: {}", task.labels.join(", "))?;
        }
        if task.description.is_empty() {
            writeln!(self.out, "  (no description)")?;
        } else {
            for line in task.description.lines() {
                writeln!(self.out, "  | {}", line)?;
            }
        }

        self.next_id += 1;
        Ok(CreatedIssue {
            id,
            title: task.title.clone(),
            reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> RepoName {
        "octo/widgets".parse().unwrap()
    }

    #[test]
    fn test_validate_ok() {
        let task = TaskRecord::new("Fix").with_labels(["bug"]);
        assert!(validate(&task).is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        assert!(matches!(
            validate(&TaskRecord::new("  ")),
            Err(SinkError::EmptyTitle)
        ));
    }

    #[test]
    fn test_validate_long_label() {
        let task = TaskRecord::new("Fix").with_labels(["x".repeat(MAX_LABEL_LEN + 1)]);
        assert!(matches!(
            validate(&task),
            Err(SinkError::LabelTooLong { max: MAX_LABEL_LEN, .. })
        ));

        let task = TaskRecord::new("Fix").with_labels(["x".repeat(MAX_LABEL_LEN)]);
        assert!(validate(&task).is_ok());
    }

    #[test]
    fn test_validate_empty_label() {
        let task = TaskRecord::new("Fix").with_labels(["bug", ""]);
        assert!(matches!(validate(&task), Err(SinkError::EmptyLabel)));

        let task = TaskRecord::new("Fix").with_labels(["   "]);
        assert!(matches!(validate(&task), Err(SinkError::EmptyLabel)));
    }

    #[test]
    fn test_validate_comma_label() {
        let task = TaskRecord::new("Fix").with_labels(["a,b"]);
        assert!(matches!(validate(&task), Err(SinkError::InvalidLabel(_))));
    }

    #[test]
    fn test_dry_run_preview() {
        let mut sink = DryRunSink::new(repo(), Vec::new());
        let task = TaskRecord::new("Fix bug")
            .with_description("Line1\nLine2")
            .with_labels(["bug", "urgent"]);

        let created = sink.create_issue(&task).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.reference, "octo/widgets#1");

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "Would create issue octo/widgets#1: 'Fix bug'\n  labels: bug, urgent\n  | Line1\n  | Line2\n"
        );
    }

    #[test]
    fn test_dry_run_ids_skip_failures() {
        let mut sink = DryRunSink::new(repo(), Vec::new());
        assert_eq!(sink.create_issue(&TaskRecord::new("a")).unwrap().id, 1);
        assert!(sink
            .create_issue(&TaskRecord::new("b").with_labels(["x,y"]))
            .is_err());
        assert_eq!(sink.create_issue(&TaskRecord::new("c")).unwrap().id, 2);
    }
}
