//! Handing task records to an issue tracker
//!
//! The tracker itself sits behind [`IssueSink`]. [`upload_all`] drives a sink
//! over every record and collects per-record outcomes without stopping on
//! failures.

pub mod error;
pub mod repo;
pub mod sink;

pub use error::{RepoNameError, SinkError};
pub use repo::RepoName;
pub use sink::{validate, CreatedIssue, DryRunSink, IssueSink, MAX_LABEL_LEN};

use serde::Serialize;
use tracing::{info, warn};

use crate::task::TaskRecord;

/// A record the sink refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedIssue {
    pub title: String,
    pub reason: String,
}

/// Outcome of an upload run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadSummary {
    pub created: Vec<CreatedIssue>,
    pub failed: Vec<FailedIssue>,
}

impl UploadSummary {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Create one issue per task, in order. A failing record is recorded and the
/// run continues with the next one.
pub fn upload_all<S: IssueSink + ?Sized>(sink: &mut S, tasks: &[TaskRecord]) -> UploadSummary {
    let mut summary = UploadSummary::default();

    for task in tasks {
        match sink.create_issue(task) {
            Ok(issue) => {
                info!(title = %task.title, reference = %issue.reference, "issue created");
                summary.created.push(issue);
            }
            Err(e) => {
                warn!(title = %task.title, error = %e, "failed to create issue");
                summary.failed.push(FailedIssue {
                    title: task.title.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rejects titles listed in `reject`, accepts everything else
    struct ScriptedSink {
        reject: Vec<&'static str>,
        calls: Vec<String>,
    }

    impl IssueSink for ScriptedSink {
        fn create_issue(&mut self, task: &TaskRecord) -> error::Result<CreatedIssue> {
            self.calls.push(task.title.clone());
            if self.reject.contains(&task.title.as_str()) {
                return Err(SinkError::IoError(std::io::Error::other("server said no")));
            }
            Ok(CreatedIssue {
                id: self.calls.len() as u64,
                title: task.title.clone(),
                reference: format!("#{}", self.calls.len()),
            })
        }
    }

    fn tasks(titles: &[&str]) -> Vec<TaskRecord> {
        titles.iter().map(|t| TaskRecord::new(*t)).collect()
    }

    #[test]
    fn test_failure_does_not_stop_later_records() {
        let mut sink = ScriptedSink {
            reject: vec!["b"],
            calls: Vec::new(),
        };
        let summary = upload_all(&mut sink, &tasks(&["a", "b", "c"]));

        assert_eq!(sink.calls, vec!["a", "b", "c"]);
        assert_eq!(summary.created_count(), 2);
        assert_eq!(summary.failed_count(), 1);
        assert!(!summary.is_success());
        assert_eq!(summary.failed[0].title, "b");
        assert!(summary.failed[0].reason.contains("server said no"));
    }

    #[test]
    fn test_all_created() {
        let mut sink = ScriptedSink {
            reject: Vec::new(),
            calls: Vec::new(),
        };
        let summary = upload_all(&mut sink, &tasks(&["a", "b"]));
        assert!(summary.is_success());
        assert_eq!(
            summary
                .created
                .iter()
                .map(|c| c.title.as_str())
                .collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_no_tasks() {
        let mut sink = ScriptedSink {
            reject: Vec::new(),
            calls: Vec::new(),
        };
        let summary = upload_all(&mut sink, &[]);
        assert_eq!(summary, UploadSummary::default());
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_dry_run_sink_through_driver() {
        let repo: RepoName = "octo/widgets".parse().unwrap();
        let mut sink = DryRunSink::new(repo, Vec::new());
        let records = vec![
            TaskRecord::new("ok"),
            TaskRecord::new("bad").with_labels(["x".repeat(MAX_LABEL_LEN + 1)]),
            TaskRecord::new("also ok"),
        ];

        let summary = upload_all(&mut sink, &records);
        assert_eq!(summary.created_count(), 2);
        assert_eq!(summary.created[1].reference, "octo/widgets#2");
        assert_eq!(summary.failed[0].title, "bad");
    }
}
