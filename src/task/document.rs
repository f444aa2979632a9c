//! Task documents: loading a source and holding its parsed records

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::error::{Result, SourceError};
use super::model::TaskRecord;
use super::parser::parse_tasks;

/// Display name used for standard input
pub const STDIN_NAME: &str = "<stdin>";

/// A parsed task document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDocument {
    tasks: Vec<TaskRecord>,
}

impl TaskDocument {
    /// Read a file to completion, then parse it
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SourceError::unavailable(path.display().to_string(), e))?;
        debug!(path = %path.display(), bytes = content.len(), "read task document");
        Ok(Self::parse(&content))
    }

    /// Read any reader to completion, then parse it
    pub fn from_reader<R: Read>(mut reader: R, source_name: &str) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| SourceError::unavailable(source_name, e))?;
        debug!(source = source_name, bytes = content.len(), "read task document");
        Ok(Self::parse(&content))
    }

    /// Parse document content. Never fails: unrecognized text is either
    /// description content or ignored.
    pub fn parse(content: &str) -> Self {
        Self {
            tasks: parse_tasks(content),
        }
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<TaskRecord> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Render every task back into the block format
    pub fn to_markdown(&self) -> String {
        self.tasks.iter().map(TaskRecord::to_markdown_block).collect()
    }
}
