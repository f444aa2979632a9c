//! CLI command implementations

pub mod definition;
pub mod fmt;
pub mod list;
pub mod plan;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::Path;

use crate::task::{TaskDocument, STDIN_NAME};

/// Display name for a document path, `-` meaning stdin
pub fn source_name(path: &Path) -> String {
    if is_stdin(path) {
        STDIN_NAME.to_string()
    } else {
        path.display().to_string()
    }
}

/// Load a task document from a file, or from stdin when the path is `-`
pub fn load_document(path: &Path) -> Result<TaskDocument> {
    let doc = if is_stdin(path) {
        TaskDocument::from_reader(std::io::stdin().lock(), STDIN_NAME)?
    } else {
        TaskDocument::from_file(path)?
    };
    Ok(doc)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}
