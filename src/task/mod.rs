//! Markdown task parsing
//!
//! This module turns task plan documents into issue records:
//! - Classify each line (title, description, labels, separator, plain text)
//! - Assemble task blocks with a line-at-a-time state machine
//! - Load documents from files or readers with typed source errors

pub mod document;
pub mod error;
pub mod line;
pub mod model;
pub mod parser;

pub use document::{TaskDocument, STDIN_NAME};
pub use error::SourceError;
pub use line::{split_labels, Line};
pub use model::TaskRecord;
pub use parser::{parse_tasks, split_lines, TaskParser};
