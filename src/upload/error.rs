use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Issue title is empty")]
    EmptyTitle,

    #[error("Label is empty")]
    EmptyLabel,

    #[error("Label '{label}' is longer than {max} characters")]
    LabelTooLong { label: String, max: usize },

    #[error("Label '{0}' contains a comma")]
    InvalidLabel(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoNameError {
    #[error("Repository name is empty")]
    Empty,

    #[error("Repository '{0}' must look like 'owner/repo'")]
    NotOwnerRepo(String),

    #[error("Repository '{0}' has an empty owner or name")]
    EmptyPart(String),

    #[error("Repository '{0}' contains whitespace")]
    Whitespace(String),
}

pub type Result<T> = std::result::Result<T, SinkError>;
