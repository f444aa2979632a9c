use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Task document not available at '{source_name}': {error}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        error: std::io::Error,
    },
}

impl SourceError {
    pub fn unavailable(source_name: impl Into<String>, error: std::io::Error) -> Self {
        SourceError::SourceUnavailable {
            source_name: source_name.into(),
            error,
        }
    }

    /// True when the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        match self {
            SourceError::SourceUnavailable { error, .. } => {
                error.kind() == std::io::ErrorKind::NotFound
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
