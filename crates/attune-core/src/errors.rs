/// Errors surfaced by the tuning core.
#[derive(Debug, thiserror::Error)]
pub enum AttuneError {
    #[error("persistence error at {path}: {message}")]
    Persistence { path: String, message: String },

    #[error("serialization error: {message}")]
    Serialization { message: String },

    #[error("invalid feedback: {message}")]
    InvalidFeedback { message: String },

    #[error("lock poisoned: {resource}")]
    LockPoisoned { resource: &'static str },
}

pub type AttuneResult<T> = Result<T, AttuneError>;

impl AttuneError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn persistence(path: &std::path::Path, err: std::io::Error) -> Self {
        Self::Persistence {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AttuneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
