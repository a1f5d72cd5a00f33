// src/infra/errors.rs — Error types for learnpath

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LearnPathError {
    // Generator transport errors (possibly retriable by the caller)
    #[error("Generator '{provider}' error: {message}")]
    Generator {
        provider: String,
        message: String,
        retriable: bool,
    },

    #[error("Rate limited by '{provider}', retry after {retry_after_ms}ms")]
    RateLimited {
        provider: String,
        retry_after_ms: u64,
    },

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LearnPathError {
    /// Whether a caller-side retry policy may reasonably re-issue the call.
    /// The engine itself never retries.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            LearnPathError::Generator {
                retriable: true,
                ..
            } | LearnPathError::RateLimited { .. }
        )
    }
}
