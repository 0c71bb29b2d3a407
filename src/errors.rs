use thiserror::Error;

// Gateway failures carry a single opaque description that is passed through
// to the JSON-RPC error message verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Upstream { message: String },
    #[error("{message}")]
    Transport { message: String },
}

impl AppError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
