use sortboard::{ConfigError, ViewError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Exit code for malformed scripts, configs, or arguments.
pub const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("script step {step} ({event}) failed: {source}")]
    Step {
        step: usize,
        event: String,
        #[source]
        source: ViewError,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl HarnessError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Json(_)
            | Self::Config(_)
            | Self::View(_)
            | Self::Step { .. }
            | Self::InvalidArgument { .. } => EXIT_INVALID_INPUT,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
