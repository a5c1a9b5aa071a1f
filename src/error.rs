use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErrorHandlerError>;

/// Errors raised while configuring the error handler.
///
/// Dispatch itself never fails; these only surface from setup-time APIs.
#[derive(Debug, Error)]
pub enum ErrorHandlerError {
    #[error("Unknown error status: {0}")]
    UnknownStatus(u16),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ErrorHandlerError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
