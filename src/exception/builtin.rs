//! Built-in errors for the failures the host framework surfaces on its own.

use crate::exception::{ClassifiableError, ErrorKind, Raised};
use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use thiserror::Error;

/// No route or resource matched the request
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct NotFoundError {
    message: String,
}

impl NotFoundError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for NotFoundError {
    fn default() -> Self {
        Self::new("NOT_FOUND")
    }
}

impl ClassifiableError for NotFoundError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NotFound
    }
}

/// The request body could not be parsed
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for ParseError {
    fn default() -> Self {
        Self::new("Failed to parse body")
    }
}

impl ClassifiableError for ParseError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }
}

/// A signed cookie did not match its signature
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct InvalidCookieSignature {
    key: String,
    message: String,
}

impl InvalidCookieSignature {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let message = format!("\"{}\" has invalid cookie signature", key);
        Self { key, message }
    }

    pub fn with_message(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Name of the offending cookie
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ClassifiableError for InvalidCookieSignature {
    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidCookieSignature
    }
}

/// An application error carrying its own status code
///
/// # Example
/// ```
/// use meshestra_error_handler::exception::{HttpError, classify};
///
/// let error = HttpError::new(403, "not yours");
/// assert_eq!(classify(&error), 403);
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HttpError {
    status: u16,
    message: String,
}

impl HttpError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }
}

impl ClassifiableError for HttpError {
    fn status(&self) -> Option<u16> {
        Some(self.status)
    }
}

/// Any other failure, wrapped from `anyhow`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InternalError(anyhow::Error);

impl InternalError {
    pub fn msg(message: impl Into<String>) -> Self {
        Self(anyhow::Error::msg(message.into()))
    }
}

impl From<anyhow::Error> for InternalError {
    fn from(error: anyhow::Error) -> Self {
        Self(error)
    }
}

impl ClassifiableError for InternalError {}

impl ClassifiableError for JsonRejection {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }
}

impl ClassifiableError for FormRejection {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }
}

impl ClassifiableError for QueryRejection {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }
}

/// Router fallback that raises [`NotFoundError`] for unmatched routes.
///
/// Register it before applying the error handler layer so unmatched
/// requests go through the same dispatch as everything else.
pub async fn not_found() -> Raised {
    NotFoundError::default().into()
}
