use crate::common::ErrorStatus;
use crate::exception::ClassifiableError;
use axum::http::StatusCode as HttpStatusCode;

/// Well-known error kinds surfaced by the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    /// No route or resource matched
    NotFound,
    /// The request body could not be parsed
    Parse,
    /// A signed cookie failed verification
    InvalidCookieSignature,
    #[default]
    Generic,
}

impl ErrorKind {
    /// Status a kind maps to when the error carries none of its own
    pub const fn default_status(self) -> Option<ErrorStatus> {
        match self {
            ErrorKind::NotFound => Some(ErrorStatus::NotFound),
            ErrorKind::Parse => Some(ErrorStatus::BadRequest),
            ErrorKind::InvalidCookieSignature => Some(ErrorStatus::BadRequest),
            ErrorKind::Generic => None,
        }
    }
}

/// Classify an error to a status code.
///
/// An explicit status wins and is used verbatim, then the kind table,
/// then `500`. Never fails.
pub fn classify(error: &dyn ClassifiableError) -> u16 {
    if let Some(status) = error.status() {
        return status;
    }

    error
        .kind()
        .default_status()
        .unwrap_or(ErrorStatus::InternalServerError)
        .as_u16()
}

/// Convert a classified code into a response status.
///
/// Codes outside what HTTP can carry are sent as `500`.
pub fn http_status(code: u16) -> HttpStatusCode {
    HttpStatusCode::from_u16(code).unwrap_or(HttpStatusCode::INTERNAL_SERVER_ERROR)
}
