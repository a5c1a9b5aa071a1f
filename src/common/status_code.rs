use crate::error::ErrorHandlerError;
use axum::http::StatusCode as HttpStatusCode;
use strum_macros::{Display, EnumIter};

/// Client and server error statuses an override can be registered for.
///
/// The `Display` output is the variant name (`NotFound`, `BadRequest`, ...),
/// which is also what the detailed error body reports as its code.
///
/// # Example
/// ```
/// use meshestra_error_handler::common::StatusCode;
///
/// assert_eq!(StatusCode::NotFound.as_u16(), 404);
/// assert_eq!(StatusCode::try_from(403).unwrap(), StatusCode::Forbidden);
/// assert!(StatusCode::try_from(200).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[repr(u16)]
pub enum StatusCode {
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    #[strum(serialize = "URITooLong")]
    UriTooLong = 414,
    UnsupportedMediaType = 415,
    RangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    ImATeapot = 418,
    MisdirectedRequest = 421,
    UnprocessableEntity = 422,
    TooEarly = 425,
    UpgradeRequired = 426,
    PreconditionRequired = 428,
    TooManyRequests = 429,
    RequestHeaderFieldsTooLarge = 431,
    UnavailableForLegalReasons = 451,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    #[strum(serialize = "HTTPVersionNotSupported")]
    HttpVersionNotSupported = 505,
    VariantAlsoNegotiates = 506,
    InsufficientStorage = 507,
    LoopDetected = 508,
    NotExtended = 510,
    NetworkAuthenticationRequired = 511,
}

/// Alias used by the handler registry, where every key is an error status.
pub type ErrorStatus = StatusCode;

impl StatusCode {
    /// Numeric value of the status
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether this is a 5xx status
    pub const fn is_server_error(self) -> bool {
        self.as_u16() >= 500
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = ErrorHandlerError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        use strum::IntoEnumIterator;

        StatusCode::iter()
            .find(|status| status.as_u16() == code)
            .ok_or(ErrorHandlerError::UnknownStatus(code))
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.as_u16()
    }
}

impl From<StatusCode> for HttpStatusCode {
    fn from(status: StatusCode) -> Self {
        // Every variant is a registered 4xx/5xx code.
        HttpStatusCode::from_u16(status.as_u16()).unwrap_or(HttpStatusCode::INTERNAL_SERVER_ERROR)
    }
}
