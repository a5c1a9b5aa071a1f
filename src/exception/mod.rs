use axum::{
    http::{HeaderMap, Method, Request, Uri, Version},
    response::{IntoResponse, Response},
};
use std::fmt;
use std::sync::Arc;

pub mod builtin;
pub mod classify;

pub use builtin::{HttpError, InternalError, InvalidCookieSignature, NotFoundError, ParseError, not_found};
pub use classify::{ErrorKind, classify, http_status};

/// An error that can be turned into a status code.
///
/// Implementors either report a status directly through [`status`](Self::status)
/// or fall into one of the well-known [`ErrorKind`]s. Everything else is
/// classified as `500`.
///
/// # Example
/// ```
/// use meshestra_error_handler::exception::ClassifiableError;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("not allowed")]
/// struct Forbidden;
///
/// impl ClassifiableError for Forbidden {
///     fn status(&self) -> Option<u16> {
///         Some(403)
///     }
/// }
/// ```
pub trait ClassifiableError: fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Explicit status carried by the error, used verbatim when present
    fn status(&self) -> Option<u16> {
        None
    }

    /// Well-known kind used when no explicit status is present
    fn kind(&self) -> ErrorKind {
        ErrorKind::Generic
    }

    /// Name reported by the default error body
    fn name(&self) -> &'static str {
        "Error"
    }
}

/// A raised error travelling from a route to the error handler.
///
/// Route handlers return `Result<T, Raised>`; anything implementing
/// [`ClassifiableError`] (and `anyhow::Error`) converts with `?`.
/// Converting a `Raised` into a response parks it in the response
/// extensions, where [`ErrorHandlerMiddleware`](crate::handler::ErrorHandlerMiddleware)
/// picks it up.
#[derive(Clone)]
pub struct Raised {
    error: Arc<dyn ClassifiableError>,
}

impl Raised {
    pub fn new<E: ClassifiableError>(error: E) -> Self {
        Self {
            error: Arc::new(error),
        }
    }

    /// The underlying error
    pub fn error(&self) -> &dyn ClassifiableError {
        self.error.as_ref()
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    pub fn name(&self) -> &'static str {
        self.error.name()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Status code this error classifies to
    pub fn status(&self) -> u16 {
        classify(self.error())
    }
}

impl fmt::Debug for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Raised").field(&self.error).finish()
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<E: ClassifiableError> From<E> for Raised {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<anyhow::Error> for Raised {
    fn from(error: anyhow::Error) -> Self {
        Self::new(InternalError::from(error))
    }
}

impl IntoResponse for Raised {
    fn into_response(self) -> Response {
        let mut response = http_status(self.status()).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// The parts of a request an error handler may need.
#[derive(Debug, Clone, Default)]
pub struct RequestHead {
    pub method: Method,
    pub uri: Uri,
    pub version: Version,
    pub headers: HeaderMap,
}

impl RequestHead {
    /// Copy the head of `request`, headers included.
    ///
    /// The middleware runs this before the route, for every request, since
    /// the request is gone by the time an error comes back. Cloning the
    /// `HeaderMap` allocates; [`capture_without_headers`](Self::capture_without_headers)
    /// skips that when no override reads headers.
    pub fn capture<B>(request: &Request<B>) -> Self {
        Self {
            headers: request.headers().clone(),
            ..Self::capture_without_headers(request)
        }
    }

    /// Copy method, URI and version only
    pub fn capture_without_headers<B>(request: &Request<B>) -> Self {
        Self {
            method: request.method().clone(),
            uri: request.uri().clone(),
            version: request.version(),
            headers: HeaderMap::new(),
        }
    }
}

/// Context for exception handling
///
/// Pairs the raised error with its classified status and the head of the
/// request that raised it.
#[derive(Debug, Clone)]
pub struct ArgumentsHost {
    error: Raised,
    status: u16,
    request: RequestHead,
}

impl ArgumentsHost {
    pub fn new(error: Raised, request: RequestHead) -> Self {
        let status = error.status();
        Self {
            error,
            status,
            request,
        }
    }

    pub fn error(&self) -> &Raised {
        &self.error
    }

    /// Classified status of the error
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn request(&self) -> &RequestHead {
        &self.request
    }

    pub fn method(&self) -> &Method {
        &self.request.method
    }

    pub fn uri(&self) -> &Uri {
        &self.request.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.request.headers
    }
}

/// The ExceptionFilter trait
///
/// Filters handle errors raised during request processing.
/// They must return a valid Response.
pub trait ExceptionFilter: Send + Sync + 'static {
    /// Catch an exception and return a response
    fn catch(&self, host: &ArgumentsHost) -> Response;
}
