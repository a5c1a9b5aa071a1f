//! Status-keyed override handlers.

use crate::common::ErrorStatus;
use crate::error::Result;
use crate::exception::ArgumentsHost;
use axum::response::{IntoResponse, Response};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

pub mod dispatch;
pub mod layer;

pub use dispatch::{Resolution, StatusDispatcher};
pub use layer::{ErrorHandlerLayer, ErrorHandlerMiddleware};

type HandlerFn = dyn Fn(&ArgumentsHost) -> Response + Send + Sync;

/// A response-producing override for one status.
pub struct Handler {
    run: Box<HandlerFn>,
    constructed: bool,
}

impl Handler {
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&ArgumentsHost) -> R + Send + Sync + 'static,
        R: IntoResponse + 'static,
    {
        Self {
            run: Box::new(move |host: &ArgumentsHost| f(host).into_response()),
            constructed: TypeId::of::<R>() == TypeId::of::<Response>(),
        }
    }

    /// Invoke the handler
    pub fn call(&self, host: &ArgumentsHost) -> Response {
        (self.run)(host)
    }

    /// Whether the handler returns a finished [`Response`].
    ///
    /// Finished responses are sent as they are. Anything else is a plain
    /// value and is sent with the error's status when it renders as `200`.
    pub fn returns_response(&self) -> bool {
        self.constructed
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler")
    }
}

/// Overrides keyed by error status.
///
/// Built once while setting up the application, then frozen inside the
/// error handler layer.
///
/// # Example
/// ```
/// use meshestra_error_handler::prelude::*;
///
/// let registry = HandlerRegistry::new()
///     .on(ErrorStatus::NotFound, |_: &ArgumentsHost| "uh-oh! not found!")
///     .on(ErrorStatus::InternalServerError, |host: &ArgumentsHost| {
///         format!("error: {}", host.error().message())
///     });
///
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<ErrorStatus, Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the override for `status`, replacing any previous one
    ///
    /// A handler returning a finished [`Response`] is sent verbatim. Any
    /// other return value (a string, `Json`, a `(StatusCode, body)` tuple)
    /// is a plain value: if it renders as `200 OK` it is sent with the
    /// error's classified status instead. To answer an error with `200`,
    /// return `(StatusCode::OK, body).into_response()`.
    pub fn on<F, R>(mut self, status: ErrorStatus, handler: F) -> Self
    where
        F: Fn(&ArgumentsHost) -> R + Send + Sync + 'static,
        R: IntoResponse + 'static,
    {
        self.handlers.insert(status, Handler::new(handler));
        self
    }

    /// Register the override for a raw status code
    ///
    /// Fails with [`ErrorHandlerError::UnknownStatus`](crate::error::ErrorHandlerError::UnknownStatus)
    /// when `code` is not an error status.
    pub fn try_on<F, R>(self, code: u16, handler: F) -> Result<Self>
    where
        F: Fn(&ArgumentsHost) -> R + Send + Sync + 'static,
        R: IntoResponse + 'static,
    {
        let status = ErrorStatus::try_from(code)?;
        Ok(self.on(status, handler))
    }

    pub fn get(&self, status: ErrorStatus) -> Option<&Handler> {
        self.handlers.get(&status)
    }

    pub fn contains(&self, status: ErrorStatus) -> bool {
        self.handlers.contains_key(&status)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered statuses in ascending order
    pub fn statuses(&self) -> Vec<ErrorStatus> {
        let mut statuses: Vec<_> = self.handlers.keys().copied().collect();
        statuses.sort();
        statuses
    }
}
