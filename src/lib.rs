//! # Meshestra Error Handler
//!
//! Centralized, status-code driven error handling for Meshestra and axum
//! applications.
//!
//! Routes raise errors by returning `Err(Raised)`. The [`ErrorHandlerLayer`]
//! classifies every raised error to a status code and hands it to the
//! override registered for that status, to the `500` override as a
//! catch-all, or renders the error itself when neither exists.
//!
//! ## Features
//!
//! - **Classification**: errors carry their own status or fall into a
//!   well-known kind (not found, unparseable body, bad cookie signature)
//! - **Per-status overrides**: register a handler for any 4xx/5xx status
//! - **Catch-all**: a `500` override handles every status without its own
//! - **Default body**: `{"name", "message"}` or a detailed shape with a timestamp
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meshestra_error_handler::prelude::*;
//! use meshestra_error_handler::exception::not_found;
//! use axum::routing::get;
//!
//! // A malformed body is raised as a parse error and handled by the 400 override.
//! async fn create_user(Json(user): Json<serde_json::Value>) -> String {
//!     user.to_string()
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let handlers = HandlerRegistry::new()
//!         .on(ErrorStatus::BadRequest, |_: &ArgumentsHost| "too bad!")
//!         .on(ErrorStatus::InternalServerError, |host: &ArgumentsHost| {
//!             format!("error: {}", host.error().message())
//!         });
//!
//!     let app: Router = Router::new()
//!         .route("/users", axum::routing::post(create_user))
//!         .route("/", get(|| async { "all good!" }))
//!         .fallback(not_found)
//!         .layer(error_handler(handlers));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod exception;
pub mod extractor;
pub mod handler;

// Re-export core types
pub use common::{DefaultBody, ErrorStatus};
pub use config::ErrorHandlerConfig;
pub use error::{ErrorHandlerError, Result};
pub use exception::{ArgumentsHost, ClassifiableError, ErrorKind, ExceptionFilter, Raised};
pub use handler::{ErrorHandlerLayer, HandlerRegistry, StatusDispatcher};

// Re-export commonly used types from dependencies
pub use axum;

/// Build the error handler layer from a set of overrides.
///
/// An empty registry renders every error with the default body.
pub fn error_handler(handlers: HandlerRegistry) -> ErrorHandlerLayer {
    ErrorHandlerLayer::new(handlers)
}

/// Prelude module for convenient imports
///
/// ```
/// use meshestra_error_handler::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::{DefaultBody, ErrorStatus};
    pub use crate::config::ErrorHandlerConfig;
    pub use crate::error::{ErrorHandlerError, Result};
    pub use crate::error_handler;
    pub use crate::exception::{
        ArgumentsHost, ClassifiableError, ErrorKind, ExceptionFilter, HttpError, InternalError,
        InvalidCookieSignature, NotFoundError, ParseError, Raised,
    };
    pub use crate::extractor::{Form, Json, Query};
    pub use crate::handler::{ErrorHandlerLayer, HandlerRegistry, Resolution, StatusDispatcher};
    pub use axum::{
        Router,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
}
