use crate::config::ErrorHandlerConfig;
use crate::exception::{ArgumentsHost, ExceptionFilter, Raised, RequestHead};
use crate::handler::{HandlerRegistry, StatusDispatcher};
use axum::{http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower Layer that turns raised errors into responses
///
/// Apply it after adding routes (and the fallback) so every route's
/// errors pass through it.
///
/// # Example
/// ```
/// use meshestra_error_handler::prelude::*;
/// use meshestra_error_handler::exception::not_found;
///
/// async fn find_user() -> std::result::Result<String, Raised> {
///     Err(NotFoundError::new("no such user").into())
/// }
///
/// let app: Router = Router::new()
///     .route("/users/{id}", axum::routing::get(find_user))
///     .fallback(not_found)
///     .layer(error_handler(
///         HandlerRegistry::new().on(ErrorStatus::NotFound, |_: &ArgumentsHost| "uh-oh! not found!"),
///     ));
/// ```
#[derive(Clone)]
pub struct ErrorHandlerLayer {
    filter: Arc<dyn ExceptionFilter>,
    capture_headers: bool,
}

impl ErrorHandlerLayer {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self::with_config(registry, ErrorHandlerConfig::default())
    }

    pub fn with_config(registry: HandlerRegistry, config: ErrorHandlerConfig) -> Self {
        tracing::debug!(
            "Registering error handler {} with overrides for {:?}, default body {}, capture headers {}",
            config.name,
            registry.statuses(),
            config.default_body,
            config.capture_headers
        );
        Self::from_filter(StatusDispatcher::with_default_body(
            registry,
            config.default_body,
        ))
        .capture_headers(config.capture_headers)
    }

    /// Use a custom exception filter in place of the status dispatcher
    pub fn from_filter<F: ExceptionFilter>(filter: F) -> Self {
        Self {
            filter: Arc::new(filter),
            capture_headers: true,
        }
    }

    /// Whether handlers see the request headers (on by default)
    pub fn capture_headers(mut self, capture_headers: bool) -> Self {
        self.capture_headers = capture_headers;
        self
    }
}

impl<S> Layer<S> for ErrorHandlerLayer {
    type Service = ErrorHandlerMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ErrorHandlerMiddleware {
            inner,
            filter: self.filter.clone(),
            capture_headers: self.capture_headers,
        }
    }
}

#[derive(Clone)]
pub struct ErrorHandlerMiddleware<S> {
    inner: S,
    filter: Arc<dyn ExceptionFilter>,
    capture_headers: bool,
}

impl<S, B> Service<Request<B>> for ErrorHandlerMiddleware<S>
where
    S: Service<Request<B>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let head = if self.capture_headers {
            RequestHead::capture(&request)
        } else {
            RequestHead::capture_without_headers(&request)
        };
        let filter = self.filter.clone();

        // The readied service goes into the future, the fresh clone stays.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let mut response = inner.call(request).await?;

            match response.extensions_mut().remove::<Raised>() {
                Some(error) => {
                    let host = ArgumentsHost::new(error, head);
                    Ok(filter.catch(&host))
                }
                None => Ok(response),
            }
        })
    }
}
