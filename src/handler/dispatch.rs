use crate::common::{DefaultBody, ErrorStatus};
use crate::exception::{ArgumentsHost, ExceptionFilter, http_status};
use crate::handler::{Handler, HandlerRegistry};
use axum::http::StatusCode as HttpStatusCode;
use axum::response::Response;
use std::sync::Arc;

/// Which step of the fallback chain produced the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Override registered for exactly the classified status
    Exact(ErrorStatus),
    /// The `500` override standing in for a missing exact one
    CatchAll,
    /// No override; the error itself is rendered
    Default,
}

/// Resolves a classified error to exactly one response producer.
///
/// Resolution order, first match wins:
/// 1. the override for the exact classified status
/// 2. the `500` override as catch-all
/// 3. the raw error rendered with the configured [`DefaultBody`]
#[derive(Debug, Clone)]
pub struct StatusDispatcher {
    registry: Arc<HandlerRegistry>,
    default_body: DefaultBody,
}

impl StatusDispatcher {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self::with_default_body(registry, DefaultBody::default())
    }

    pub fn with_default_body(registry: HandlerRegistry, default_body: DefaultBody) -> Self {
        Self {
            registry: Arc::new(registry),
            default_body,
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Which resolution step applies to `status`
    pub fn resolve(&self, status: u16) -> Resolution {
        self.select(status)
            .map_or(Resolution::Default, |(resolution, _)| resolution)
    }

    fn select(&self, status: u16) -> Option<(Resolution, &Handler)> {
        let exact = ErrorStatus::try_from(status).ok().and_then(|known| {
            self.registry
                .get(known)
                .map(|handler| (Resolution::Exact(known), handler))
        });

        exact.or_else(|| {
            self.registry
                .get(ErrorStatus::InternalServerError)
                .map(|handler| (Resolution::CatchAll, handler))
        })
    }

    /// Produce the response for a raised error
    pub fn dispatch(&self, host: &ArgumentsHost) -> Response {
        let status = http_status(host.status());

        match self.select(host.status()) {
            Some((resolution, handler)) => {
                tracing::debug!(
                    "Dispatching {} error to {:?} handler: {}",
                    host.status(),
                    resolution,
                    host.error()
                );
                let mut response = handler.call(host);
                // Plain values come back as 200 and take the error's status.
                if !handler.returns_response() && response.status() == HttpStatusCode::OK {
                    *response.status_mut() = status;
                }
                response
            }
            None => {
                tracing::debug!(
                    "No handler for {} error, rendering default body: {}",
                    host.status(),
                    host.error()
                );
                self.default_body.render(host.error(), status)
            }
        }
    }
}

impl ExceptionFilter for StatusDispatcher {
    fn catch(&self, host: &ArgumentsHost) -> Response {
        self.dispatch(host)
    }
}
