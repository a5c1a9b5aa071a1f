//! Extractors whose rejections go through the error handler.
//!
//! axum's own `Json`, `Form` and `Query` answer a malformed request with
//! their rejection text before any handler code runs. These wrappers
//! reject with [`Raised`] instead, so a bad body classifies as a parse
//! error and reaches the registered `400` override like any other error.

use crate::exception::Raised;
use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body extractor and response
///
/// # Example
/// ```
/// use meshestra_error_handler::prelude::*;
///
/// async fn echo(Json(value): Json<serde_json::Value>) -> Json<serde_json::Value> {
///     Json(value)
/// }
///
/// let app: Router = Router::new()
///     .route("/echo", axum::routing::post(echo))
///     .layer(error_handler(
///         HandlerRegistry::new().on(ErrorStatus::BadRequest, |_: &ArgumentsHost| "bad json"),
///     ));
/// ```
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(Raised))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// URL-encoded form body extractor
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Form), rejection(Raised))]
pub struct Form<T>(pub T);

/// Query string extractor
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Raised))]
pub struct Query<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::ErrorKind;
    use axum::{body::Body, http::Request};
    use serde::Deserialize;
    use serde_json::{Value, json};

    #[derive(Debug, Deserialize)]
    struct Page {
        page: u32,
    }

    #[tokio::test]
    async fn test_json_accepts_valid_body() {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"meshestra"}"#))
            .unwrap();

        let Json(value) = Json::<Value>::from_request(request, &()).await.unwrap();
        assert_eq!(value, json!({ "name": "meshestra" }));
    }

    #[tokio::test]
    async fn test_json_rejects_with_parse_error() {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let raised = Json::<Value>::from_request(request, &()).await.unwrap_err();
        assert_eq!(raised.kind(), ErrorKind::Parse);
        assert_eq!(raised.status(), 400);
    }

    #[tokio::test]
    async fn test_query_rejects_with_parse_error() {
        let (mut parts, _) = Request::builder()
            .uri("/users?page=two")
            .body(())
            .unwrap()
            .into_parts();

        let raised = Query::<Page>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(raised.kind(), ErrorKind::Parse);
        assert_eq!(raised.status(), 400);

        let (mut parts, _) = Request::builder()
            .uri("/users?page=2")
            .body(())
            .unwrap()
            .into_parts();
        let Query(page) = Query::<Page>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(page.page, 2);
    }

    #[tokio::test]
    async fn test_form_rejects_with_parse_error() {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("page=two"))
            .unwrap();

        let raised = Form::<Page>::from_request(request, &()).await.unwrap_err();
        assert_eq!(raised.kind(), ErrorKind::Parse);
    }
}
