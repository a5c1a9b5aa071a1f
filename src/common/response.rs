use crate::common::ErrorStatus;
use crate::exception::Raised;
use axum::{
    Json,
    http::StatusCode as HttpStatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How an error is rendered when no override handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DefaultBody {
    /// `{"name": "Error", "message": "..."}`
    #[default]
    NameMessage,
    /// `{"statusCode": 404, "error": "NotFound", "message": "...", "timestamp": "..."}`
    Detailed,
}

/// The plain error shape: the error's name and message.
#[derive(Debug, Serialize)]
pub struct NameMessageBody {
    pub name: String,
    pub message: String,
}

/// The detailed error shape with status and timestamp.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedBody {
    pub status_code: u16,

    /// Status name, when the status is a known error status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub message: String,

    pub timestamp: String,
}

impl DefaultBody {
    /// Render a raised error with this shape
    ///
    /// # Example
    /// ```
    /// use meshestra_error_handler::common::DefaultBody;
    /// use meshestra_error_handler::exception::{NotFoundError, Raised};
    /// use axum::http::StatusCode;
    ///
    /// let raised = Raised::from(NotFoundError::new("boom!"));
    /// let response = DefaultBody::NameMessage.render(&raised, StatusCode::NOT_FOUND);
    /// assert_eq!(response.status(), StatusCode::NOT_FOUND);
    /// ```
    pub fn render(self, error: &Raised, status: HttpStatusCode) -> Response {
        match self {
            DefaultBody::NameMessage => {
                let body = NameMessageBody {
                    name: error.name().to_string(),
                    message: error.message(),
                };
                (status, Json(body)).into_response()
            }
            DefaultBody::Detailed => {
                let body = DetailedBody {
                    status_code: status.as_u16(),
                    error: ErrorStatus::try_from(status.as_u16())
                        .ok()
                        .map(|known| known.to_string()),
                    message: error.message(),
                    timestamp: chrono::Utc::now().to_rfc3339(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
