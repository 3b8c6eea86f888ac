use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::pagination::Page;

pub const OK_MESSAGE: &str = "success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Fail,
}

/// Uniform response body: `{ status, message, total?, data? }`.
///
/// Domain failures travel in-band as `status: "fail"` with HTTP 200.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl Envelope<()> {
    /// Success with no payload
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            message: OK_MESSAGE.to_string(),
            total: None,
            data: None,
        }
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            status: Status::Ok,
            message: OK_MESSAGE.to_string(),
            total: None,
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: message.into(),
            total: None,
            data: None,
        }
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// Page items as `data`, unwindowed match count as `total`
    pub fn page(page: Page<T>) -> Self {
        Self {
            status: Status::Ok,
            message: OK_MESSAGE.to_string(),
            total: Some(page.total),
            data: Some(page.items),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        match serde_json::to_value(&self) {
            Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "status": Status::Fail,
                        "message": "Failed to serialize response data"
                    })),
                )
                    .into_response()
            }
        }
    }
}

// Convenience type alias
pub type ApiResult<T> = Result<Envelope<T>, crate::error::ApiError>;
