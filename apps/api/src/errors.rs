use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::intake::UploadError;
use crate::render::progress::ProgressError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Bodies are `{"error": <message>, "code": <CODE>}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Route not found: {method} {uri}")]
    RouteNotFound { method: Method, uri: Uri },

    /// Unexpected failure on an endpoint that still has demo data to offer;
    /// the fallback object's fields are merged into the error body.
    #[error("{message}: {details}")]
    ProcessingFailed {
        message: String,
        details: String,
        fallback: Value,
    },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Progress error: {0}")]
    Progress(#[from] ProgressError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Upload(e) => {
                if e.status().is_server_error() {
                    tracing::error!("Upload storage error: {e}");
                }
                (e.status(), json!({ "error": e.to_string(), "code": e.code() }))
            }
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "VALIDATION_ERROR" }),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "error": msg, "code": "NOT_FOUND" }),
            ),
            AppError::RouteNotFound { method, uri } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Route not found",
                    "message": format!("{method} {uri} is not a valid endpoint"),
                }),
            ),
            AppError::ProcessingFailed {
                message,
                details,
                fallback,
            } => {
                tracing::error!("{message}: {details}");
                let mut body = json!({
                    "error": message,
                    "code": "INTERNAL_ERROR",
                    "details": details,
                });
                if let (Some(body), Value::Object(extra)) = (body.as_object_mut(), fallback) {
                    for (key, value) in extra {
                        body.entry(key).or_insert(value);
                    }
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to render results", "code": "RENDER_ERROR" }),
                )
            }
            AppError::Progress(e) => {
                tracing::error!("Progress error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Analysis run entered an invalid state", "code": "INTERNAL_ERROR" }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error", "code": "INTERNAL_ERROR" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// `axum::Json` whose rejections render as `AppError::Validation`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Fallback handler for unmatched routes.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound { method, uri }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_upload_error_carries_code() {
        let (status, body) = body_of(AppError::Upload(UploadError::TooLarge)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "FILE_TOO_LARGE");
        assert_eq!(body["error"], "File too large. Maximum size is 5MB.");
    }

    #[tokio::test]
    async fn test_route_not_found_body() {
        let err = AppError::RouteNotFound {
            method: Method::GET,
            uri: Uri::from_static("/api/nope"),
        };
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["message"], "GET /api/nope is not a valid endpoint");
    }

    #[tokio::test]
    async fn test_processing_failed_merges_fallback() {
        let err = AppError::ProcessingFailed {
            message: "Failed to process CV".to_string(),
            details: "disk full".to_string(),
            fallback: json!({ "extractedData": { "detectedCareerField": "Data Science" } }),
        };
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to process CV");
        assert_eq!(body["extractedData"]["detectedCareerField"], "Data Science");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, body) = body_of(AppError::Internal(anyhow::anyhow!("secret"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
