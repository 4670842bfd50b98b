//! API error body
//!
//! Every failed request answers with `{"error": "<message>"}`. The status
//! code comes from the error kind, which is not serialized. Internal
//! failures only ever carry a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Kind of API failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    BadRequest,
    NotFound,
    Internal,
}

impl ApiErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub kind: ApiErrorKind,
    pub error: String,
}

impl ApiError {
    fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            error: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Internal, message)
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::not_found("Course not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Course not found"}));
    }

    #[test]
    fn test_api_error_bad_request() {
        let err = ApiError::bad_request("Name query parameter is required");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"error":"Name query parameter is required"}"#);
    }

    #[tokio::test]
    async fn test_api_error_internal_response() {
        let resp = ApiError::internal("Internal Server Error").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal Server Error");
        assert!(json.get("kind").is_none());
    }
}
