//! HTTP error handling.
//!
//! Every failure is rendered as the standard envelope with `success: false`.
//! Domain errors keep HTTP 200 so clients branch on `success` alone; bodies
//! that do not decode at all get 400.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::ApiResponse;
use crate::error::ConversionError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Body is not JSON or does not match the request schema
    BadRequest(String),
    /// Validation, parse or computation failure from the core
    Conversion(ConversionError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conversion(_) => StatusCode::OK,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Conversion(err) => err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Conversion(err) => tracing::debug!(kind = err.kind(), "{}", err),
            AppError::BadRequest(msg) => tracing::warn!("Rejected request body: {}", msg),
        }
        let body: ApiResponse<()> = ApiResponse::failure(self.message());
        (status, Json(body)).into_response()
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        AppError::Conversion(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(ConversionError::validation("x")).status(),
            StatusCode::OK
        );
    }

    #[test]
    fn test_conversion_message_includes_kind() {
        let err = AppError::from(ConversionError::parse("not a time"));
        assert_eq!(err.message(), "Parse error: not a time");
    }
}
