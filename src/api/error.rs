//! Service errors rendered as RFC 7807 problem details

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::warn;

use crate::error::{GraphError, RenderError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<GraphError> for AppError {
    fn from(error: GraphError) -> Self {
        match error {
            GraphError::InvalidInput(message) => AppError::BadRequest(message),
        }
    }
}

impl From<RenderError> for AppError {
    fn from(error: RenderError) -> Self {
        AppError::Internal(error.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    title: String,
    status: u16,
    detail: String,
}

impl ErrorResponse {
    pub fn from_error(err: &AppError) -> Self {
        let status = err.status_code();
        Self {
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            status: status.as_u16(),
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(error = %self, "request failed");
        let status = self.status_code();
        (status, Json(ErrorResponse::from_error(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let err = AppError::from(GraphError::invalid("missing required column 'target'"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = serde_json::to_value(ErrorResponse::from_error(&err)).unwrap();
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "Bad Request");
        assert!(body["detail"].as_str().unwrap().contains("target"));
    }

    #[test]
    fn render_failure_maps_to_internal_error() {
        let render = RenderError::from(serde_json::from_str::<u8>("x").unwrap_err());
        let err = AppError::from(render);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
