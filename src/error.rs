use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api::routes::AVAILABLE_ENDPOINTS;

/// Every way a request can fail. Each variant renders as a JSON body with `success: false`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("{0}")]
    Unexpected(String),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ApiError::Unexpected(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::NotFound | ApiError::MethodNotAllowed => json!({
                "success": false,
                "error": self.to_string(),
                "available_endpoints": AVAILABLE_ENDPOINTS,
            }),
            ApiError::Internal => json!({
                "success": false,
                "error": self.to_string(),
                "message": "Please try again later",
            }),
            ApiError::MissingFields(_) | ApiError::Unexpected(_) => json!({
                "success": false,
                "error": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
