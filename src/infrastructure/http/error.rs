//! HTTP Error Handling
//!
//! 所有失败在这里统一翻译为 `{status, {"msg": ...}}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 未匹配路由的固定消息
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// 路径 ID 格式错误的固定消息
pub const INVALID_ID: &str = "Invalid ID request. Please enter a valid ID Number";

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub msg: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InvalidInput(String),
    ValidationFailed(String),
    RouteNotFound,
    Internal(String),
}

impl ApiError {
    pub fn invalid_id() -> Self {
        ApiError::InvalidInput(INVALID_ID.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationFailed(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg)
            | ApiError::InvalidInput(msg)
            | ApiError::ValidationFailed(msg)
            | ApiError::Internal(msg) => msg,
            ApiError::RouteNotFound => ENDPOINT_NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.message(), "Internal server error");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.message(), "Request failed");
        }

        let body = ErrorResponse {
            msg: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound(msg) => ApiError::NotFound(msg),
            ApplicationError::InvalidInput(msg) => ApiError::InvalidInput(msg),
            ApplicationError::ValidationFailed(msg) => ApiError::ValidationFailed(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

/// 解析路径中的数字 ID
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::invalid_id())
}
