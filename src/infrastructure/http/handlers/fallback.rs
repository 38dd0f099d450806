//! Fallback Handler

use crate::infrastructure::http::error::ApiError;

/// 未匹配的路径或方法
pub async fn endpoint_not_found() -> ApiError {
    ApiError::RouteNotFound
}
