//! HTTP Middleware
//!
//! 4xx / 5xx 响应日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// HTTP 状态码错误日志中间件
///
/// 业务错误的消息由 `ApiError::into_response()` 记录，这里补充方法、路径和耗时
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match status {
        500..=599 => tracing::error!(%method, %path, status, elapsed_ms, "HTTP server error"),
        400..=499 => tracing::warn!(%method, %path, status, elapsed_ms, "HTTP client error"),
        _ => tracing::debug!(%method, %path, status, elapsed_ms, "HTTP request completed"),
    }

    response
}
