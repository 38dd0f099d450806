//! Topic HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListTopics;
use crate::infrastructure::http::dto::TopicsResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取话题列表
pub async fn list_topics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TopicsResponse>, ApiError> {
    let topics = state.list_topics_handler.handle(ListTopics).await?;
    Ok(Json(TopicsResponse { topics }))
}
