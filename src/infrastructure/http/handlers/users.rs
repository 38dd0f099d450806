//! User HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListUsers;
use crate::infrastructure::http::dto::UsersResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取用户列表
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.list_users_handler.handle(ListUsers).await?;
    Ok(Json(UsersResponse { users }))
}
