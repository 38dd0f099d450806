//! Comment HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteComment, ListArticleComments, PostComment};
use crate::infrastructure::http::dto::{CommentResponse, CommentsResponse, PostCommentRequest};
use crate::infrastructure::http::error::{parse_id, ApiError};
use crate::infrastructure::http::state::AppState;

/// 获取文章评论
pub async fn list_article_comments(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let query = ListArticleComments {
        article_id: parse_id(&article_id)?,
    };

    let comments = state.list_article_comments_handler.handle(query).await?;
    Ok(Json(CommentsResponse { comments }))
}

/// 发表评论
pub async fn post_comment(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
    body: Result<Json<PostCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let article_id = parse_id(&article_id)?;
    let Json(req) = body.map_err(|e| ApiError::InvalidInput(e.body_text()))?;

    let command = PostComment {
        article_id,
        username: req.username,
        body: req.body,
    };

    let comment = state.post_comment_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// 删除评论
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let command = DeleteComment {
        comment_id: parse_id(&comment_id)?,
    };

    state.delete_comment_handler.handle(command).await?;
    Ok(StatusCode::NO_CONTENT)
}
