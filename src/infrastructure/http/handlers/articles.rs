//! Article HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetArticle, ListArticles, UpdateArticleVotes};
use crate::infrastructure::http::dto::{
    ArticleDetailResponse, ArticleResponse, ArticlesResponse, ListArticlesParams,
    PatchArticleRequest,
};
use crate::infrastructure::http::error::{parse_id, ApiError};
use crate::infrastructure::http::state::AppState;

/// 获取文章列表
///
/// 查询参数：`sort_by`、`order_by`（或 `order`）、`filter_topic_by`
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListArticlesParams>, QueryRejection>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::InvalidInput(e.body_text()))?;

    let query = ListArticles {
        order: params.direction(),
        sort_by: params.sort_by,
        topic: params.filter_topic_by,
    };

    let articles = state.list_articles_handler.handle(query).await?;
    Ok(Json(ArticlesResponse { articles }))
}

/// 获取文章详情
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
) -> Result<Json<ArticleDetailResponse>, ApiError> {
    let query = GetArticle {
        article_id: parse_id(&article_id)?,
    };

    let article = state.get_article_handler.handle(query).await?;
    Ok(Json(ArticleDetailResponse { article }))
}

/// 累加文章票数
pub async fn patch_article(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
    body: Result<Json<PatchArticleRequest>, JsonRejection>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article_id = parse_id(&article_id)?;
    let Json(req) = body.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let inc_votes = req
        .inc_votes
        .ok_or_else(|| ApiError::InvalidInput("inc_votes is required".to_string()))?;

    let command = UpdateArticleVotes {
        article_id,
        inc_votes,
    };

    let article = state.update_article_votes_handler.handle(command).await?;
    Ok(Json(ArticleResponse { article }))
}
