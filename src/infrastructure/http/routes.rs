//! HTTP Routes
//!
//! API Endpoints:
//! - /api/topics                          GET     列出话题
//! - /api/users                           GET     列出用户
//! - /api/articles                        GET     列出文章（sort_by / order_by / filter_topic_by）
//! - /api/articles/:article_id            GET     文章详情
//! - /api/articles/:article_id            PATCH   累加票数
//! - /api/articles/:article_id/comments   GET     文章评论
//! - /api/articles/:article_id/comments   POST    发表评论
//! - /api/comments/:comment_id            DELETE  删除评论
//!
//! 其余路径和方法一律 404 `{"msg": "Endpoint not found"}`

use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::endpoint_not_found)
}

/// API 路由
///
/// 每个 MethodRouter 也挂上 fallback，方法不匹配时返回 404 而不是 405
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/topics",
            get(handlers::list_topics).fallback(handlers::endpoint_not_found),
        )
        .route(
            "/users",
            get(handlers::list_users).fallback(handlers::endpoint_not_found),
        )
        .merge(article_routes())
        .route(
            "/comments/:comment_id",
            delete(handlers::delete_comment).fallback(handlers::endpoint_not_found),
        )
}

/// Article 路由
fn article_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/articles",
            get(handlers::list_articles).fallback(handlers::endpoint_not_found),
        )
        .route(
            "/articles/:article_id",
            get(handlers::get_article)
                .patch(handlers::patch_article)
                .fallback(handlers::endpoint_not_found),
        )
        .route(
            "/articles/:article_id/comments",
            get(handlers::list_article_comments)
                .post(handlers::post_comment)
                .fallback(handlers::endpoint_not_found),
        )
}
