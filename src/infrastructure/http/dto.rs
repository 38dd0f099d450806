//! Data Transfer Objects
//!
//! 成功响应统一包一层以资源命名的键，如 `{"topics": [...]}`

use serde::{Deserialize, Serialize};

use crate::domain::{Article, ArticleDetail, ArticleSummary, Comment, Topic, User};

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleSummary>,
}

/// 文章详情（GET）
#[derive(Debug, Serialize)]
pub struct ArticleDetailResponse {
    pub article: ArticleDetail,
}

/// 更新后的文章行（PATCH），不含 comment_count
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

// ============================================================================
// Requests
// ============================================================================

/// `GET /api/articles` 查询参数
///
/// `order` 是 `order_by` 的旧写法，两者同时出现时以 `order_by` 为准
#[derive(Debug, Default, Deserialize)]
pub struct ListArticlesParams {
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub order: Option<String>,
    pub filter_topic_by: Option<String>,
}

impl ListArticlesParams {
    pub fn direction(&self) -> Option<String> {
        self.order_by.clone().or_else(|| self.order.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct PatchArticleRequest {
    pub inc_votes: Option<i64>,
}

/// 字段是否缺失由领域层判断
#[derive(Debug, Deserialize)]
pub struct PostCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}
