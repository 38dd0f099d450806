//! Article Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 文章主键
pub type ArticleId = i64;

/// 文章（持久化的完整行）
///
/// `votes` 是唯一可通过 API 修改的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
}

/// 文章详情 = 文章 + 评论数（计算字段，不落库）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub article: Article,
    pub comment_count: i64,
}

/// 文章列表项（不含正文）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub article_id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    pub comment_count: i64,
}
