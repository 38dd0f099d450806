//! Article Queries

use crate::domain::ArticleId;

/// 获取文章详情查询
#[derive(Debug, Clone)]
pub struct GetArticle {
    pub article_id: ArticleId,
}

/// 列出文章查询（原始查询参数，由 handler 校验）
#[derive(Debug, Clone, Default)]
pub struct ListArticles {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}
