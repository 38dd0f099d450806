//! Comment Queries

use crate::domain::ArticleId;

/// 列出文章评论查询
#[derive(Debug, Clone)]
pub struct ListArticleComments {
    pub article_id: ArticleId,
}
