//! Comment Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ArticleRepositoryPort, CommentRepositoryPort};
use crate::application::queries::ListArticleComments;
use crate::domain::Comment;

/// ListArticleComments Handler
pub struct ListArticleCommentsHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
    comment_repo: Arc<dyn CommentRepositoryPort>,
}

impl ListArticleCommentsHandler {
    pub fn new(
        article_repo: Arc<dyn ArticleRepositoryPort>,
        comment_repo: Arc<dyn CommentRepositoryPort>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
        }
    }

    pub async fn handle(&self, query: ListArticleComments) -> Result<Vec<Comment>, ApplicationError> {
        // 两条查询并发，存在性检查的失败优先
        let (comments, exists) = tokio::join!(
            self.comment_repo.find_by_article(query.article_id),
            self.article_repo.ensure_exists(query.article_id),
        );

        exists?;
        Ok(comments?)
    }
}
