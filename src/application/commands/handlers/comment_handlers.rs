//! Comment Command Handlers

use std::sync::Arc;

use crate::application::commands::{DeleteComment, PostComment};
use crate::application::error::ApplicationError;
use crate::application::ports::{ArticleRepositoryPort, CommentRepositoryPort};
use crate::domain::{Comment, NewComment};

// ============================================================================
// PostComment
// ============================================================================

/// PostComment Handler
///
/// 错误优先级：缺字段 (406) > 文章不存在 (404) > 插入失败
pub struct PostCommentHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
    comment_repo: Arc<dyn CommentRepositoryPort>,
}

impl PostCommentHandler {
    pub fn new(
        article_repo: Arc<dyn ArticleRepositoryPort>,
        comment_repo: Arc<dyn CommentRepositoryPort>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
        }
    }

    pub async fn handle(&self, command: PostComment) -> Result<Comment, ApplicationError> {
        let new_comment = NewComment::new(command.username, command.body)?;

        // 外键约束兜底，存在性检查只负责给出明确的 404
        let (inserted, exists) = tokio::join!(
            self.comment_repo.insert(command.article_id, &new_comment),
            self.article_repo.ensure_exists(command.article_id),
        );

        exists?;
        let comment = inserted?;

        tracing::info!(
            comment_id = comment.comment_id,
            article_id = comment.article_id,
            author = %comment.author,
            "Comment created"
        );

        Ok(comment)
    }
}

// ============================================================================
// DeleteComment
// ============================================================================

/// DeleteComment Handler
pub struct DeleteCommentHandler {
    comment_repo: Arc<dyn CommentRepositoryPort>,
}

impl DeleteCommentHandler {
    pub fn new(comment_repo: Arc<dyn CommentRepositoryPort>) -> Self {
        Self { comment_repo }
    }

    pub async fn handle(&self, command: DeleteComment) -> Result<(), ApplicationError> {
        self.comment_repo.delete(command.comment_id).await?;

        tracing::info!(comment_id = command.comment_id, "Comment deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RepositoryError;
    use crate::domain::{Article, ArticleDetail, ArticleId, ArticleListing, ArticleSummary, CommentId};
    use async_trait::async_trait;
    use chrono::Utc;

    /// 只有 article 1 存在
    struct OneArticle;

    #[async_trait]
    impl ArticleRepositoryPort for OneArticle {
        async fn find_by_id(&self, _id: ArticleId) -> Result<ArticleDetail, RepositoryError> {
            unimplemented!()
        }

        async fn increment_votes(&self, _id: ArticleId, _delta: i64) -> Result<Article, RepositoryError> {
            unimplemented!()
        }

        async fn list(&self, _listing: &ArticleListing) -> Result<Vec<ArticleSummary>, RepositoryError> {
            unimplemented!()
        }

        async fn ensure_exists(&self, id: ArticleId) -> Result<(), RepositoryError> {
            if id == 1 {
                Ok(())
            } else {
                Err(RepositoryError::NotFound("Article id does not exist".to_string()))
            }
        }
    }

    /// 插入总是因外键失败，除非作者是 butter_bridge
    struct StrictComments;

    #[async_trait]
    impl CommentRepositoryPort for StrictComments {
        async fn find_by_article(&self, _article_id: ArticleId) -> Result<Vec<Comment>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn insert(&self, article_id: ArticleId, comment: &NewComment) -> Result<Comment, RepositoryError> {
            if article_id != 1 || comment.username() != "butter_bridge" {
                return Err(RepositoryError::ForeignKeyViolation(
                    "Comment author does not exist".to_string(),
                ));
            }
            Ok(Comment {
                comment_id: 19,
                article_id,
                author: comment.username().to_string(),
                body: comment.body().to_string(),
                votes: 0,
                created_at: Utc::now(),
            })
        }

        async fn delete(&self, _id: CommentId) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn handler() -> PostCommentHandler {
        PostCommentHandler::new(Arc::new(OneArticle), Arc::new(StrictComments))
    }

    fn post(article_id: ArticleId, username: Option<&str>, body: Option<&str>) -> PostComment {
        PostComment {
            article_id,
            username: username.map(str::to_string),
            body: body.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_missing_field_wins_over_missing_article() {
        let err = handler()
            .handle(post(999_999, Some("butter_bridge"), None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationFailed(_)));
    }

    #[tokio::test]
    async fn test_missing_article_wins_over_insert_failure() {
        let err = handler()
            .handle(post(999_999, Some("butter_bridge"), Some("hi")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(msg) if msg == "Article id does not exist"));
    }

    #[tokio::test]
    async fn test_unknown_author_is_invalid_input() {
        let err = handler()
            .handle(post(1, Some("nobody"), Some("hi")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_created() {
        let comment = handler()
            .handle(post(1, Some("butter_bridge"), Some("hi")))
            .await
            .unwrap();
        assert_eq!(comment.comment_id, 19);
        assert_eq!(comment.body, "hi");
    }
}
