//! SQLite Comment Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::map_db_error;
use super::{parse_timestamp, DbPool};
use crate::application::ports::{CommentRepositoryPort, RepositoryError};
use crate::domain::{ArticleId, Comment, CommentId, NewComment};

/// SQLite Comment Repository
pub struct SqliteCommentRepository {
    pool: DbPool,
}

impl SqliteCommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CommentRow {
    comment_id: i64,
    article_id: i64,
    author: String,
    body: String,
    votes: i64,
    created_at: String,
}

impl TryFrom<CommentRow> for Comment {
    type Error = RepositoryError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            comment_id: row.comment_id,
            article_id: row.article_id,
            author: row.author,
            body: row.body,
            votes: row.votes,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}

#[async_trait]
impl CommentRepositoryPort for SqliteCommentRepository {
    async fn find_by_article(&self, article_id: ArticleId) -> Result<Vec<Comment>, RepositoryError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            "SELECT comment_id, article_id, author, body, votes, created_at FROM comments WHERE article_id = ? ORDER BY comment_id",
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn insert(
        &self,
        article_id: ArticleId,
        comment: &NewComment,
    ) -> Result<Comment, RepositoryError> {
        let row: CommentRow = sqlx::query_as(
            r#"
            INSERT INTO comments (article_id, author, body)
            VALUES (?, ?, ?)
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(article_id)
        .bind(comment.username())
        .bind(comment.body())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Comment author does not exist"))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(
                "Comment id does not exist".to_string(),
            ));
        }

        Ok(())
    }
}
