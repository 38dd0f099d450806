//! SQLite Article Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::map_db_error;
use super::{parse_timestamp, DbPool};
use crate::application::ports::{ArticleRepositoryPort, RepositoryError};
use crate::domain::{Article, ArticleDetail, ArticleId, ArticleListing, ArticleSummary};

const ARTICLE_NOT_FOUND: &str = "Invalid article id";
const ARTICLE_DOES_NOT_EXIST: &str = "Article id does not exist";

/// 列表查询，topic 为 NULL 时不过滤；ORDER BY 由 [`ArticleListing::order_clause`] 追加
const LIST_ARTICLES_SQL: &str = r#"
    SELECT articles.article_id, articles.title, articles.topic, articles.author,
           articles.created_at, articles.votes,
           (SELECT COUNT(*) FROM comments WHERE comments.article_id = articles.article_id) AS comment_count
    FROM articles
    WHERE (? IS NULL OR articles.topic = ?)
"#;

/// SQLite Article Repository
pub struct SqliteArticleRepository {
    pool: DbPool,
}

impl SqliteArticleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ArticleRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: String,
    votes: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = RepositoryError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            article_id: row.article_id,
            title: row.title,
            topic: row.topic,
            author: row.author,
            body: row.body,
            created_at: parse_timestamp(&row.created_at)?,
            votes: row.votes,
        })
    }
}

#[derive(FromRow)]
struct ArticleDetailRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    comment_count: i64,
}

impl TryFrom<ArticleDetailRow> for ArticleDetail {
    type Error = RepositoryError;

    fn try_from(row: ArticleDetailRow) -> Result<Self, Self::Error> {
        Ok(ArticleDetail {
            article: Article::try_from(row.article)?,
            comment_count: row.comment_count,
        })
    }
}

#[derive(FromRow)]
struct ArticleSummaryRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    created_at: String,
    votes: i64,
    comment_count: i64,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = RepositoryError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            article_id: row.article_id,
            title: row.title,
            topic: row.topic,
            author: row.author,
            created_at: parse_timestamp(&row.created_at)?,
            votes: row.votes,
            comment_count: row.comment_count,
        })
    }
}

#[async_trait]
impl ArticleRepositoryPort for SqliteArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> Result<ArticleDetail, RepositoryError> {
        let row: Option<ArticleDetailRow> = sqlx::query_as(
            r#"
            SELECT articles.article_id, articles.title, articles.topic, articles.author,
                   articles.body, articles.created_at, articles.votes,
                   (SELECT COUNT(*) FROM comments WHERE comments.article_id = articles.article_id) AS comment_count
            FROM articles
            WHERE articles.article_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.ok_or_else(|| RepositoryError::NotFound(ARTICLE_NOT_FOUND.to_string()))?
            .try_into()
    }

    async fn increment_votes(&self, id: ArticleId, delta: i64) -> Result<Article, RepositoryError> {
        // 读-改-写在一条 UPDATE 内完成
        let row: Option<ArticleRow> = sqlx::query_as(
            r#"
            UPDATE articles
            SET votes = votes + ?
            WHERE article_id = ?
            RETURNING article_id, title, topic, author, body, created_at, votes
            "#,
        )
        .bind(delta)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, ARTICLE_DOES_NOT_EXIST))?;

        row.ok_or_else(|| RepositoryError::NotFound(ARTICLE_NOT_FOUND.to_string()))?
            .try_into()
    }

    async fn list(&self, listing: &ArticleListing) -> Result<Vec<ArticleSummary>, RepositoryError> {
        let sql = format!("{} {}", LIST_ARTICLES_SQL, listing.order_clause());

        let rows: Vec<ArticleSummaryRow> = sqlx::query_as(&sql)
            .bind(listing.topic.as_deref())
            .bind(listing.topic.as_deref())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }

    async fn ensure_exists(&self, id: ArticleId) -> Result<(), RepositoryError> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT article_id FROM articles WHERE article_id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        found
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(ARTICLE_DOES_NOT_EXIST.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArticleSortKey, SortOrder};
    use crate::infrastructure::persistence::sqlite::seed::testing::{seeded_file_pool, seeded_pool};
    use crate::infrastructure::persistence::sqlite::VOTES_OUT_OF_RANGE;
    use std::sync::Arc;
    use tokio::task::JoinSet;

    #[tokio::test]
    async fn test_find_by_id_counts_comments() {
        let repo = SqliteArticleRepository::new(seeded_pool().await);
        let detail = repo.find_by_id(1).await.unwrap();

        assert_eq!(detail.article.article_id, 1);
        assert_eq!(detail.article.topic, "mitch");
        assert_eq!(detail.comment_count, 11);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = SqliteArticleRepository::new(seeded_pool().await);
        let err = repo.find_by_id(999_999).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(msg) if msg == ARTICLE_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_increment_votes_is_additive() {
        let repo = SqliteArticleRepository::new(seeded_pool().await);
        let before = repo.find_by_id(1).await.unwrap().article;

        repo.increment_votes(1, 1).await.unwrap();
        let after = repo.increment_votes(1, 1).await.unwrap();
        assert_eq!(after.votes, before.votes + 2);
        assert_eq!(after.title, before.title);
        assert_eq!(after.created_at, before.created_at);

        let after = repo.increment_votes(1, -102).await.unwrap();
        assert_eq!(after.votes, before.votes - 100);
    }

    #[tokio::test]
    async fn test_increment_votes_overflow_is_rejected() {
        let repo = SqliteArticleRepository::new(seeded_pool().await);

        for delta in [i64::MAX, i64::MAX - 50] {
            assert!(matches!(
                repo.increment_votes(1, delta).await,
                Err(RepositoryError::ConstraintViolation(msg)) if msg == VOTES_OUT_OF_RANGE
            ));
        }

        // 失败的 UPDATE 不落库
        assert_eq!(repo.find_by_id(1).await.unwrap().article.votes, 100);
        assert_eq!(repo.list(&ArticleListing::default()).await.unwrap().len(), 12);

        // 不溢出的大增量照常生效
        let article = repo.increment_votes(2, i64::MAX).await.unwrap();
        assert_eq!(article.votes, i64::MAX);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        const WRITERS: i64 = 40;

        let dir = tempfile::tempdir().unwrap();
        let pool = seeded_file_pool(&dir.path().join("votes.db"), 8).await;
        let repo = Arc::new(SqliteArticleRepository::new(pool.clone()));
        let before = repo.find_by_id(1).await.unwrap().article.votes;

        let mut writers = JoinSet::new();
        for _ in 0..WRITERS {
            let repo = repo.clone();
            writers.spawn(async move { repo.increment_votes(1, 1).await });
        }
        while let Some(result) = writers.join_next().await {
            result.unwrap().unwrap();
        }

        let after = repo.find_by_id(1).await.unwrap().article.votes;
        assert_eq!(after, before + WRITERS);
        pool.close().await;
    }

    #[tokio::test]
    async fn test_increment_votes_not_found() {
        let repo = SqliteArticleRepository::new(seeded_pool().await);
        assert!(matches!(
            repo.increment_votes(999_999, 1).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_default_order() {
        let repo = SqliteArticleRepository::new(seeded_pool().await);
        let articles = repo.list(&ArticleListing::default()).await.unwrap();

        assert_eq!(articles.len(), 12);
        assert!(articles
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_list_by_comment_count() {
        let repo = SqliteArticleRepository::new(seeded_pool().await);
        let listing = ArticleListing {
            sort_by: ArticleSortKey::CommentCount,
            order: SortOrder::Desc,
            topic: None,
        };
        let articles = repo.list(&listing).await.unwrap();

        assert_eq!(articles[0].article_id, 1);
        assert_eq!(articles[0].comment_count, 11);
    }

    #[tokio::test]
    async fn test_list_filtered_by_topic() {
        let repo = SqliteArticleRepository::new(seeded_pool().await);
        let listing = ArticleListing {
            topic: Some("cats".to_string()),
            ..ArticleListing::default()
        };
        let articles = repo.list(&listing).await.unwrap();

        assert!(!articles.is_empty());
        assert!(articles.iter().all(|a| a.topic == "cats"));

        let listing = ArticleListing {
            topic: Some("nonexistent".to_string()),
            ..ArticleListing::default()
        };
        assert!(repo.list(&listing).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_exists() {
        let repo = SqliteArticleRepository::new(seeded_pool().await);
        assert!(repo.ensure_exists(2).await.is_ok());
        assert!(matches!(
            repo.ensure_exists(999_999).await,
            Err(RepositoryError::NotFound(msg)) if msg == ARTICLE_DOES_NOT_EXIST
        ));
    }
}
