//! SQLite Topic Repository

use async_trait::async_trait;

use super::DbPool;
use crate::application::ports::{RepositoryError, TopicRepositoryPort};
use crate::domain::Topic;

/// SQLite Topic Repository
pub struct SqliteTopicRepository {
    pool: DbPool,
}

impl SqliteTopicRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TopicRow {
    slug: String,
    description: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Topic {
            slug: row.slug,
            description: row.description,
        }
    }
}

#[async_trait]
impl TopicRepositoryPort for SqliteTopicRepository {
    async fn find_all(&self) -> Result<Vec<Topic>, RepositoryError> {
        let rows: Vec<TopicRow> = sqlx::query_as("SELECT slug, description FROM topics")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Topic::from).collect())
    }

    async fn exists(&self, slug: &str) -> Result<bool, RepositoryError> {
        let found: Option<String> = sqlx::query_scalar("SELECT slug FROM topics WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::seed::testing::seeded_pool;

    #[tokio::test]
    async fn test_find_all_topics() {
        let repo = SqliteTopicRepository::new(seeded_pool().await);
        let topics = repo.find_all().await.unwrap();

        assert_eq!(topics.len(), 3);
        assert!(topics.iter().any(|t| t.slug == "cats" && t.description == "Not dogs"));
    }

    #[tokio::test]
    async fn test_topic_exists() {
        let repo = SqliteTopicRepository::new(seeded_pool().await);
        assert!(repo.exists("paper").await.unwrap());
        assert!(!repo.exists("dogs").await.unwrap());
    }
}
