//! SQLite User Repository

use async_trait::async_trait;

use super::DbPool;
use crate::application::ports::{RepositoryError, UserRepositoryPort};
use crate::domain::User;

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    name: String,
    avatar_url: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            username: row.username,
            name: row.name,
            avatar_url: row.avatar_url,
        }
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT username, name, avatar_url FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::seed::testing::seeded_pool;

    #[tokio::test]
    async fn test_find_all_users() {
        let repo = SqliteUserRepository::new(seeded_pool().await);
        let users = repo.find_all().await.unwrap();

        assert_eq!(users.len(), 4);
        assert!(users.iter().any(|u| u.username == "butter_bridge"));
    }
}
