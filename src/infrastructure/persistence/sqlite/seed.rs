//! SQLite Seed - 用 JSON 数据集重置数据库
//!
//! 文章与评论的主键按数组顺序从 1 开始分配，评论通过 `article_id` 引用文章。

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::{format_timestamp, DbPool};
use crate::domain::{Topic, User};

/// Seed 错误
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write seed data: {0}")]
    Database(#[from] sqlx::Error),
}

/// 种子文章
#[derive(Debug, Clone, Deserialize)]
pub struct SeedArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i64,
}

/// 种子评论
#[derive(Debug, Clone, Deserialize)]
pub struct SeedComment {
    pub article_id: i64,
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

/// 完整数据集
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub articles: Vec<SeedArticle>,
    #[serde(default)]
    pub comments: Vec<SeedComment>,
}

impl SeedData {
    pub fn from_json_str(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// 清空四张表并写入数据集（单事务）
pub async fn seed(pool: &DbPool, data: &SeedData) -> Result<(), SeedError> {
    let mut tx = pool.begin().await?;

    for statement in [
        "DELETE FROM comments",
        "DELETE FROM articles",
        "DELETE FROM users",
        "DELETE FROM topics",
    ] {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    // 重置 AUTOINCREMENT 计数
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('articles', 'comments')")
        .execute(&mut *tx)
        .await?;

    for topic in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES (?, ?)")
            .bind(&topic.slug)
            .bind(&topic.description)
            .execute(&mut *tx)
            .await?;
    }

    for user in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.avatar_url)
            .execute(&mut *tx)
            .await?;
    }

    for (index, article) in data.articles.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO articles (article_id, title, topic, author, body, created_at, votes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(index as i64 + 1)
        .bind(&article.title)
        .bind(&article.topic)
        .bind(&article.author)
        .bind(&article.body)
        .bind(format_timestamp(&article.created_at))
        .bind(article.votes)
        .execute(&mut *tx)
        .await?;
    }

    for (index, comment) in data.comments.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO comments (comment_id, article_id, author, body, votes, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(index as i64 + 1)
        .bind(comment.article_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .bind(comment.votes)
        .bind(format_timestamp(&comment.created_at))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "Database seeded"
    );

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::testing::{seeded_pool, TEST_DATA};
    use super::*;

    #[test]
    fn test_fixture_parses() {
        let data = SeedData::from_json_str(TEST_DATA).unwrap();
        assert_eq!(data.topics.len(), 3);
        assert_eq!(data.articles.len(), 12);
        assert_eq!(data.comments.iter().filter(|c| c.article_id == 1).count(), 11);
    }

    #[tokio::test]
    async fn test_seed_is_repeatable() {
        let pool = seeded_pool().await;
        let data = SeedData::from_json_str(TEST_DATA).unwrap();
        seed(&pool, &data).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, data.comments.len() as i64);
    }

    #[tokio::test]
    async fn test_seed_rejects_dangling_comment() {
        let pool = seeded_pool().await;
        let mut data = SeedData::from_json_str(TEST_DATA).unwrap();
        data.comments[0].article_id = 999;

        assert!(matches!(seed(&pool, &data).await, Err(SeedError::Database(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SeedData::from_json_file("/definitely/not/here.json"),
            Err(SeedError::Io(_))
        ));
    }
}
