//! SQLite Database - 数据库连接和建表

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// 文件库，不存在时创建
    pub fn file(path: impl AsRef<Path>, max_connections: u32) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 内存数据库每个连接都是独立的库，因此固定一个永不过期的连接。
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(&config.database_url)?
        .foreign_keys(true)
        .busy_timeout(Duration::from_millis(5000));

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

    if config.is_in_memory() {
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    } else {
        // WAL 模式，允许并发读写
        options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "SQLite pool created"
    );

    Ok(pool)
}

/// 创建表结构（幂等）
pub async fn create_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            slug TEXT PRIMARY KEY,
            description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            username TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            avatar_url TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            article_id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            topic TEXT NOT NULL REFERENCES topics(slug),
            author TEXT NOT NULL REFERENCES users(username),
            body TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            votes INTEGER NOT NULL DEFAULT 0 CHECK (typeof(votes) = 'integer')
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
            article_id INTEGER NOT NULL REFERENCES articles(article_id) ON DELETE CASCADE,
            author TEXT NOT NULL REFERENCES users(username),
            body TEXT NOT NULL,
            votes INTEGER NOT NULL DEFAULT 0 CHECK (typeof(votes) = 'integer'),
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_comments_article_id
        ON comments(article_id)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_articles_topic
        ON articles(topic)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema ready");
    Ok(())
}

/// 时间戳统一存为毫秒精度的 UTC RFC 3339，与建表时的默认值同格式，
/// 字典序即时间序
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(format!("{}: {}", raw, e)))
}

/// 票数累加溢出 i64 时 SQLite 会改存 REAL，由列上的 CHECK 拒绝
pub const VOTES_OUT_OF_RANGE: &str = "inc_votes would take votes out of range";

/// sqlx 错误转换，外键冲突和 CHECK 约束单独区分
pub(crate) fn map_db_error(err: sqlx::Error, fk_message: &str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            RepositoryError::ForeignKeyViolation(fk_message.to_string())
        }
        sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
            RepositoryError::ConstraintViolation(VOTES_OUT_OF_RANGE.to_string())
        }
        _ => RepositoryError::DatabaseError(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        create_schema(&pool).await.unwrap();
        // 幂等
        create_schema(&pool).await.unwrap();
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(DatabaseConfig::in_memory().is_in_memory());
        assert!(!DatabaseConfig::file("data/newsroom.db", 5).is_in_memory());
    }

    #[test]
    fn test_timestamp_format_round_trips() {
        let ts = Utc.with_ymd_and_hms(2020, 7, 9, 20, 11, 0).unwrap();
        let raw = format_timestamp(&ts);
        assert_eq!(raw, "2020-07-09T20:11:00.000Z");
        assert_eq!(parse_timestamp(&raw).unwrap(), ts);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(RepositoryError::SerializationError(_))
        ));
    }
}
