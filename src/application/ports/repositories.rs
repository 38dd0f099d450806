//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）
//!
//! 每个方法只发出一条参数化查询；查不到行时返回 `RepositoryError::NotFound`。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    Article, ArticleDetail, ArticleId, ArticleListing, ArticleSummary, Comment, CommentId,
    NewComment, Topic, User,
};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ForeignKeyViolation(String),

    /// 写入的值违反列约束（如票数溢出）
    #[error("{0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Topic / User Repository
// ============================================================================

/// Topic Repository Port
#[async_trait]
pub trait TopicRepositoryPort: Send + Sync {
    /// 获取所有话题
    async fn find_all(&self) -> Result<Vec<Topic>, RepositoryError>;

    /// 话题是否存在
    async fn exists(&self, slug: &str) -> Result<bool, RepositoryError>;
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 获取所有用户
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
}

// ============================================================================
// Article Repository
// ============================================================================

/// Article Repository Port
#[async_trait]
pub trait ArticleRepositoryPort: Send + Sync {
    /// 根据 ID 查找文章（含评论数）
    async fn find_by_id(&self, id: ArticleId) -> Result<ArticleDetail, RepositoryError>;

    /// 原子地累加票数并返回更新后的行
    async fn increment_votes(&self, id: ArticleId, delta: i64) -> Result<Article, RepositoryError>;

    /// 按排序 / 过滤条件列出文章
    async fn list(&self, listing: &ArticleListing) -> Result<Vec<ArticleSummary>, RepositoryError>;

    /// 存在性检查，不存在时返回 NotFound
    async fn ensure_exists(&self, id: ArticleId) -> Result<(), RepositoryError>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// Comment Repository Port
#[async_trait]
pub trait CommentRepositoryPort: Send + Sync {
    /// 获取文章的所有评论，文章不存在时为空
    async fn find_by_article(&self, article_id: ArticleId) -> Result<Vec<Comment>, RepositoryError>;

    /// 插入评论，comment_id / votes / created_at 由数据库生成
    async fn insert(
        &self,
        article_id: ArticleId,
        comment: &NewComment,
    ) -> Result<Comment, RepositoryError>;

    /// 删除评论
    async fn delete(&self, id: CommentId) -> Result<(), RepositoryError>;
}
