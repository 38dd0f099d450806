//! Domain Layer - 领域层
//!
//! 包含两个限界上下文和两个只读目录:
//! - Article Context: 文章、列表排序 / 过滤
//! - Comment Context: 评论
//! - Topic / User: 只读实体

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

mod errors;

pub use article::{Article, ArticleDetail, ArticleId, ArticleListing, ArticleSortKey, ArticleSummary, SortOrder};
pub use comment::{Comment, CommentId, NewComment};
pub use errors::DomainError;
pub use topic::Topic;
pub use user::User;
