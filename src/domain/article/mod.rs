//! Article Context - 文章限界上下文
//!
//! 职责:
//! - 文章实体与列表项
//! - 列表排序 / 过滤的允许值

mod entities;
mod value_objects;

pub use entities::{Article, ArticleDetail, ArticleId, ArticleSummary};
pub use value_objects::{ArticleListing, ArticleSortKey, SortOrder};
