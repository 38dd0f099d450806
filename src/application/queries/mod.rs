//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod article_queries;
mod catalog_queries;
mod comment_queries;

pub mod handlers;

pub use article_queries::*;
pub use catalog_queries::*;
pub use comment_queries::*;
