//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod article_handlers;
mod catalog_handlers;
mod comment_handlers;

pub use article_handlers::*;
pub use catalog_handlers::*;
pub use comment_handlers::*;
