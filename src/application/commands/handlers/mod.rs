//! Command Handlers 实现

mod article_handlers;
mod comment_handlers;

pub use article_handlers::*;
pub use comment_handlers::*;
