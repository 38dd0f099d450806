//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod article_commands;
mod comment_commands;

pub mod handlers;

pub use article_commands::*;
pub use comment_commands::*;
