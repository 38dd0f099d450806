//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod http;
pub mod persistence;

pub use http::{build_router, AppState, HttpServer};
pub use persistence::sqlite::{
    SqliteArticleRepository, SqliteCommentRepository, SqliteTopicRepository, SqliteUserRepository,
};
