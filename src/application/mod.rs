//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Topic / User / Article / Comment Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Article commands
    UpdateArticleVotes,
    // Comment commands
    DeleteComment,
    PostComment,
    // Handlers
    handlers::{DeleteCommentHandler, PostCommentHandler, UpdateArticleVotesHandler},
};

pub use error::ApplicationError;

pub use ports::{
    ArticleRepositoryPort, CommentRepositoryPort, RepositoryError, TopicRepositoryPort,
    UserRepositoryPort,
};

pub use queries::{
    // Article queries
    GetArticle,
    ListArticles,
    // Comment queries
    ListArticleComments,
    // Topic / User queries
    ListTopics,
    ListUsers,
    // Handlers
    handlers::{
        GetArticleHandler, ListArticleCommentsHandler, ListArticlesHandler, ListTopicsHandler,
        ListUsersHandler,
    },
};
