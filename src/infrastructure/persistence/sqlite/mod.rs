//! SQLite Persistence - SQLite 数据库持久化实现

mod article_repo;
mod comment_repo;
mod database;
pub(crate) mod seed;
mod topic_repo;
mod user_repo;

pub use article_repo::*;
pub use comment_repo::*;
pub use database::*;
pub use seed::{seed, SeedArticle, SeedComment, SeedData, SeedError};
pub use topic_repo::*;
pub use user_repo::*;
