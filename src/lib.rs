//! Newsroom - 新闻文章 REST API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Article Context: 文章、排序 / 过滤允许值
//! - Comment Context: 评论
//! - Topic / User: 只读目录
//!
//! 应用层 (application/):
//! - Ports: Repository 端口
//! - Commands: CQRS 命令处理器（票数、评论增删）
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Persistence: SQLite（sqlx）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
