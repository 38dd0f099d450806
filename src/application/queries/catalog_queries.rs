//! Topic / User Queries

/// 列出所有话题
#[derive(Debug, Clone)]
pub struct ListTopics;

/// 列出所有用户
#[derive(Debug, Clone)]
pub struct ListUsers;
