//! User - 只读的用户目录

use serde::{Deserialize, Serialize};

/// 用户，`username` 唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
