//! Topic - 只读的话题目录

use serde::{Deserialize, Serialize};

/// 话题，`slug` 唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
