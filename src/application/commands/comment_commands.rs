//! Comment Commands

use crate::domain::{ArticleId, CommentId};

/// 发表评论命令（字段未校验）
#[derive(Debug, Clone)]
pub struct PostComment {
    pub article_id: ArticleId,
    pub username: Option<String>,
    pub body: Option<String>,
}

/// 删除评论命令
#[derive(Debug, Clone)]
pub struct DeleteComment {
    pub comment_id: CommentId,
}
