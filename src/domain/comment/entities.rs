//! Comment Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::article::ArticleId;
use crate::domain::DomainError;

/// 评论主键
pub type CommentId = i64;

/// 评论
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub article_id: ArticleId,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

/// 待插入的评论
///
/// 只能通过 [`NewComment::new`] 构造，username 和 body 均非空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    username: String,
    body: String,
}

impl NewComment {
    pub fn new(username: Option<String>, body: Option<String>) -> Result<Self, DomainError> {
        let username = username
            .filter(|u| !u.is_empty())
            .ok_or(DomainError::MissingCommentField("username"))?;
        let body = body
            .filter(|b| !b.is_empty())
            .ok_or(DomainError::MissingCommentField("body"))?;

        Ok(Self { username, body })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_requires_both_fields() {
        let err = NewComment::new(None, Some("hello".to_string())).unwrap_err();
        assert_eq!(err, DomainError::MissingCommentField("username"));

        let err = NewComment::new(Some("lurker".to_string()), None).unwrap_err();
        assert_eq!(err, DomainError::MissingCommentField("body"));

        let err = NewComment::new(Some(String::new()), Some("hello".to_string())).unwrap_err();
        assert_eq!(err, DomainError::MissingCommentField("username"));
    }

    #[test]
    fn test_new_comment_accessors() {
        let comment = NewComment::new(Some("lurker".to_string()), Some("hello".to_string())).unwrap();
        assert_eq!(comment.username(), "lurker");
        assert_eq!(comment.body(), "hello");
    }
}
