//! Comment Context - 评论限界上下文

mod entities;

pub use entities::{Comment, CommentId, NewComment};
