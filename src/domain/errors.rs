//! Domain Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("sort by key does not exist. Please enter a valid sort by key")]
    InvalidSortKey(String),

    #[error("order key does not exist. Please enter ASC or DESC")]
    InvalidSortOrder(String),

    #[error("New comment not accepted. Please make sure you enter both username and body of the new comment")]
    MissingCommentField(&'static str),
}
