//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::DomainError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{0}")]
    NotFound(String),

    /// 输入格式无效
    #[error("{0}")]
    InvalidInput(String),

    /// 创建时缺少必填字段
    #[error("{0}")]
    ValidationFailed(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// 创建输入无效错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::ForeignKeyViolation(msg)
            | RepositoryError::ConstraintViolation(msg) => Self::InvalidInput(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            // 无效的排序参数沿用 404
            DomainError::InvalidSortKey(_) | DomainError::InvalidSortOrder(_) => {
                Self::NotFound(err.to_string())
            }
            DomainError::MissingCommentField(_) => Self::ValidationFailed(err.to_string()),
        }
    }
}
