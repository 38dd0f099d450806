//! Article Context - Value Objects
//!
//! 列表查询的排序 / 过滤参数。排序列和方向都是封闭枚举，
//! 只能映射到固定的 SQL 片段，调用方字符串不会进入查询文本。

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// 允许的排序列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortKey {
    ArticleId,
    Title,
    Topic,
    Author,
    Votes,
    CommentCount,
    #[default]
    CreatedAt,
}

impl ArticleSortKey {
    pub const ALL: [ArticleSortKey; 7] = [
        ArticleSortKey::ArticleId,
        ArticleSortKey::Title,
        ArticleSortKey::Topic,
        ArticleSortKey::Author,
        ArticleSortKey::Votes,
        ArticleSortKey::CommentCount,
        ArticleSortKey::CreatedAt,
    ];

    /// 查询参数中的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleSortKey::ArticleId => "article_id",
            ArticleSortKey::Title => "title",
            ArticleSortKey::Topic => "topic",
            ArticleSortKey::Author => "author",
            ArticleSortKey::Votes => "votes",
            ArticleSortKey::CommentCount => "comment_count",
            ArticleSortKey::CreatedAt => "created_at",
        }
    }

    /// ORDER BY 使用的列表达式
    pub fn column(&self) -> &'static str {
        match self {
            ArticleSortKey::ArticleId => "articles.article_id",
            ArticleSortKey::Title => "articles.title",
            ArticleSortKey::Topic => "articles.topic",
            ArticleSortKey::Author => "articles.author",
            ArticleSortKey::Votes => "articles.votes",
            // SELECT 中的别名
            ArticleSortKey::CommentCount => "comment_count",
            ArticleSortKey::CreatedAt => "articles.created_at",
        }
    }
}

impl FromStr for ArticleSortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::InvalidSortKey(s.to_string()))
    }
}

impl fmt::Display for ArticleSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(DomainError::InvalidSortOrder(s.to_string()))
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// 文章列表查询条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleListing {
    pub sort_by: ArticleSortKey,
    pub order: SortOrder,
    /// 精确匹配的 topic slug
    pub topic: Option<String>,
}

impl ArticleListing {
    /// 从原始查询参数构造
    ///
    /// 缺省值：`created_at` / `DESC` / 不过滤。空的 topic 视为不过滤，
    /// 空的 sort_by 则是无效排序列。
    pub fn parse(
        sort_by: Option<&str>,
        order: Option<&str>,
        topic: Option<&str>,
    ) -> Result<Self, DomainError> {
        let sort_by = sort_by.map(str::parse).transpose()?.unwrap_or_default();
        let order = order.map(str::parse).transpose()?.unwrap_or_default();
        let topic = topic.filter(|t| !t.is_empty()).map(str::to_string);

        Ok(Self {
            sort_by,
            order,
            topic,
        })
    }

    /// ORDER BY 子句，article_id 作为同方向的次级排序键
    pub fn order_clause(&self) -> String {
        let direction = self.order.keyword();
        format!(
            "ORDER BY {} {}, articles.article_id {}",
            self.sort_by.column(),
            direction,
            direction
        )
    }
}
