//! Article Commands

use crate::domain::ArticleId;

/// 累加文章票数命令（增量可正可负，不幂等）
#[derive(Debug, Clone)]
pub struct UpdateArticleVotes {
    pub article_id: ArticleId,
    pub inc_votes: i64,
}
