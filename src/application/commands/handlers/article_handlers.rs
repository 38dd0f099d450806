//! Article Command Handlers

use std::sync::Arc;

use crate::application::commands::UpdateArticleVotes;
use crate::application::error::ApplicationError;
use crate::application::ports::ArticleRepositoryPort;
use crate::domain::Article;

/// UpdateArticleVotes Handler
pub struct UpdateArticleVotesHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl UpdateArticleVotesHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepositoryPort>) -> Self {
        Self { article_repo }
    }

    pub async fn handle(&self, command: UpdateArticleVotes) -> Result<Article, ApplicationError> {
        let article = self
            .article_repo
            .increment_votes(command.article_id, command.inc_votes)
            .await?;

        tracing::info!(
            article_id = article.article_id,
            inc_votes = command.inc_votes,
            votes = article.votes,
            "Article votes updated"
        );

        Ok(article)
    }
}
