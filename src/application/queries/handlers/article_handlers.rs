//! Article Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ArticleRepositoryPort, TopicRepositoryPort};
use crate::application::queries::{GetArticle, ListArticles};
use crate::domain::{ArticleDetail, ArticleListing, ArticleSummary};

/// GetArticle Handler
pub struct GetArticleHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetArticleHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepositoryPort>) -> Self {
        Self { article_repo }
    }

    pub async fn handle(&self, query: GetArticle) -> Result<ArticleDetail, ApplicationError> {
        Ok(self.article_repo.find_by_id(query.article_id).await?)
    }
}

/// ListArticles Handler
///
/// 带 topic 过滤时，列表查询与话题存在性检查并发执行；
/// 未知话题返回 NotFound 而不是空列表。
pub struct ListArticlesHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
    topic_repo: Arc<dyn TopicRepositoryPort>,
}

impl ListArticlesHandler {
    pub fn new(
        article_repo: Arc<dyn ArticleRepositoryPort>,
        topic_repo: Arc<dyn TopicRepositoryPort>,
    ) -> Self {
        Self {
            article_repo,
            topic_repo,
        }
    }

    pub async fn handle(&self, query: ListArticles) -> Result<Vec<ArticleSummary>, ApplicationError> {
        let listing = ArticleListing::parse(
            query.sort_by.as_deref(),
            query.order.as_deref(),
            query.topic.as_deref(),
        )?;

        let Some(topic) = listing.topic.as_deref() else {
            return Ok(self.article_repo.list(&listing).await?);
        };

        let (articles, topic_exists) =
            tokio::join!(self.article_repo.list(&listing), self.topic_repo.exists(topic));

        if !topic_exists? {
            return Err(ApplicationError::not_found("Topic does not exist"));
        }

        Ok(articles?)
    }
}
