//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    DeleteCommentHandler, PostCommentHandler, UpdateArticleVotesHandler,
    // Query handlers
    GetArticleHandler, ListArticleCommentsHandler, ListArticlesHandler, ListTopicsHandler,
    ListUsersHandler,
    // Ports
    ArticleRepositoryPort, CommentRepositoryPort, TopicRepositoryPort, UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub update_article_votes_handler: UpdateArticleVotesHandler,
    pub post_comment_handler: PostCommentHandler,
    pub delete_comment_handler: DeleteCommentHandler,

    // ========== Query Handlers ==========
    pub list_topics_handler: ListTopicsHandler,
    pub list_users_handler: ListUsersHandler,
    pub get_article_handler: GetArticleHandler,
    pub list_articles_handler: ListArticlesHandler,
    pub list_article_comments_handler: ListArticleCommentsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        topic_repo: Arc<dyn TopicRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
        article_repo: Arc<dyn ArticleRepositoryPort>,
        comment_repo: Arc<dyn CommentRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            update_article_votes_handler: UpdateArticleVotesHandler::new(article_repo.clone()),
            post_comment_handler: PostCommentHandler::new(
                article_repo.clone(),
                comment_repo.clone(),
            ),
            delete_comment_handler: DeleteCommentHandler::new(comment_repo.clone()),

            // Query handlers
            list_topics_handler: ListTopicsHandler::new(topic_repo.clone()),
            list_users_handler: ListUsersHandler::new(user_repo),
            get_article_handler: GetArticleHandler::new(article_repo.clone()),
            list_articles_handler: ListArticlesHandler::new(article_repo.clone(), topic_repo),
            list_article_comments_handler: ListArticleCommentsHandler::new(
                article_repo,
                comment_repo,
            ),
        }
    }
}
