//! Topic / User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{TopicRepositoryPort, UserRepositoryPort};
use crate::application::queries::{ListTopics, ListUsers};
use crate::domain::{Topic, User};

/// ListTopics Handler
pub struct ListTopicsHandler {
    topic_repo: Arc<dyn TopicRepositoryPort>,
}

impl ListTopicsHandler {
    pub fn new(topic_repo: Arc<dyn TopicRepositoryPort>) -> Self {
        Self { topic_repo }
    }

    pub async fn handle(&self, _query: ListTopics) -> Result<Vec<Topic>, ApplicationError> {
        Ok(self.topic_repo.find_all().await?)
    }
}

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, _query: ListUsers) -> Result<Vec<User>, ApplicationError> {
        Ok(self.user_repo.find_all().await?)
    }
}
