pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::services::{
    auth_service::AuthService, feed_service::FeedService, message_service::MessageService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub feed: FeedService,
    pub message_service: MessageService,
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let config = Arc::new(config);
        let feed = FeedService::new();
        let message_service = MessageService::new(pool.clone(), feed.clone());
        let auth_service = AuthService::new(pool.clone(), config.clone());

        Self {
            pool,
            config,
            feed,
            message_service,
            auth_service,
        }
    }
}
