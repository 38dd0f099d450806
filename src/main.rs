//! Newsroom - 新闻文章 REST API
//!
//! - Domain: article/, comment/, topic, user
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence

use std::sync::Arc;

use newsroom::config::{load_config, print_config};
use newsroom::infrastructure::http::{AppState, HttpServer};
use newsroom::infrastructure::persistence::sqlite::{
    self, create_pool, create_schema, SeedData, SqliteArticleRepository, SqliteCommentRepository,
    SqliteTopicRepository, SqliteUserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},newsroom={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Newsroom - 新闻文章 REST API");
    print_config(&config);

    if !config.database.is_in_memory() {
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = sqlite::DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    create_schema(&pool).await?;

    if let Some(seed_file) = &config.database.seed_file {
        let data = SeedData::from_json_file(seed_file)?;
        sqlite::seed(&pool, &data).await?;
        tracing::info!(file = %seed_file.display(), "Dataset loaded");
    }

    // 创建 Repository 适配器
    let topic_repo = Arc::new(SqliteTopicRepository::new(pool.clone()));
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let article_repo = Arc::new(SqliteArticleRepository::new(pool.clone()));
    let comment_repo = Arc::new(SqliteCommentRepository::new(pool.clone()));

    let state = AppState::new(topic_repo, user_repo, article_repo, comment_repo);

    let server = HttpServer::new(&config.server, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
