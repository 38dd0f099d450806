//! Configuration Types
//!
//! 各配置段及其默认值。缺省字段一律回落到 `Default`

use serde::Deserialize;
use std::path::PathBuf;

/// 内存数据库的路径写法
pub const IN_MEMORY_PATH: &str = ":memory:";

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

/// `[server]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9090,
        }
    }
}

impl ServerConfig {
    /// `host:port`，直接交给 `TcpListener::bind`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[database]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite 文件路径，`:memory:` 表示内存数据库
    pub path: String,
    pub max_connections: u32,
    /// 启动时导入的 JSON 数据集，会先清空四张表
    pub seed_file: Option<PathBuf>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "data/newsroom.db".to_string(),
            max_connections: 5,
            seed_file: None,
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_PATH
    }

    /// sqlx 连接串；文件库不存在时自动创建
    pub fn database_url(&self) -> String {
        if self.is_in_memory() {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite:{}?mode=rwc", self.path)
        }
    }
}

/// `[log]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// EnvFilter 级别，`RUST_LOG` 优先
    pub level: String,
    /// 输出 JSON 行
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "0.0.0.0:9090");
        assert_eq!(config.database.path, "data/newsroom.db");
        assert_eq!(config.database.max_connections, 5);
        assert!(config.database.seed_file.is_none());
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_database_url() {
        let config = DatabaseConfig::default();
        assert!(!config.is_in_memory());
        assert_eq!(config.database_url(), "sqlite:data/newsroom.db?mode=rwc");

        let config = DatabaseConfig {
            path: IN_MEMORY_PATH.to_string(),
            ..DatabaseConfig::default()
        };
        assert!(config.is_in_memory());
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn test_partial_section_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "server": { "port": 8080 }, "log": { "json": true } }"#)
                .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.log.level, "info");
        assert!(config.log.json);
    }
}
