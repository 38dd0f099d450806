//! Configuration Loader
//!
//! 合并顺序（后者覆盖前者）：结构体默认值 < `config.toml` / `config.local.toml` < `NEWSROOM_*` 环境变量

use config::{Config, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// 未显式指定文件时按顺序查找，均为可选
const DEFAULT_CONFIG_FILES: [&str; 2] = ["config", "config.local"];

const ENV_PREFIX: &str = "NEWSROOM";

/// 加载应用配置
///
/// 环境变量使用 `__` 分隔层级，例如：
/// - `NEWSROOM_SERVER__PORT=8080`
/// - `NEWSROOM_DATABASE__PATH=:memory:`
/// - `NEWSROOM_DATABASE__SEED_FILE=tests/fixtures/test_data.json`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 同 [`load_config`]，但给定路径时该文件必须存在
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    match config_path {
        Some(path) => builder = builder.add_source(File::from(path).required(true)),
        None => {
            for name in DEFAULT_CONFIG_FILES {
                builder = builder.add_source(File::with_name(name).required(false));
            }
        }
    }

    let app_config: AppConfig = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    validate_config(&app_config)?;
    Ok(app_config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let problem = if config.server.port == 0 {
        "server.port cannot be 0"
    } else if config.database.path.trim().is_empty() {
        "database.path cannot be empty"
    } else if config.database.max_connections == 0 {
        "database.max_connections must be at least 1"
    } else {
        return Ok(());
    };

    Err(ConfigError::ValidationError(problem.to_string()))
}

/// 启动时输出生效配置
pub fn print_config(config: &AppConfig) {
    tracing::info!(
        addr = %config.server.addr(),
        database = %config.database.path,
        max_connections = config.database.max_connections,
        seed_file = ?config.database.seed_file,
        log_level = %config.log.level,
        log_json = config.log.json,
        "Effective configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(msg)) if msg.contains("server.port")
        ));
    }

    #[test]
    fn test_rejects_blank_db_path() {
        let mut config = AppConfig::default();
        config.database.path = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_connections() {
        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(msg)) if msg.contains("max_connections")
        ));
    }

    #[test]
    fn test_load_from_toml_file() {
        let file = toml_file(
            r#"
[server]
port = 8088

[database]
path = ":memory:"
seed_file = "tests/fixtures/test_data.json"
"#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.database.is_in_memory());
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(
            config.database.seed_file.as_deref(),
            Some(Path::new("tests/fixtures/test_data.json"))
        );
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let file = toml_file("[server]\nport = 0\n");

        assert!(matches!(
            load_config_from_path(Some(file.path())),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(matches!(
            load_config_from_path(Some(&missing)),
            Err(ConfigError::LoadError(_))
        ));
    }
}
