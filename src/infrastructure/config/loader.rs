//! Hierarchical configuration loading.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid timeout_secs: {0}. Must be positive")]
    InvalidTimeout(u64),

    #[error("API base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("Cache URL cannot be empty")]
    EmptyCacheUrl,

    #[error("Cache namespace cannot be empty")]
    EmptyNamespace,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .postcache/config.yaml (project config, created by init)
    /// 3. Environment variables (`POSTCACHE_*` prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".postcache/config.yaml"))
            .merge(Env::prefixed("POSTCACHE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.api.timeout_secs));
        }

        if config.api.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        if config.cache.url.is_empty() {
            return Err(ConfigError::EmptyCacheUrl);
        }

        if config.cache.namespace.is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.cache.url, "redis://127.0.0.1:6379");
        assert_eq!(config.cache.namespace, "posts:user");
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("default config should be valid");
    }

    #[test]
    fn yaml_overrides_defaults() {
        let yaml = r"
api:
  base_url: http://localhost:8080
  timeout_secs: 3
cache:
  namespace: posts:test
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.cache.namespace, "posts:test");
        // Untouched sections keep their defaults
        assert_eq!(config.cache.url, "redis://127.0.0.1:6379");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTimeout(0))
        ));
    }

    #[test]
    fn rejects_empty_namespace() {
        let mut config = Config::default();
        config.cache.namespace = String::new();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyNamespace)
        ));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
