use serde::Deserialize;

use crate::infrastructure::observability::ObservabilityConfig;
use crate::infrastructure::storage::PostgresConfig;

/// Legacy flat environment variables and the configuration keys they
/// override
const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.database"),
    ("DATABASE_URL", "database.url"),
    ("JWT_TOKEN", "auth.token"),
];

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub database: PostgresConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Shared-secret settings for the protected routes
#[derive(Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Bearer token expected on protected routes; empty rejects every request
    #[serde(default)]
    pub token: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.token.is_empty() { "" } else { "[REDACTED]" };
        f.debug_struct("AuthConfig").field("token", &token).finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// `postgres` or `memory`
    pub backend: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "postgres".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        for (key, value) in legacy_overrides(|name| std::env::var(name).ok()) {
            builder = builder.set_override(key, value)?;
        }

        builder.build()?.try_deserialize()
    }
}

/// Resolve the legacy flat variables into configuration overrides
///
/// Unset and empty variables are skipped.
pub fn legacy_overrides<F>(lookup: F) -> Vec<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    LEGACY_ENV_OVERRIDES
        .iter()
        .filter_map(|(name, key)| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .map(|value| (*key, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.storage.backend, "postgres");
        assert_eq!(config.database.max_connections, 10);
        assert!(config.auth.token.is_empty());
    }

    #[test]
    fn test_legacy_overrides() {
        let env: HashMap<&str, &str> = [
            ("PORT", "8081"),
            ("DB_HOST", "db.internal"),
            ("DB_NAME", "servicios"),
            ("JWT_TOKEN", "s3cret"),
            ("DB_PASSWORD", ""),
        ]
        .into_iter()
        .collect();

        let overrides = legacy_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(
            overrides,
            vec![
                ("server.port", "8081".to_string()),
                ("database.host", "db.internal".to_string()),
                ("database.database", "servicios".to_string()),
                ("auth.token", "s3cret".to_string()),
            ]
        );
    }

    #[test]
    fn test_overrides_deserialize_into_config() {
        let mut builder = config::Config::builder();
        for (key, value) in legacy_overrides(|name| match name {
            "PORT" => Some("4000".to_string()),
            "DB_PORT" => Some("5433".to_string()),
            "JWT_TOKEN" => Some("abc".to_string()),
            _ => None,
        }) {
            builder = builder.set_override(key, value).unwrap();
        }

        let config: AppConfig = builder.build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.port, 5433);
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.auth.token, "abc");
    }

    #[test]
    fn test_auth_config_debug_redacts_token() {
        let config = AuthConfig {
            token: "super-secret".to_string(),
        };

        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
