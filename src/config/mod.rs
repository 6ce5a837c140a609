//! Application configuration

mod app_config;

pub use app_config::{
    legacy_overrides, AppConfig, AuthConfig, LogFormat, LoggingConfig, ServerConfig,
    StorageConfig,
};
