use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use utilkit::db::DEFAULT_CONFIG_ROOT;

/// Prefix of environment variables overriding file settings, e.g.
/// `UTILKIT__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "UTILKIT";

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Some("info".to_string()),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    config_root: Option<String>,
}

impl AppConfig {
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

impl DatabaseConfig {
    /// Directory holding the per-database INI files.
    pub fn config_root(&self) -> &str {
        self.config_root.as_deref().unwrap_or(DEFAULT_CONFIG_ROOT)
    }
}

/// `~/.config/utilkit/config.toml` (platform equivalent), if a config
/// directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("utilkit").join("config.toml"))
}

/// Loads configuration from an optional TOML file, then the environment.
///
/// An explicitly given `path` must exist; the default location is optional.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();
    match path {
        Some(path) => {
            builder = builder.add_source(File::from(path).required(true));
        }
        None => {
            if let Some(default_path) = default_config_path() {
                builder = builder.add_source(File::from(default_path).required(false));
            }
        }
    }

    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__");

    builder
        .add_source(env_source) // environment entries override file values when present
        .build()?
        .try_deserialize::<AppConfig>()
}
