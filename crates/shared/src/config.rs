//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Closeness check configuration.
    #[serde(default)]
    pub tolerance: ToleranceConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "lumenrate=info".to_string()
}

/// Closeness check configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ToleranceConfig {
    /// Relative factor used when none is given, as a decimal string.
    #[serde(default = "default_factor")]
    pub default_factor: String,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            default_factor: default_factor(),
        }
    }
}

fn default_factor() -> String {
    "0.01".to_string() // 1%
}

impl AppConfig {
    /// Loads configuration from config files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LUMENRATE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
