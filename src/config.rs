//! Application configuration.
//!
//! Settings for the ready-made advice, loadable from YAML files or
//! environment variables.

use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "callwrap.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "CALLWRAP_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "CALLWRAP";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "CALLWRAP_LOG";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or the merged result did not deserialize.
    #[error("configuration error: {0}")]
    Load(#[from] ::config::ConfigError),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Call tracing advice settings.
    pub trace: TraceConfig,
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `callwrap.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix, e.g.
    ///    `CALLWRAP__TRACE__LEVEL=debug`
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Severity at which [`Trace`](crate::advice::Trace) emits its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<TraceLevel> for tracing::Level {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::Trace => tracing::Level::TRACE,
            TraceLevel::Debug => tracing::Level::DEBUG,
            TraceLevel::Info => tracing::Level::INFO,
            TraceLevel::Warn => tracing::Level::WARN,
            TraceLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Call tracing settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Level of the before/after records. Failures are always logged at warn.
    pub level: TraceLevel,
    /// Include the call's arguments in the before record.
    pub log_arguments: bool,
    /// Include the returned value in the after record.
    pub log_result: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            level: TraceLevel::Info,
            log_arguments: true,
            log_result: true,
        }
    }
}
