//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::ApiConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> String {
        format!("tablero={},tower_http={}", self.level, self.level)
    }

    /// Install the global tracing subscriber
    ///
    /// `RUST_LOG` wins over the configured level. `format = "json"` selects
    /// structured output, anything else the human-readable formatter.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.filter_directive()));

        let registry = tracing_subscriber::registry().with(filter);

        if self.format.eq_ignore_ascii_case("json") {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        } else {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load from an explicit path, else from default locations, else defaults
    ///
    /// Environment overrides apply in every case. An explicit path that fails
    /// to load is an error; default locations that fail are skipped. Nothing
    /// is logged here since tracing is not up yet: the returned report carries
    /// what happened.
    pub fn load_default(explicit: Option<&Path>) -> Result<(Self, LoadReport), ConfigError> {
        let lookup = |key: &str| std::env::var(key).ok();

        if let Some(path) = explicit {
            let mut config = Self::load(path)?;
            let warnings = config.apply_overrides(lookup);
            let report = LoadReport {
                source: Some(path.to_path_buf()),
                warnings,
            };
            return Ok((config, report));
        }

        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("tablero").join("config.toml")),
            Some(PathBuf::from("/etc/tablero/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Ok(Self::load_first(&candidates, lookup))
    }

    /// First existing candidate that parses, else defaults; then overrides
    fn load_first(
        candidates: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let mut config = Config::default();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(loaded) => {
                    config = loaded;
                    report.source = Some(path.clone());
                    break;
                }
                Err(e) => report.warnings.push(format!("Skipping config: {}", e)),
            }
        }

        let warnings = config.apply_overrides(lookup);
        report.warnings.extend(warnings);
        (config, report)
    }

    /// Apply overrides from any key/value source, returning rejected values
    ///
    /// `TABLERO_PORT` takes precedence over the conventional `PORT`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(host) = lookup("TABLERO_HOST") {
            self.api.host = host;
        }

        let port = lookup("TABLERO_PORT").or_else(|| lookup("PORT"));
        if let Some(port) = port {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid port override: {}", port)),
            }
        }

        if let Some(origins) = lookup("TABLERO_CORS_ORIGINS") {
            self.api.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(level) = lookup("TABLERO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("TABLERO_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }
}

/// Outcome of [`Config::load_default`], logged once tracing is initialized
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the config came from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    /// Skipped files and rejected overrides
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Tablero Configuration
#
# Environment variables override these settings:
# - TABLERO_HOST
# - TABLERO_PORT (or PORT)
# - TABLERO_CORS_ORIGINS (comma-separated)
# - TABLERO_LOG_LEVEL
# - TABLERO_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 5000

# Allowed CORS origins (empty = any origin)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
