//! CLI configuration.
//!
//! Everything is env-driven. `CPF_OUTPUT` is read by clap alongside `--format`.

use anyhow::{bail, Result};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// CLI configuration (env-driven).
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level filter used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = lookup("CPF_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match lookup("CPF_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("CPF_LOG_FORMAT must be 'text' or 'json', got '{other}'."),
        };

        Ok(Self {
            log_level,
            log_format,
        })
    }
}
