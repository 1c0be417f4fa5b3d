//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PRICING_TIER_SCHEDULE` - Volume tier schedule: `standard`, `bulk`, or a
//!   path to a YAML/JSON schedule file. No default: volume-priced documents
//!   fail until one is chosen here or with `--schedule`.
//! - `PRICING_DEFAULT_CURRENCY` - Currency for `ps-cli line` output (default: TND)
//! - `LOG_FORMAT` - `text` (default) or `json`
//! - `RUST_LOG` - Log filter (default: `packstore_cli=info,packstore_core=warn`)

use packstore_core::CurrencyCode;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `text` or `json`, got `{s}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Tier schedule preset name or file path
    pub tier_schedule: Option<String>,
    /// Currency used when none is given on the command line
    pub default_currency: CurrencyCode,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let tier_schedule = get_optional_env("PRICING_TIER_SCHEDULE");
        let default_currency = get_env_or_default("PRICING_DEFAULT_CURRENCY", "TND")
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PRICING_DEFAULT_CURRENCY".to_string(), e.to_string())
            })?;
        let log_format = get_env_or_default("LOG_FORMAT", "text")
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar("LOG_FORMAT".to_string(), e))?;

        Ok(Self {
            tier_schedule,
            default_currency,
            log_format,
        })
    }

    /// The schedule to use: the command-line value wins over the environment.
    #[must_use]
    pub fn schedule_source<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
        flag.or(self.tier_schedule.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
