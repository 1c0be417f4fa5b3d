//! CLI subcommands and the file loading they share.

pub mod line;
pub mod price;
pub mod tiers;

use std::path::Path;

use packstore_core::{PricingError, TierSchedule, TierScheduleError};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but did not parse.
    #[error("Invalid {what} in {path}: {message}")]
    Parse {
        what: &'static str,
        path: String,
        message: String,
    },

    /// A tier schedule preset or file was rejected.
    #[error("Tier schedule error: {0}")]
    Schedule(#[from] TierScheduleError),

    /// A schedule file failed validation.
    #[error("Tier schedule {name} has {count} problem(s)")]
    InvalidSchedule { name: String, count: usize },

    /// Pricing needs configuration that was not given.
    #[error("{0}. Pass --schedule or set PRICING_TIER_SCHEDULE")]
    Pricing(#[from] PricingError),

    /// Output could not be rendered.
    #[error("Failed to render output: {0}")]
    Render(String),
}

/// File formats accepted for documents and schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Read and parse a JSON or YAML file, chosen by extension (YAML otherwise).
///
/// # Errors
///
/// Returns `CliError::Read` or `CliError::Parse`.
pub async fn load_file<T: DeserializeOwned>(path: &Path, what: &'static str) -> Result<T, CliError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        })?;
    parse(&content, Format::of(path)).map_err(|message| CliError::Parse {
        what,
        path: path.display().to_string(),
        message,
    })
}

fn parse<T: DeserializeOwned>(content: &str, format: Format) -> Result<T, String> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Resolve a schedule source: a preset name, otherwise a file path.
///
/// Problems in a schedule file are logged but do not stop pricing.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded.
pub async fn resolve_schedule(source: Option<&str>) -> Result<Option<TierSchedule>, CliError> {
    let Some(source) = source else {
        return Ok(None);
    };

    if TierSchedule::PRESETS.contains(&source) {
        let schedule = TierSchedule::preset(source)?;
        info!(schedule = %schedule.name, version = schedule.version, "Using preset tier schedule");
        return Ok(Some(schedule));
    }

    let schedule: TierSchedule = load_file(Path::new(source), "tier schedule").await?;
    info!(
        path = %source,
        schedule = %schedule.name,
        version = schedule.version,
        tiers = schedule.tiers.len(),
        "Loaded tier schedule"
    );
    for problem in schedule.problems() {
        warn!(schedule = %schedule.name, "Tier schedule problem: {problem}");
    }
    Ok(Some(schedule))
}

/// Render a value as pretty JSON.
pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Render(e.to_string()))
}
