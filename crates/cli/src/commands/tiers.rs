//! Inspect and validate volume discount tier schedules.
//!
//! # Usage
//!
//! ```bash
//! # Print every preset
//! ps-cli tiers show
//!
//! # Print the schedule currently selected
//! PRICING_TIER_SCHEDULE=bulk ps-cli tiers show
//!
//! # Validate a schedule file before rolling it out
//! ps-cli tiers check config/tiers/spring-promo.yaml
//! ```

use std::path::Path;

use packstore_core::TierSchedule;
use tracing::{error, info};

use super::{CliError, load_file};

/// Print the selected schedule, or every preset when none is selected.
///
/// # Errors
///
/// Returns an error if a schedule cannot be rendered.
pub fn show(selected: Option<&TierSchedule>) -> Result<(), CliError> {
    let schedules = match selected {
        Some(schedule) => vec![schedule.clone()],
        None => TierSchedule::PRESETS
            .iter()
            .map(|name| TierSchedule::preset(name))
            .collect::<Result<Vec<_>, _>>()?,
    };

    let rendered = serde_yaml::to_string(&schedules).map_err(|e| CliError::Render(e.to_string()))?;

    #[allow(clippy::print_stdout)]
    {
        print!("{rendered}");
    }

    Ok(())
}

/// Validate a schedule file, logging every problem found.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or has problems.
pub async fn check(path: &Path) -> Result<TierSchedule, CliError> {
    let schedule: TierSchedule = load_file(path, "tier schedule").await?;
    info!(
        path = %path.display(),
        schedule = %schedule.name,
        version = schedule.version,
        tiers = schedule.tiers.len(),
        "Checking tier schedule"
    );

    let problems = schedule.problems();
    if problems.is_empty() {
        info!("Tier schedule is valid");
        return Ok(schedule);
    }

    error!("Tier schedule validation failed:");
    for problem in &problems {
        error!("  - {problem}");
    }
    Err(CliError::InvalidSchedule {
        name: schedule.name,
        count: problems.len(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ps-cli-{}-{name}", std::process::id()));
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_check_valid_schedule() {
        let path = write_temp(
            "valid-tiers.yaml",
            "name: trade\ntiers:\n  - min: 11\n    max: 20\n    discountPercent: 5\n  - min: 21\n    discountPercent: 10\n",
        )
        .await;

        let schedule = check(&path).await.unwrap();
        assert_eq!(schedule.name, "trade");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_check_reports_problem_count() {
        let path = write_temp(
            "gapped-tiers.yaml",
            "name: gapped\ntiers:\n  - min: 11\n    max: 20\n    discountPercent: 5\n  - min: 30\n    max: 10\n    discountPercent: 2\n",
        )
        .await;

        let result = check(&path).await;
        assert!(matches!(
            result,
            Err(CliError::InvalidSchedule { count: 3, .. })
        ));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[test]
    fn test_show_presets() {
        assert!(show(None).is_ok());
        assert!(show(Some(&TierSchedule::bulk())).is_ok());
    }
}
