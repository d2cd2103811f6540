//! Validation of raw command-line/environment settings.
//!
//! Runs before any file is touched; every error here is fatal.

use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::cli::Cli;
use crate::config::{GateConfig, ThresholdConfig, ThresholdMode};
use crate::{GateError, Result};

/// Build a validated configuration from parsed arguments.
///
/// # Errors
/// Returns `MissingPattern` when no report pattern is configured,
/// `NegativeThreshold` for any negative limit and `InvalidMode` for an
/// unrecognized threshold mode.
pub fn validate_cli(cli: &Cli) -> Result<GateConfig> {
    let report_pattern = cli.report_filename_pattern.trim();
    if report_pattern.is_empty() {
        return Err(GateError::MissingPattern);
    }

    let thresholds = ThresholdConfig {
        failed_fails: non_negative("FailedFails", cli.failed_fails)?,
        failed_skips: non_negative("FailedSkips", cli.failed_skips)?,
        unstable_fails: non_negative("UnstableFails", cli.unstable_fails)?,
        unstable_skips: non_negative("UnstableSkips", cli.unstable_skips)?,
        failure_on_failed_test_config: cli.failure_on_failed_test_config,
        mode: ThresholdMode::from_str(&cli.threshold_mode)?,
        job_status: cli.job_status.clone(),
    };

    Ok(GateConfig {
        report_pattern: report_pattern.to_string(),
        thresholds,
        fail_if_no_results: cli.fail_if_no_results,
        summary_file: cli.summary_file.clone(),
    })
}

fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| GateError::NegativeThreshold { name, value })
}

/// Parse a verbosity name; unknown or empty values fall back to `info`.
#[must_use]
pub fn parse_log_level(raw: &str) -> LevelFilter {
    let raw = raw.trim();
    if raw.is_empty() {
        return LevelFilter::INFO;
    }
    let normalized = match raw.to_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "fatal" | "panic" => "error".to_string(),
        other => other.to_string(),
    };
    LevelFilter::from_str(&normalized).unwrap_or(LevelFilter::INFO)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
