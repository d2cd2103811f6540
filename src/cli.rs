use std::path::PathBuf;

use clap::Parser;

/// Every option can also be supplied through the `PLUGIN_*` environment
/// variable named next to it, which is how CI runners configure the step.
#[derive(Parser, Debug, Clone)]
#[command(name = "testng-gate")]
#[command(author, version, about = "Aggregate TestNG XML reports and enforce failure thresholds")]
#[command(long_about = "Aggregates pass/fail/skip counts across TestNG XML reports and \
    decides whether the pipeline step should fail.\n\n\
    Exit codes:\n  \
    0 - Thresholds passed (or no reports and --fail-if-no-results unset)\n  \
    1 - A threshold was exceeded\n  \
    2 - Configuration, discovery or processing error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Glob pattern locating the TestNG XML reports (e.g. target/surefire-reports/*.xml)
    #[arg(long, env = "PLUGIN_REPORT_FILENAME_PATTERN", default_value = "")]
    pub report_filename_pattern: String,

    /// Fail when failed tests exceed this count or percentage (0 = no limit)
    #[arg(
        long,
        env = "PLUGIN_FAILED_FAILS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub failed_fails: i64,

    /// Fail when skipped tests exceed this count or percentage (0 = no limit)
    #[arg(
        long,
        env = "PLUGIN_FAILED_SKIPS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub failed_skips: i64,

    /// Fail the build whenever any test failure was recorded
    #[arg(long, env = "PLUGIN_FAILURE_ON_FAILED_TEST_CONFIG")]
    pub failure_on_failed_test_config: bool,

    /// Failed-test limit applied only when the job status is FAILED (0 = no limit)
    #[arg(
        long,
        env = "PLUGIN_UNSTABLE_FAILS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub unstable_fails: i64,

    /// Skipped-test limit applied only when the job status is FAILED (0 = no limit)
    #[arg(
        long,
        env = "PLUGIN_UNSTABLE_SKIPS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub unstable_skips: i64,

    /// Status of the surrounding job, as reported by the CI system
    #[arg(long, env = "PLUGIN_JOB_STATUS", default_value = "")]
    pub job_status: String,

    /// Threshold mode: absolute or percentage (case-insensitive, default absolute)
    #[arg(long, env = "PLUGIN_THRESHOLD_MODE", default_value = "")]
    pub threshold_mode: String,

    /// Fail when no report files match the pattern
    #[arg(long, env = "PLUGIN_FAIL_IF_NO_RESULTS")]
    pub fail_if_no_results: bool,

    /// Log verbosity: trace, debug, info, warn or error
    #[arg(long, env = "PLUGIN_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Write a JSON summary of the run to this file
    #[arg(long, env = "PLUGIN_SUMMARY_FILE")]
    pub summary_file: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
