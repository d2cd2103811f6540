use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::GateError;

/// How failure/skip limits are compared against the run totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Limits are raw test counts.
    #[default]
    Absolute,
    /// Limits are percentages of the total number of tests.
    Percentage,
}

impl ThresholdMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Percentage => "percentage",
        }
    }
}

impl fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThresholdMode {
    type Err = GateError;

    /// Case-insensitive; empty selects the default. The legacy numeric
    /// values `1` and `2` are still understood.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "absolute" | "1" => Ok(Self::Absolute),
            "percentage" | "2" => Ok(Self::Percentage),
            _ => Err(GateError::InvalidMode(s.to_string())),
        }
    }
}

/// Limits and switches consumed by the threshold evaluator.
///
/// A limit of `0` means "no limit".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThresholdConfig {
    pub failed_fails: usize,
    pub failed_skips: usize,
    pub unstable_fails: usize,
    pub unstable_skips: usize,
    pub failure_on_failed_test_config: bool,
    pub mode: ThresholdMode,
    pub job_status: String,
}

impl ThresholdConfig {
    /// Whether the surrounding job already reported failure, which activates
    /// the unstable limits.
    #[must_use]
    pub fn job_failed(&self) -> bool {
        self.job_status.trim().eq_ignore_ascii_case("FAILED")
    }
}

/// Fully validated settings for one gate invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub report_pattern: String,
    pub thresholds: ThresholdConfig,
    pub fail_if_no_results: bool,
    pub summary_file: Option<PathBuf>,
}
