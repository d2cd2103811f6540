use std::fmt;

use crate::config::ThresholdMode;
use crate::error::{GateError, Result};

/// Quantity compared against a configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    FailedTests,
    SkippedTests,
    FailureRate,
    SkipRate,
}

impl Metric {
    #[must_use]
    pub const fn mode(self) -> ThresholdMode {
        match self {
            Self::FailedTests | Self::SkippedTests => ThresholdMode::Absolute,
            Self::FailureRate | Self::SkipRate => ThresholdMode::Percentage,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::FailedTests => "number of failed tests",
            Self::SkippedTests => "number of skipped tests",
            Self::FailureRate => "failure rate",
            Self::SkipRate => "skip rate",
        }
    }

    const fn threshold_name(self, unstable: bool) -> &'static str {
        match (self, unstable) {
            (_, true) => "unstable threshold",
            (Self::FailedTests, false) => "failure threshold",
            (Self::SkippedTests, false) => "skip threshold",
            (Self::FailureRate | Self::SkipRate, false) => "threshold",
        }
    }

    fn format_value(self, value: f64) -> String {
        match self.mode() {
            ThresholdMode::Absolute => format!("{value:.0}"),
            ThresholdMode::Percentage => format!("{value:.2}%"),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The first rule a run violated.
#[derive(Debug, Clone, PartialEq)]
pub enum Breach {
    /// Any failure was recorded while failing on configuration failures was
    /// requested.
    FailedConfiguration { failures: usize },
    Threshold {
        metric: Metric,
        observed: f64,
        limit: f64,
        /// Raised by the limits that only apply once the job has failed.
        unstable: bool,
    },
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailedConfiguration { .. } => f.write_str(
                "build marked as failed due to failed configuration methods as FailureOnFailedTestConfig is true",
            ),
            Self::Threshold {
                metric,
                observed,
                limit,
                unstable,
            } => {
                let prefix = if *unstable { "fail " } else { "" };
                let marker = if *unstable {
                    "Build marked as fail: "
                } else {
                    ""
                };
                write!(
                    f,
                    "{prefix}{} threshold validation failed: {marker}{metric} ({}) exceeded the {} ({})",
                    metric.mode(),
                    metric.format_value(*observed),
                    metric.threshold_name(*unstable),
                    metric.format_value(*limit),
                )
            }
        }
    }
}

/// Pass/fail decision for the pipeline step.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Pass,
    Fail(Breach),
}

impl Verdict {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub const fn breach(&self) -> Option<&Breach> {
        match self {
            Self::Pass => None,
            Self::Fail(breach) => Some(breach),
        }
    }

    /// # Errors
    /// Returns `ThresholdExceeded` carrying the breach for a failing verdict.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Pass => Ok(()),
            Self::Fail(breach) => Err(GateError::ThresholdExceeded(breach)),
        }
    }
}
