use crate::config::{ThresholdConfig, ThresholdMode};
use crate::output::{LogLevel, LogRecord, ReportSink};
use crate::report::RunTotals;

use super::{Breach, Metric, Verdict};

/// Decides whether run totals violate the configured limits.
///
/// Order of checks, first violation wins:
/// 1. any failure while `failure_on_failed_test_config` is set,
/// 2. the regular fail/skip limits in the configured mode,
/// 3. the unstable fail/skip limits, only when the job status is `FAILED`.
pub struct ThresholdEvaluator<'a> {
    config: &'a ThresholdConfig,
}

impl<'a> ThresholdEvaluator<'a> {
    #[must_use]
    pub const fn new(config: &'a ThresholdConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn evaluate(&self, totals: &RunTotals, sink: &dyn ReportSink) -> Verdict {
        // The aggregate carries no per-record is-config flag, so every
        // failure counts here.
        if self.config.failure_on_failed_test_config && totals.failures > 0 {
            return Verdict::Fail(Breach::FailedConfiguration {
                failures: totals.failures,
            });
        }

        if self.config.mode == ThresholdMode::Percentage && totals.is_empty() {
            sink.record(
                LogRecord::new(
                    LogLevel::Info,
                    "No tests were executed, skipping percentage threshold validation",
                )
                .with_field("mode", self.config.mode),
            );
            return Verdict::Pass;
        }

        let regular = self.check_limits(
            totals,
            self.config.failed_fails,
            self.config.failed_skips,
            false,
        );
        if let Some(breach) = regular {
            return Verdict::Fail(breach);
        }

        if self.config.job_failed() {
            let unstable = self.check_limits(
                totals,
                self.config.unstable_fails,
                self.config.unstable_skips,
                true,
            );
            if let Some(breach) = unstable {
                return Verdict::Fail(breach);
            }
        }

        Verdict::Pass
    }

    #[allow(clippy::cast_precision_loss)]
    fn check_limits(
        &self,
        totals: &RunTotals,
        fails_limit: usize,
        skips_limit: usize,
        unstable: bool,
    ) -> Option<Breach> {
        let (fail_metric, fail_observed, skip_metric, skip_observed) = match self.config.mode {
            ThresholdMode::Absolute => (
                Metric::FailedTests,
                totals.failures as f64,
                Metric::SkippedTests,
                totals.skipped as f64,
            ),
            ThresholdMode::Percentage => (
                Metric::FailureRate,
                totals.failure_rate()?,
                Metric::SkipRate,
                totals.skip_rate()?,
            ),
        };

        exceeded(fail_metric, fail_observed, fails_limit, unstable)
            .or_else(|| exceeded(skip_metric, skip_observed, skips_limit, unstable))
    }
}

/// A limit of zero disables the rule; otherwise the comparison is strict.
#[allow(clippy::cast_precision_loss)]
fn exceeded(metric: Metric, observed: f64, limit: usize, unstable: bool) -> Option<Breach> {
    let limit = limit as f64;
    (limit > 0.0 && observed > limit).then_some(Breach::Threshold {
        metric,
        observed,
        limit,
        unstable,
    })
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
