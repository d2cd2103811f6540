use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use serde::Serialize;

/// Pass/fail/skip counters and summed duration for a file or a whole run.
///
/// Every test counts toward `total`; at most one of `failures`/`skipped`
/// is incremented per test, so `total >= failures + skipped` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RunTotals {
    pub total: usize,
    pub failures: usize,
    pub skipped: usize,
    pub duration_ms: f64,
}

impl RunTotals {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            failures: 0,
            skipped: 0,
            duration_ms: 0.0,
        }
    }

    /// Tests that were neither failed nor skipped.
    #[must_use]
    pub const fn others(&self) -> usize {
        self.total.saturating_sub(self.failures + self.skipped)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Failed tests as a percentage of `total`, `None` when nothing ran.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn failure_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.failures as f64 / self.total as f64 * 100.0)
    }

    /// Skipped tests as a percentage of `total`, `None` when nothing ran.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn skip_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.skipped as f64 / self.total as f64 * 100.0)
    }
}

impl AddAssign for RunTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.failures += rhs.failures;
        self.skipped += rhs.skipped;
        self.duration_ms += rhs.duration_ms;
    }
}

impl Add for RunTotals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sum for RunTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, t| acc + t)
    }
}

impl<'a> Sum<&'a Self> for RunTotals {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Reduction of one successfully parsed report file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub totals: RunTotals,
    pub failed_tests: Vec<String>,
    pub skipped_tests: Vec<String>,
}

#[cfg(test)]
#[path = "totals_tests.rs"]
mod tests;
