//! Decoding of one TestNG report file and its reduction to counters.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{GateError, Result};
use crate::output::{
    LogLevel, LogRecord, ReportSink, group_lines, suite_banner_lines, test_detail_lines,
};
use crate::report::{ClassResult, FileReport, RawReport, RunTotals, Suite, TestRecord};

/// Counters and test names collected from a group of test records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub totals: RunTotals,
    pub failed_tests: Vec<String>,
    pub skipped_tests: Vec<String>,
}

impl Tally {
    fn record(&mut self, test: &TestRecord, sink: &dyn ReportSink) {
        self.totals.total += 1;
        if test.is_failed() {
            self.totals.failures += 1;
            self.failed_tests.push(test.name.clone());
        } else if test.is_skipped() {
            self.totals.skipped += 1;
            self.skipped_tests.push(test.name.clone());
        }

        match test.duration() {
            Some(duration) => self.totals.duration_ms += duration,
            None => sink.record(
                LogRecord::new(
                    LogLevel::Warn,
                    format!("Invalid or missing DurationMS for test '{}'", test.name),
                )
                .with_field("duration_ms", test.duration_text()),
            ),
        }
    }

    fn merge(&mut self, other: Self) {
        self.totals += other.totals;
        self.failed_tests.extend(other.failed_tests);
        self.skipped_tests.extend(other.skipped_tests);
    }
}

/// Tally every test method of one class.
///
/// Records with a missing or malformed duration still count toward the
/// totals but add nothing to the duration sum.
#[must_use]
pub fn tally_class(class: &ClassResult, sink: &dyn ReportSink) -> Tally {
    let mut tally = Tally::default();
    for test in &class.tests {
        tally.record(test, sink);
    }
    tally
}

/// Tally a suite and log its summary, groups and per-test details.
#[must_use]
pub fn tally_suite(suite: &Suite, sink: &dyn ReportSink) -> Tally {
    if !suite.has_classes() {
        sink.record(
            LogRecord::new(
                LogLevel::Warn,
                format!("Suite '{}' contains no test classes", suite.name),
            )
            .with_field("suite", &suite.name),
        );
    }

    let mut tally = Tally::default();
    for class in suite.classes() {
        tally.merge(tally_class(class, sink));
    }

    sink.info_lines(suite_banner_lines(&suite.name, &tally.totals));
    sink.info_lines(group_lines(suite));
    sink.info_lines(test_detail_lines(suite));
    tally
}

/// Decode report markup from a buffered reader without loading it whole.
///
/// # Errors
/// Returns `MalformedReport` if the markup cannot be decoded and
/// `EmptySuites` if the document holds no suite.
pub fn decode<R: BufRead>(reader: R, path: &Path) -> Result<RawReport> {
    let report: RawReport =
        quick_xml::de::from_reader(reader).map_err(|e| GateError::MalformedReport {
            path: path.to_path_buf(),
            source: e,
        })?;

    if report.suites.is_empty() {
        return Err(GateError::EmptySuites {
            path: path.to_path_buf(),
        });
    }
    Ok(report)
}

/// Parses report files, logging through the given sink.
#[derive(Clone, Copy)]
pub struct ReportParser<'a> {
    sink: &'a dyn ReportSink,
}

impl<'a> ReportParser<'a> {
    #[must_use]
    pub const fn new(sink: &'a dyn ReportSink) -> Self {
        Self { sink }
    }

    /// Open, decode and reduce one report file.
    ///
    /// # Errors
    /// Returns `FileNotFound`, `PermissionDenied` or `FileRead` when the file
    /// cannot be opened, and the errors of [`decode`] otherwise.
    pub fn parse(&self, path: &Path) -> Result<FileReport> {
        self.sink.record(
            LogRecord::new(
                LogLevel::Info,
                format!("Processing file: {}", path.display()),
            )
            .with_field("file", path.display()),
        );

        let file = File::open(path).map_err(|e| GateError::from_io(path.to_path_buf(), e))?;
        let report = decode(BufReader::new(file), path)?;
        Ok(self.reduce(path, &report))
    }

    /// Reduce an already decoded report to per-file counters.
    #[must_use]
    pub fn reduce(&self, path: &Path, report: &RawReport) -> FileReport {
        let mut tally = Tally::default();
        for suite in &report.suites {
            tally.merge(tally_suite(suite, self.sink));
        }

        FileReport {
            path: path.to_path_buf(),
            totals: tally.totals,
            failed_tests: tally.failed_tests,
            skipped_tests: tally.skipped_tests,
        }
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
