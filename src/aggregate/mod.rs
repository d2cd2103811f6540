//! Parallel parsing of located report files and merging into run totals.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::error::{GateError, Result};
use crate::output::{
    LogLevel, LogRecord, MemorySink, ReportSink, failed_tests_line, run_summary_lines,
    skipped_tests_line,
};
use crate::parser::ReportParser;
use crate::report::{FileReport, RunTotals};

/// A report file that could not be parsed.
#[derive(Debug)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: GateError,
}

/// Result of processing one dispatched path.
#[derive(Debug)]
pub enum FileOutcome {
    Parsed(FileReport),
    Failed(FailedFile),
}

/// One file's outcome together with the log records its worker produced.
///
/// Records are buffered so each file's suite blocks reach the shared sink
/// contiguously, whatever order the workers finish in.
#[derive(Debug)]
pub struct FileRun {
    pub outcome: FileOutcome,
    pub records: Vec<LogRecord>,
}

/// Run-level merge of every file outcome.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub totals: RunTotals,
    pub processed: Vec<PathBuf>,
    pub failed_files: Vec<FailedFile>,
    pub failed_tests: Vec<String>,
    pub skipped_tests: Vec<String>,
}

impl RunSummary {
    /// Number of files that were dispatched, parsed or not.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.processed.len() + self.failed_files.len()
    }

    fn absorb(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Parsed(report) => {
                self.totals += report.totals;
                self.processed.push(report.path);
                self.failed_tests.extend(report.failed_tests);
                self.skipped_tests.extend(report.skipped_tests);
            }
            FileOutcome::Failed(failed) => self.failed_files.push(failed),
        }
    }

    /// Emit the closing banner and the failed/skipped test name lists.
    pub fn log(&self, sink: &dyn ReportSink) {
        sink.info_lines(run_summary_lines(&self.totals));
        if let Some(line) = failed_tests_line(&self.failed_tests) {
            sink.info(line);
        }
        if let Some(line) = skipped_tests_line(&self.skipped_tests) {
            sink.info(line);
        }
    }
}

pub struct Aggregator<'a> {
    sink: &'a dyn ReportSink,
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub const fn new(sink: &'a dyn ReportSink) -> Self {
        Self { sink }
    }

    /// Parse every path on the rayon pool, one run per path in input order.
    #[must_use]
    pub fn dispatch(&self, paths: &[PathBuf]) -> Vec<FileRun> {
        paths
            .par_iter()
            .map(|path| {
                let buffer = MemorySink::new();
                let outcome = match ReportParser::new(&buffer).parse(path) {
                    Ok(report) => FileOutcome::Parsed(report),
                    Err(error) => FileOutcome::Failed(FailedFile {
                        path: path.clone(),
                        error,
                    }),
                };
                FileRun {
                    outcome,
                    records: buffer.into_records(),
                }
            })
            .collect()
    }

    /// Parse and merge all `paths`. Files that fail are logged and excluded.
    ///
    /// # Errors
    /// Returns `NoFilesProcessed` when `paths` is not empty and no file
    /// could be parsed.
    pub fn aggregate(&self, paths: &[PathBuf]) -> Result<RunSummary> {
        let runs = self.dispatch(paths);
        debug_assert_eq!(runs.len(), paths.len());

        let mut summary = RunSummary::default();
        for FileRun { outcome, records } in runs {
            for record in records {
                self.sink.record(record);
            }
            if let FileOutcome::Failed(failed) = &outcome {
                self.sink.record(
                    LogRecord::new(
                        LogLevel::Warn,
                        format!("Error processing file: {}", failed.error.detailed()),
                    )
                    .with_field("file", failed.path.display())
                    .with_field("error_type", failed.error.error_type()),
                );
            }
            summary.absorb(outcome);
        }

        if !paths.is_empty() && summary.processed.is_empty() {
            return Err(GateError::NoFilesProcessed {
                attempted: paths.len(),
            });
        }
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
