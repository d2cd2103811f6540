use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::aggregate::RunSummary;
use crate::checker::Verdict;
use crate::error::Result;
use crate::report::RunTotals;

/// Machine-readable record of one gate invocation.
#[derive(Debug, Serialize)]
pub struct SummaryDocument {
    pub verdict: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub totals: RunTotals,
    pub processed_files: Vec<PathBuf>,
    pub failed_files: Vec<FailedFileEntry>,
    pub failed_tests: Vec<String>,
    pub skipped_tests: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FailedFileEntry {
    pub path: PathBuf,
    pub error: String,
}

impl SummaryDocument {
    /// `verdict` is `None` when thresholds were not evaluated (no reports found).
    #[must_use]
    pub fn new(summary: &RunSummary, verdict: Option<&Verdict>) -> Self {
        let verdict_name = match verdict {
            None => "not-evaluated",
            Some(v) if v.is_pass() => "pass",
            Some(_) => "fail",
        };
        Self {
            verdict: verdict_name,
            reason: verdict.and_then(Verdict::breach).map(ToString::to_string),
            totals: summary.totals,
            processed_files: summary.processed.clone(),
            failed_files: summary
                .failed_files
                .iter()
                .map(|f| FailedFileEntry {
                    path: f.path.clone(),
                    error: f.error.detailed(),
                })
                .collect(),
            failed_tests: summary.failed_tests.clone(),
            skipped_tests: summary.skipped_tests.clone(),
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the summary document to `path`, replacing any existing file.
///
/// # Errors
/// Returns an error if the document cannot be serialized or written.
pub fn write_summary(path: &Path, summary: &RunSummary, verdict: Option<&Verdict>) -> Result<()> {
    let json = SummaryDocument::new(summary, verdict).to_json()?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
