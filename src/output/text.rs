//! Human-readable log lines for suites, tests and the run summary.

use crate::report::{RunTotals, Suite};

pub const BANNER: &str = "===============================================";
pub const RULE: &str = "---------------------------------------------------------------------------";

fn counts_line(label: &str, totals: &RunTotals) -> String {
    format!(
        "{label}: {} | Failures: {} | Skips: {} | Duration: {:.2} ms",
        totals.total, totals.failures, totals.skipped, totals.duration_ms
    )
}

/// Banner opening the per-suite section.
#[must_use]
pub fn suite_banner_lines(suite_name: &str, totals: &RunTotals) -> Vec<String> {
    vec![
        BANNER.to_string(),
        format!("Suite: {suite_name}"),
        counts_line("Total Tests", totals),
        RULE.to_string(),
    ]
}

#[must_use]
pub fn group_lines(suite: &Suite) -> Vec<String> {
    let mut lines = vec!["Groups:".to_string()];
    for group in suite.groups() {
        lines.push(format!("- Group: {}", group.name));
        for method in &group.methods {
            lines.push(format!(
                "  - Method: {} | Class: {} | Signature: {}",
                method.name, method.class_name, method.signature
            ));
        }
    }
    lines
}

#[must_use]
pub fn test_detail_lines(suite: &Suite) -> Vec<String> {
    let mut lines = vec!["Test Details:".to_string()];
    for test in suite.classes().flat_map(|c| c.tests.iter()) {
        lines.push(format!(
            "- Test: {} | Status: {} | Duration: {} ms",
            test.name,
            test.status,
            test.duration_text()
        ));
        if test.is_failed()
            && let Some(trace) = test.failure_trace()
        {
            lines.push(format!("    Exception: {trace}"));
        }
    }
    lines
}

/// Banner block with the run-level totals.
#[must_use]
pub fn run_summary_lines(totals: &RunTotals) -> Vec<String> {
    vec![
        BANNER.to_string(),
        counts_line("Total Tests Results", totals),
        BANNER.to_string(),
    ]
}

#[must_use]
pub fn failed_tests_line(names: &[String]) -> Option<String> {
    name_list_line("Failed tests", names)
}

#[must_use]
pub fn skipped_tests_line(names: &[String]) -> Option<String> {
    name_list_line("Skipped tests", names)
}

fn name_list_line(label: &str, names: &[String]) -> Option<String> {
    (!names.is_empty()).then(|| format!("{label}: {}", names.join(", ")))
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
