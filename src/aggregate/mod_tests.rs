use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::output::MemorySink;

fn report_xml(suite: &str, statuses: &[(&str, &str, &str)]) -> String {
    let methods: String = statuses
        .iter()
        .map(|(name, status, duration)| {
            format!(r#"<test-method name="{name}" status="{status}" duration-ms="{duration}"/>"#)
        })
        .collect();
    format!(
        r#"<testng-results><suite name="{suite}"><test name="t"><class name="C">{methods}</class></test></suite></testng-results>"#
    )
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn mixed_fixture() -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write(
            &dir,
            "a.xml",
            &report_xml("A", &[("a1", "PASS", "5"), ("a2", "FAIL", "5"), ("a3", "PASS", "5")]),
        ),
        write(&dir, "broken.xml", "<testng-results><suite>"),
        write(
            &dir,
            "b.xml",
            &report_xml("B", &[("b1", "SKIP", "1"), ("b2", "FAIL", "2")]),
        ),
        write(&dir, "empty.xml", "<testng-results></testng-results>"),
    ];
    (dir, paths)
}

#[test]
fn aggregate_sums_parsed_files_and_skips_bad_ones() {
    let (_dir, paths) = mixed_fixture();
    let sink = MemorySink::new();

    let summary = Aggregator::new(&sink).aggregate(&paths).unwrap();

    assert_eq!(
        summary.totals,
        RunTotals {
            total: 5,
            failures: 2,
            skipped: 1,
            duration_ms: 18.0,
        }
    );
    assert_eq!(summary.processed, vec![paths[0].clone(), paths[2].clone()]);
    assert_eq!(summary.failed_files.len(), 2);
    assert_eq!(summary.attempted(), paths.len());
    assert_eq!(summary.failed_tests, vec!["a2", "b2"]);
    assert_eq!(summary.skipped_tests, vec!["b1"]);
}

#[test]
fn failed_files_keep_their_error_kind() {
    let (_dir, paths) = mixed_fixture();
    let sink = MemorySink::new();

    let summary = Aggregator::new(&sink).aggregate(&paths).unwrap();

    assert!(matches!(
        summary.failed_files[0].error,
        GateError::MalformedReport { .. }
    ));
    assert!(matches!(
        summary.failed_files[1].error,
        GateError::EmptySuites { .. }
    ));
    assert_eq!(sink.messages_at(LogLevel::Warn).len(), 2);
}

fn outcome_path(outcome: &FileOutcome) -> &Path {
    match outcome {
        FileOutcome::Parsed(report) => &report.path,
        FileOutcome::Failed(failed) => &failed.path,
    }
}

#[test]
fn one_run_per_dispatched_path() {
    let (dir, mut paths) = mixed_fixture();
    paths.push(dir.path().join("vanished.xml"));
    let sink = MemorySink::new();

    let runs = Aggregator::new(&sink).dispatch(&paths);

    assert_eq!(runs.len(), paths.len());
    for (run, path) in runs.iter().zip(&paths) {
        assert_eq!(outcome_path(&run.outcome), path.as_path());
    }
    assert!(matches!(
        runs.last().map(|r| &r.outcome),
        Some(FileOutcome::Failed(FailedFile {
            error: GateError::FileNotFound { .. },
            ..
        }))
    ));
    // Workers log into their own buffers, never the shared sink.
    assert!(sink.records().is_empty());
}

#[test]
fn suite_blocks_stay_contiguous_on_many_threads() {
    let dir = TempDir::new().unwrap();
    let statuses: Vec<(String, &str, &str)> = (0..500)
        .map(|i| (format!("t{i}"), if i % 7 == 0 { "FAIL" } else { "PASS" }, "1"))
        .collect();
    let borrowed: Vec<(&str, &str, &str)> = statuses
        .iter()
        .map(|(name, status, duration)| (name.as_str(), *status, *duration))
        .collect();
    let paths: Vec<_> = (0..8)
        .map(|i| {
            write(
                &dir,
                &format!("r{i}.xml"),
                &report_xml(&format!("S{i}"), &borrowed),
            )
        })
        .collect();
    let sink = MemorySink::new();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(8)
        .build()
        .unwrap();

    let summary = pool
        .install(|| Aggregator::new(&sink).aggregate(&paths))
        .unwrap();

    assert_eq!(summary.totals.total, 4000);
    let markers: Vec<String> = sink
        .messages()
        .into_iter()
        .filter(|m| {
            m.starts_with("Processing file:")
                || m.starts_with("Suite:")
                || m == "Groups:"
                || m == "Test Details:"
        })
        .collect();
    assert_eq!(markers.len(), 8 * 4);
    for (i, block) in markers.chunks(4).enumerate() {
        assert!(block[0].ends_with(&format!("r{i}.xml")), "{block:?}");
        assert_eq!(block[1], format!("Suite: S{i}"));
        assert_eq!(block[2], "Groups:");
        assert_eq!(block[3], "Test Details:");
    }
}

#[test]
fn totals_do_not_depend_on_file_order() {
    let (_dir, paths) = mixed_fixture();
    let sink = MemorySink::new();
    let aggregator = Aggregator::new(&sink);

    let forward = aggregator.aggregate(&paths).unwrap();
    let reversed: Vec<_> = paths.iter().rev().cloned().collect();
    let backward = aggregator.aggregate(&reversed).unwrap();

    assert_eq!(forward.totals, backward.totals);
}

#[test]
fn every_file_failing_is_an_error() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write(&dir, "bad1.xml", "<testng-results><suite>"),
        write(&dir, "bad2.xml", "<testng-results/>"),
    ];
    let sink = MemorySink::new();

    let err = Aggregator::new(&sink).aggregate(&paths).unwrap_err();

    assert!(matches!(err, GateError::NoFilesProcessed { attempted: 2 }));
}

#[test]
fn empty_input_yields_empty_summary() {
    let sink = MemorySink::new();
    let summary = Aggregator::new(&sink).aggregate(&[]).unwrap();

    assert_eq!(summary.totals, RunTotals::new());
    assert_eq!(summary.attempted(), 0);
}

#[test]
fn summary_log_lists_names_only_when_present() {
    let sink = MemorySink::new();
    let mut summary = RunSummary::default();
    summary.log(&sink);
    assert_eq!(sink.records().len(), 3);

    let sink = MemorySink::new();
    summary.failed_tests = vec!["x".to_string(), "y".to_string()];
    summary.log(&sink);
    assert!(sink.contains(LogLevel::Info, "Failed tests: x, y"));
    assert!(!sink.contains(LogLevel::Info, "Skipped tests"));
}

#[test]
fn many_files_are_processed_in_parallel() {
    let dir = TempDir::new().unwrap();
    let paths: Vec<_> = (0..32)
        .map(|i| {
            write(
                &dir,
                &format!("r{i}.xml"),
                &report_xml("S", &[("ok", "PASS", "1"), ("bad", "FAIL", "1")]),
            )
        })
        .collect();
    let sink = MemorySink::new();

    let summary = Aggregator::new(&sink).aggregate(&paths).unwrap();

    assert_eq!(summary.totals.total, 64);
    assert_eq!(summary.totals.failures, 32);
    assert_eq!(summary.processed, paths);
}
