#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the testng-gate binary with a clean
/// `PLUGIN_*` environment.
#[macro_export]
macro_rules! testng_gate {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("testng-gate"));
        for var in common::PLUGIN_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
        cmd
    }};
}

pub const PLUGIN_VARS: &[&str] = &[
    "PLUGIN_REPORT_FILENAME_PATTERN",
    "PLUGIN_FAILED_FAILS",
    "PLUGIN_FAILED_SKIPS",
    "PLUGIN_FAILURE_ON_FAILED_TEST_CONFIG",
    "PLUGIN_UNSTABLE_FAILS",
    "PLUGIN_UNSTABLE_SKIPS",
    "PLUGIN_JOB_STATUS",
    "PLUGIN_THRESHOLD_MODE",
    "PLUGIN_FAIL_IF_NO_RESULTS",
    "PLUGIN_LOG_LEVEL",
    "PLUGIN_SUMMARY_FILE",
];

/// Temporary working directory with report files copied in from
/// `tests/fixtures`.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Copies `tests/fixtures/<name>` to `relative_path`.
    pub fn copy_fixture(&self, name: &str, relative_path: &str) {
        let content = fs::read_to_string(fixture_path(name)).expect("Failed to read fixture");
        self.create_file(relative_path, &content);
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
