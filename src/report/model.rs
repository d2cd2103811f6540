//! Structural shapes of a TestNG `testng-results` document.
//!
//! These types only mirror the markup; reduction into counters happens in the
//! parser. Attributes are kept as raw strings where the source data is known to
//! be sloppy (durations, flags) so a single bad value never rejects a file.

use serde::Deserialize;

pub const STATUS_FAIL: &str = "FAIL";
pub const STATUS_SKIP: &str = "SKIP";

/// Root of one report file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawReport {
    #[serde(rename = "suite", default)]
    pub suites: Vec<Suite>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Suite {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@duration-ms", default)]
    pub duration_ms: Option<String>,
    #[serde(default)]
    pub groups: Option<Groups>,
    #[serde(rename = "test", default)]
    pub tests: Vec<TestBlock>,
}

impl Suite {
    /// Group entries of the suite, empty when the `groups` element is absent.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        self.groups.as_ref().map_or(&[], |g| g.groups.as_slice())
    }

    /// All classes across the suite's `test` blocks, in document order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassResult> {
        self.tests.iter().flat_map(|t| t.classes.iter())
    }

    #[must_use]
    pub fn has_classes(&self) -> bool {
        self.classes().next().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Groups {
    #[serde(rename = "group", default)]
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Group {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "method", default)]
    pub methods: Vec<GroupMethod>,
}

/// Method associated with a group. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupMethod {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@signature", default)]
    pub signature: String,
    #[serde(rename = "@class", default)]
    pub class_name: String,
}

/// A `<test>` element inside a suite; only its classes matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TestBlock {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "class", default)]
    pub classes: Vec<ClassResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClassResult {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "test-method", default)]
    pub tests: Vec<TestRecord>,
}

/// One `<test-method>`: a test or a configuration method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TestRecord {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@status", default)]
    pub status: String,
    #[serde(rename = "@duration-ms", default)]
    pub duration_ms: Option<String>,
    #[serde(rename = "@is-config", default)]
    pub is_config: Option<String>,
    #[serde(rename = "@description", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exception: Option<Exception>,
}

impl TestRecord {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == STATUS_FAIL
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.status == STATUS_SKIP
    }

    /// Whether the record is a lifecycle hook (`@BeforeX` / `@AfterX`).
    #[must_use]
    pub fn is_config_method(&self) -> bool {
        self.is_config
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    /// Duration in milliseconds, `None` when absent or not a number.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.duration_ms
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|d| d.is_finite())
    }

    /// Raw duration text as it appeared in the report.
    #[must_use]
    pub fn duration_text(&self) -> &str {
        self.duration_ms.as_deref().unwrap_or("")
    }

    /// Short stack trace of a failure, `None` when absent or blank.
    #[must_use]
    pub fn failure_trace(&self) -> Option<&str> {
        self.exception
            .as_ref()
            .and_then(|e| e.short_stacktrace.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Exception {
    #[serde(rename = "@class", default)]
    pub class: Option<String>,
    #[serde(rename = "short-stacktrace", default)]
    pub short_stacktrace: Option<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
