mod json;
mod memory;
mod text;
mod tracing_sink;

pub use json::{SummaryDocument, write_summary};
pub use memory::MemorySink;
pub use text::{
    BANNER, RULE, failed_tests_line, group_lines, run_summary_lines, skipped_tests_line,
    suite_banner_lines, test_detail_lines,
};
pub use tracing_sink::TracingSink;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// One structured log line produced by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogRecord {
    #[must_use]
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    /// Value of the first field named `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Fields not named in `skip`, rendered as space-separated `key=value`
    /// pairs. `None` when nothing is left.
    #[must_use]
    pub fn render_fields_except(&self, skip: &[&str]) -> Option<String> {
        let rendered: Vec<String> = self
            .fields
            .iter()
            .filter(|(k, _)| !skip.contains(k))
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        (!rendered.is_empty()).then(|| rendered.join(" "))
    }
}

/// Destination for the log records emitted while locating, parsing and
/// evaluating reports.
///
/// Implementations must tolerate calls from several worker threads at once.
pub trait ReportSink: Send + Sync {
    fn record(&self, record: LogRecord);

    fn debug(&self, message: String) {
        self.record(LogRecord::new(LogLevel::Debug, message));
    }

    fn info(&self, message: String) {
        self.record(LogRecord::new(LogLevel::Info, message));
    }

    fn warn(&self, message: String) {
        self.record(LogRecord::new(LogLevel::Warn, message));
    }

    fn error(&self, message: String) {
        self.record(LogRecord::new(LogLevel::Error, message));
    }

    /// Emit each line as its own info record.
    fn info_lines(&self, lines: Vec<String>) {
        for line in lines {
            self.info(line);
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
