use std::sync::{Mutex, PoisonError};

use super::{LogLevel, LogRecord, ReportSink};

/// Sink that keeps every record in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    #[must_use]
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    /// Whether any record at `level` contains `needle` in its message.
    #[must_use]
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.records()
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }

    /// Consume the sink, returning the records in arrival order.
    #[must_use]
    pub fn into_records(self) -> Vec<LogRecord> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReportSink for MemorySink {
    fn record(&self, record: LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}
