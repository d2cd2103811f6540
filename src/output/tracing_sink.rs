use super::{LogLevel, LogRecord, ReportSink};

/// Record keys forwarded as individual `tracing` fields. Any other key is
/// folded into a single `fields` value.
const INDEXED_KEYS: &[&str] = &["file", "error_type", "pattern", "mode", "suite"];

macro_rules! emit {
    ($level:ident, $record:expr, $rest:expr) => {
        tracing::$level!(
            file = $record.field("file"),
            error_type = $record.field("error_type"),
            pattern = $record.field("pattern"),
            mode = $record.field("mode"),
            suite = $record.field("suite"),
            fields = $rest,
            "{}",
            $record.message
        )
    };
}

/// Forwards records to the `tracing` dispatcher installed by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn record(&self, record: LogRecord) {
        let rest = record.render_fields_except(INDEXED_KEYS);
        let rest = rest.as_deref();
        match record.level {
            LogLevel::Debug => emit!(debug, record, rest),
            LogLevel::Info => emit!(info, record, rest),
            LogLevel::Warn => emit!(warn, record, rest),
            LogLevel::Error => emit!(error, record, rest),
        }
    }
}

#[cfg(test)]
#[path = "tracing_sink_tests.rs"]
mod tests;
