use std::path::PathBuf;

use thiserror::Error;

use crate::checker::Breach;
use crate::{EXIT_RUNTIME_ERROR, EXIT_THRESHOLD_EXCEEDED};

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Invalid report file pattern: {pattern}")]
    PatternSyntax {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("no files found matching the report filename pattern: {pattern}")]
    NoMatch { pattern: String },

    #[error("no readable report files matching the pattern: {pattern}")]
    NoReadableFiles { pattern: String },

    #[error("file not found: {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("permission denied: {path}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TestNG XML: {path}")]
    MalformedReport {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("no test suites found in the XML structure: {path}")]
    EmptySuites { path: PathBuf },

    #[error("invalid ThresholdMode: '{0}', expected 'absolute' or 'percentage'")]
    InvalidMode(String),

    #[error(
        "missing required parameter: ReportFilenamePattern. Please specify the pattern to locate the TestNG report files"
    )]
    MissingPattern,

    #[error("threshold values must be non-negative: {name} = {value}")]
    NegativeThreshold { name: &'static str, value: i64 },

    #[error("no report files could be processed ({attempted} attempted)")]
    NoFilesProcessed { attempted: usize },

    #[error("{0}")]
    ThresholdExceeded(Breach),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl GateError {
    /// Classify an I/O failure on a report file into its dedicated variant.
    #[must_use]
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path, source },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::FileRead { path, source },
        }
    }

    /// Short category name attached to log records.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::PatternSyntax { .. } | Self::NoMatch { .. } | Self::NoReadableFiles { .. } => {
                "Locate"
            }
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileRead { .. }
            | Self::MalformedReport { .. }
            | Self::EmptySuites { .. }
            | Self::NoFilesProcessed { .. } => "Parse",
            Self::InvalidMode(_) | Self::MissingPattern | Self::NegativeThreshold { .. } => {
                "Config"
            }
            Self::ThresholdExceeded(_) => "Threshold",
            Self::Io(_) | Self::JsonSerialize(_) => "IO",
        }
    }

    /// Process exit code for a run that ended with this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ThresholdExceeded(_) => EXIT_THRESHOLD_EXCEEDED,
            _ => EXIT_RUNTIME_ERROR,
        }
    }

    /// Message including the underlying cause, if any.
    #[must_use]
    pub fn detailed(&self) -> String {
        match std::error::Error::source(self) {
            Some(source) => format!("{self}: {source}"),
            None => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
