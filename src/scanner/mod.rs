mod pattern;

pub use pattern::ReportPattern;

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{GateError, Result};
use crate::output::{LogLevel, LogRecord, ReportSink};

/// Check that a located file can actually be opened for reading.
pub trait ReadProbe: Sync {
    /// # Errors
    /// Returns the I/O error that prevents reading `path`.
    fn probe(&self, path: &Path) -> std::io::Result<()>;
}

/// Probe that opens the file and immediately closes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenProbe;

impl ReadProbe for OpenProbe {
    fn probe(&self, path: &Path) -> std::io::Result<()> {
        File::open(path).map(drop)
    }
}

/// Resolves the report glob to the set of readable report files.
pub struct ReportLocator<P: ReadProbe = OpenProbe> {
    probe: P,
    tolerate_empty: bool,
}

impl ReportLocator<OpenProbe> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            probe: OpenProbe,
            tolerate_empty: false,
        }
    }
}

impl Default for ReportLocator<OpenProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ReadProbe> ReportLocator<P> {
    #[must_use]
    pub const fn with_probe(probe: P) -> Self {
        Self {
            probe,
            tolerate_empty: false,
        }
    }

    /// When set, a pattern without matches yields an empty list instead of
    /// `NoMatch`.
    #[must_use]
    pub const fn tolerate_empty(mut self, tolerate: bool) -> Self {
        self.tolerate_empty = tolerate;
        self
    }

    /// Expand `pattern` and keep the matches that can be read.
    ///
    /// Unreadable matches are reported to `sink` as warnings and dropped.
    ///
    /// # Errors
    /// Returns `PatternSyntax` for a malformed glob, `NoMatch` when nothing
    /// matches (unless empty results are tolerated) and `NoReadableFiles`
    /// when every match was dropped.
    pub fn locate(&self, pattern: &str, sink: &dyn ReportSink) -> Result<Vec<PathBuf>> {
        let compiled = ReportPattern::new(pattern)?;
        let matches = compiled.expand();
        let readable = self.readable(matches.iter(), sink);

        sink.record(
            LogRecord::new(
                LogLevel::Info,
                format!(
                    "Found {} report file(s) matching '{pattern}', {} readable",
                    matches.len(),
                    readable.len()
                ),
            )
            .with_field("pattern", pattern)
            .with_field("matches", matches.len())
            .with_field("readable", readable.len()),
        );

        if matches.is_empty() {
            return if self.tolerate_empty {
                Ok(Vec::new())
            } else {
                Err(GateError::NoMatch {
                    pattern: pattern.to_string(),
                })
            };
        }
        if readable.is_empty() {
            return Err(GateError::NoReadableFiles {
                pattern: pattern.to_string(),
            });
        }
        Ok(readable)
    }

    fn readable<'a>(
        &self,
        candidates: impl Iterator<Item = &'a PathBuf>,
        sink: &dyn ReportSink,
    ) -> Vec<PathBuf> {
        candidates
            .filter(|path| match self.probe.probe(path) {
                Ok(()) => true,
                Err(e) => {
                    sink.record(
                        LogRecord::new(
                            LogLevel::Warn,
                            format!("Skipping unreadable report file: {}", path.display()),
                        )
                        .with_field("file", path.display())
                        .with_field("error", e),
                    );
                    false
                }
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
