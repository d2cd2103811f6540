use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

use crate::error::{GateError, Result};

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// A report glob split into a literal directory to walk and a matcher for
/// the entries found below it.
#[derive(Debug, Clone)]
pub struct ReportPattern {
    base: PathBuf,
    matcher: GlobMatcher,
    max_depth: Option<usize>,
    relative_to_cwd: bool,
}

impl ReportPattern {
    /// Compile `pattern` with filesystem glob semantics: `*` and `?` never
    /// cross a `/`, `**` spans directories.
    ///
    /// # Errors
    /// Returns `PatternSyntax` if the pattern is not a valid glob.
    pub fn new(pattern: &str) -> Result<Self> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| GateError::PatternSyntax {
                pattern: pattern.to_string(),
                source: e,
            })?
            .compile_matcher();

        let segments: Vec<&str> = pattern.split('/').collect();
        let first_glob = segments.iter().position(|s| s.contains(GLOB_META));

        let (base, max_depth) = match first_glob {
            None => (PathBuf::from(pattern), Some(0)),
            Some(idx) => {
                let remaining = &segments[idx..];
                let depth = if remaining.iter().any(|s| s.contains("**")) {
                    None
                } else {
                    Some(remaining.len())
                };
                (base_dir(pattern, &segments[..idx]), depth)
            }
        };

        let relative_to_cwd = base.as_os_str().is_empty();
        Ok(Self {
            base: if relative_to_cwd {
                PathBuf::from(".")
            } else {
                base
            },
            matcher,
            max_depth,
            relative_to_cwd,
        })
    }

    #[must_use]
    pub fn is_match(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }

    /// Expand the pattern against the filesystem. Results are sorted and
    /// contain regular files only.
    #[must_use]
    pub fn expand(&self) -> Vec<PathBuf> {
        let mut walker = WalkDir::new(&self.base).follow_links(true);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut matches: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| self.display_path(e.path()))
            .filter(|p| self.is_match(p))
            .collect();
        matches.sort();
        matches.dedup();
        matches
    }

    fn display_path(&self, path: &Path) -> PathBuf {
        if self.relative_to_cwd {
            path.strip_prefix(".").unwrap_or(path).to_path_buf()
        } else {
            path.to_path_buf()
        }
    }
}

fn base_dir(pattern: &str, literal: &[&str]) -> PathBuf {
    let joined = literal.join("/");
    if joined.is_empty() && pattern.starts_with('/') {
        PathBuf::from("/")
    } else {
        PathBuf::from(joined)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
