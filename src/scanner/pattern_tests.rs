use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "<testng-results/>").unwrap();
}

fn pattern_in(root: &Path, glob: &str) -> String {
    format!("{}/{glob}", root.display())
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = ReportPattern::new("[invalidpattern").unwrap_err();
    assert!(matches!(err, GateError::PatternSyntax { .. }));
}

#[test]
fn base_is_literal_prefix() {
    let pattern = ReportPattern::new("target/reports/*.xml").unwrap();
    assert_eq!(pattern.base, Path::new("target/reports"));
    assert_eq!(pattern.max_depth, Some(1));
}

#[test]
fn bare_glob_walks_current_directory() {
    let pattern = ReportPattern::new("*.xml").unwrap();
    assert_eq!(pattern.base, Path::new("."));
}

#[test]
fn absolute_root_glob_keeps_root() {
    let pattern = ReportPattern::new("/*.xml").unwrap();
    assert_eq!(pattern.base, Path::new("/"));
}

#[test]
fn single_star_does_not_cross_directories() {
    let pattern = ReportPattern::new("reports/*.xml").unwrap();
    assert!(pattern.is_match(Path::new("reports/a.xml")));
    assert!(!pattern.is_match(Path::new("reports/nested/a.xml")));
}

#[test]
fn expand_matches_only_files_at_pattern_depth() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "reports/b.xml");
    touch(dir.path(), "reports/a.xml");
    touch(dir.path(), "reports/notes.log");
    touch(dir.path(), "reports/nested/c.xml");

    let pattern = ReportPattern::new(&pattern_in(dir.path(), "reports/*.xml")).unwrap();
    let found = pattern.expand();

    assert_eq!(
        found,
        vec![
            dir.path().join("reports/a.xml"),
            dir.path().join("reports/b.xml")
        ]
    );
}

#[test]
fn double_star_descends() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "a/testng-results.xml");
    touch(dir.path(), "a/b/c/testng-results.xml");
    touch(dir.path(), "a/b/other.xml");

    let pattern = ReportPattern::new(&pattern_in(dir.path(), "**/testng-results.xml")).unwrap();
    let found = pattern.expand();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.ends_with("testng-results.xml")));
}

#[test]
fn literal_path_matches_existing_file() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "report.xml");

    let literal = dir.path().join("report.xml");
    let pattern = ReportPattern::new(&literal.display().to_string()).unwrap();

    assert_eq!(pattern.expand(), vec![literal]);
}

#[test]
fn literal_directory_matches_nothing() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "reports/a.xml");

    let pattern = ReportPattern::new(&pattern_in(dir.path(), "reports")).unwrap();
    assert!(pattern.expand().is_empty());
}

#[test]
fn missing_base_expands_to_nothing() {
    let dir = TempDir::new().unwrap();
    let pattern = ReportPattern::new(&pattern_in(dir.path(), "absent/*.xml")).unwrap();
    assert!(pattern.expand().is_empty());
}

#[test]
fn character_class_and_alternates() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "r1.xml");
    touch(dir.path(), "r2.xml");
    touch(dir.path(), "rx.xml");

    let class = ReportPattern::new(&pattern_in(dir.path(), "r[0-9].xml")).unwrap();
    assert_eq!(class.expand().len(), 2);

    let alternates = ReportPattern::new(&pattern_in(dir.path(), "{r1,rx}.xml")).unwrap();
    assert_eq!(alternates.expand().len(), 2);
}
