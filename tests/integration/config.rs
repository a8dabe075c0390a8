//! Options files feeding real searches.

use std::fs;

use tempfile::TempDir;

use crate::common::sample_resumes;
use cvscan::{run_search, Algorithm, EscalationPolicy, Error, SearchOptions};

fn write_options(json: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cvscan.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

#[test]
fn test_options_file_drives_search() {
    let (_dir, path) = write_options(
        r#"{ "algorithm": "boyer-moore", "top_n": 1, "escalation": "per-document" }"#,
    );
    let options = SearchOptions::from_file(&path).unwrap();
    assert_eq!(options.fuzzy_threshold, 0.7);

    let request = options.into_request(["sql"]).unwrap();
    assert_eq!(request.algorithm, Algorithm::BoyerMoore);
    assert_eq!(request.escalation, EscalationPolicy::PerDocument);

    let report = run_search(&sample_resumes(), &request).unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].document.id, "backend");
}

#[test]
fn test_unknown_algorithm_falls_back_to_kmp() {
    let (_dir, path) = write_options(r#"{ "algorithm": "rabin-karp" }"#);
    let request = SearchOptions::from_file(&path)
        .unwrap()
        .into_request(["java"])
        .unwrap();
    assert_eq!(request.algorithm, Algorithm::Kmp);
}

#[test]
fn test_out_of_range_options_rejected() {
    let (_dir, path) = write_options(r#"{ "fuzzy_threshold": 0 }"#);
    let result = SearchOptions::from_file(&path).unwrap().into_request(["java"]);
    assert!(matches!(result, Err(Error::InvalidRequest(_))));
}

#[test]
fn test_unreadable_options_file() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        SearchOptions::from_file(&dir.path().join("absent.json")),
        Err(Error::Io { .. })
    ));
}
