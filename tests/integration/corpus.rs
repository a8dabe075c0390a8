//! Directory and manifest corpora end to end.

use std::fs;

use tempfile::TempDir;

use crate::common::{assert_report_well_formed, write_text_corpus};
use cvscan::corpus::{self, MANIFEST_FILE};
use cvscan::{run_search, Algorithm, EmptyReason, Error, SearchRequest};

fn directory_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_text_corpus(
        dir.path(),
        &[
            ("alice", "Senior Java developer.\nJava, Spring and SQL."),
            ("bob", "Data analyst: SQL, SQL reporting, Python."),
            ("carol", "Graphic designer."),
        ],
    )
    .unwrap();
    dir
}

#[test]
fn test_directory_corpus_end_to_end() {
    let dir = directory_fixture();
    let source = corpus::open(dir.path()).unwrap();

    let request = SearchRequest::new(["java", "sql"]).with_algorithm(Algorithm::AhoCorasick);
    let report = run_search(&source, &request).unwrap();

    assert_report_well_formed(&report, request.top_n);
    let ids: Vec<&str> = report.results.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids, vec!["alice", "bob"]);
    assert_eq!(report.results[0].total(), 3);
    assert_eq!(report.results[1].total(), 2);
    assert_eq!(report.documents_scanned, 3);
    assert!(report.escalated.is_empty());
}

#[test]
fn test_non_text_files_are_ignored() {
    let dir = directory_fixture();
    fs::write(dir.path().join("notes.md"), "java java java java").unwrap();

    let source = corpus::open(dir.path()).unwrap();
    let report = run_search(&source, &SearchRequest::new(["java"])).unwrap();
    assert_eq!(report.documents_scanned, 3);
    assert_eq!(report.results[0].document.id, "alice");
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    let source = corpus::open(dir.path()).unwrap();
    let report = run_search(&source, &SearchRequest::new(["java"])).unwrap();
    assert_eq!(report.empty_reason, Some(EmptyReason::EmptyCorpus));
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let result = corpus::open(&missing).and_then(|source| run_search(&source, &SearchRequest::new(["java"])));
    assert!(matches!(result, Err(Error::Io { .. })));
}

fn manifest_fixture(manifest: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("resumes")).unwrap();
    fs::write(
        dir.path().join("resumes/10554236.txt"),
        "Backend engineer, Kubernetes and Go. kubernetes operators.",
    )
    .unwrap();
    fs::write(dir.path().join("resumes/20001.txt"), "Frontend, React.").unwrap();
    fs::write(dir.path().join(MANIFEST_FILE), manifest).unwrap();
    dir
}

const MANIFEST: &str = r#"{
  "version": 1,
  "documents": [
    { "id": "20001", "path": "resumes/20001.txt", "name": "Sam Park", "category": "DESIGN" },
    { "id": "10554236", "path": "resumes/10554236.txt", "name": "Jordan Lee", "category": "ENGINEERING" },
    { "id": "30003", "path": "resumes/missing.txt" }
  ]
}"#;

#[test]
fn test_manifest_corpus_carries_metadata() {
    let dir = manifest_fixture(MANIFEST);
    let source = corpus::open(dir.path()).unwrap();
    let report = run_search(&source, &SearchRequest::new(["kubernetes"])).unwrap();

    assert_eq!(report.results.len(), 1);
    let top = &report.results[0];
    assert_eq!(top.document.id, "10554236");
    assert_eq!(top.document.name.as_deref(), Some("Jordan Lee"));
    assert_eq!(top.document.category.as_deref(), Some("ENGINEERING"));
    assert_eq!(top.total(), 2);
}

#[test]
fn test_manifest_missing_file_is_unavailable() {
    let dir = manifest_fixture(MANIFEST);
    let source = corpus::open(dir.path()).unwrap();
    let report = run_search(&source, &SearchRequest::new(["react"])).unwrap();

    assert_eq!(report.unavailable, vec!["30003"]);
    assert_eq!(report.documents_scanned, 2);
    assert_eq!(report.results[0].document.id, "20001");
}

#[test]
fn test_manifest_fuzzy_escalation() {
    let dir = manifest_fixture(MANIFEST);
    let source = corpus::open(dir.path()).unwrap();
    let report = run_search(&source, &SearchRequest::new(["kubernets"])).unwrap();

    assert_eq!(report.escalated, vec!["kubernets"]);
    assert_eq!(report.results[0].document.id, "10554236");
    assert!(report.results[0].tally.count("kubernets (fuzzy)").is_some());
}

#[test]
fn test_invalid_manifests_rejected() {
    for manifest in [
        r#"{ "version": 2, "documents": [] }"#,
        r#"{ "version": 1, "documents": [ { "id": "", "path": "a.txt" } ] }"#,
        r#"{ "version": 1, "documents": [
              { "id": "a", "path": "a.txt" }, { "id": "a", "path": "b.txt" } ] }"#,
    ] {
        let dir = manifest_fixture(manifest);
        assert!(
            matches!(corpus::open(dir.path()), Err(Error::InvalidRequest(_))),
            "accepted {}",
            manifest
        );
    }
}

#[test]
fn test_malformed_manifest_is_json_error() {
    let dir = manifest_fixture("{ not json");
    assert!(matches!(corpus::open(dir.path()), Err(Error::Json { .. })));
}
