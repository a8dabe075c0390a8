//! Exact-to-fuzzy escalation behavior.

use crate::common::{corpus_of, count_for, ranked_ids, search};
use cvscan::{EscalationPolicy, Provenance, SearchRequest, FUZZY_SUFFIX};

#[test]
fn test_found_keyword_is_never_fuzzy_matched() {
    // "kubernetes" is exact in r1, so r2's misspelling is not credited
    let corpus = corpus_of(&[
        ("r1", "Kubernetes administrator"),
        ("r2", "Kubernets administrator"),
    ]);
    let report = search(&corpus, SearchRequest::new(["kubernetes"]));

    assert!(report.escalated.is_empty());
    assert!(report.timings.fuzzy.is_none());
    assert_eq!(ranked_ids(&report), vec!["r1"]);
    for result in &report.results {
        assert!(result
            .tally
            .hits()
            .iter()
            .all(|h| h.provenance == Provenance::Exact));
    }
}

#[test]
fn test_only_missing_keywords_escalate() {
    let corpus = corpus_of(&[
        ("r1", "Java and Kubernets"),
        ("r2", "java"),
    ]);
    let report = search(&corpus, SearchRequest::new(["java", "kubernetes"]));

    assert_eq!(report.escalated, vec!["kubernetes"]);
    assert_eq!(count_for(&report, "r1", "java"), Some(1));
    assert!(count_for(&report, "r1", "kubernetes (fuzzy)").is_some());
    assert_eq!(count_for(&report, "r2", "kubernetes (fuzzy)"), None);
}

#[test]
fn test_fuzzy_labels_carry_suffix() {
    let corpus = corpus_of(&[("r1", "Kubernets")]);
    let report = search(&corpus, SearchRequest::new(["Kubernetes"]));

    let hit = &report.results[0].tally.hits()[0];
    assert_eq!(hit.label, format!("Kubernetes{}", FUZZY_SUFFIX));
    assert_eq!(hit.keyword, "kubernetes");
    assert_eq!(hit.provenance, Provenance::Fuzzy);
}

#[test]
fn test_strict_threshold_rejects_typos() {
    let corpus = corpus_of(&[("r1", "Kubernets")]);
    let report = search(&corpus, SearchRequest::new(["kubernetes"]).with_threshold(1.0));

    assert_eq!(report.escalated, vec!["kubernetes"]);
    assert!(report.is_empty());
    assert!(report.timings.fuzzy.is_some());
}

#[test]
fn test_per_document_policy_credits_local_misses() {
    let corpus = corpus_of(&[
        ("r1", "Kubernetes administrator"),
        ("r2", "Kubernets administrator"),
    ]);
    let request =
        SearchRequest::new(["kubernetes"]).with_escalation(EscalationPolicy::PerDocument);
    let report = search(&corpus, request);

    assert_eq!(report.escalated, vec!["kubernetes"]);
    let mut ids = ranked_ids(&report);
    ids.sort();
    assert_eq!(ids, vec!["r1", "r2"]);
    assert_eq!(count_for(&report, "r1", "kubernetes"), Some(1));
    assert_eq!(count_for(&report, "r1", "kubernetes (fuzzy)"), None);
    assert!(count_for(&report, "r2", "kubernetes (fuzzy)").is_some());
}

#[test]
fn test_per_document_policy_without_misses_skips_fuzzy() {
    let corpus = corpus_of(&[("r1", "sql"), ("r2", "SQL")]);
    let request = SearchRequest::new(["sql"]).with_escalation(EscalationPolicy::PerDocument);
    let report = search(&corpus, request);

    assert!(report.escalated.is_empty());
    assert!(report.timings.fuzzy.is_none());
}
