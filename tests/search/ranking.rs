//! Ranking order, ties and truncation.

use crate::common::{assert_report_well_formed, corpus_of, ranked_ids, sample_resumes, search};
use cvscan::SearchRequest;

#[test]
fn test_ties_keep_corpus_order() {
    let corpus = corpus_of(&[
        ("c", "rust"),
        ("a", "rust"),
        ("b", "rust"),
    ]);
    let report = search(&corpus, SearchRequest::new(["rust"]));
    assert_eq!(ranked_ids(&report), vec!["c", "a", "b"]);
}

#[test]
fn test_zero_total_documents_dropped() {
    let report = search(&sample_resumes(), SearchRequest::new(["kubernetes"]));
    assert_eq!(ranked_ids(&report), vec!["devops"]);
    assert_eq!(report.documents_scanned, 4);
}

#[test]
fn test_top_n_is_a_prefix_of_full_ranking() {
    let corpus = corpus_of(&[
        ("a", "go"),
        ("b", "go go go"),
        ("c", "go go"),
        ("d", "go go"),
        ("e", "go go go go"),
    ]);
    let full = search(&corpus, SearchRequest::new(["go"]).with_top_n(10));
    assert_eq!(ranked_ids(&full), vec!["e", "b", "c", "d", "a"]);

    for top_n in 1..=5 {
        let truncated = search(&corpus, SearchRequest::new(["go"]).with_top_n(top_n));
        assert_eq!(truncated.results.len(), top_n);
        assert_eq!(
            ranked_ids(&truncated),
            ranked_ids(&full)[..top_n].to_vec(),
            "top_n = {}",
            top_n
        );
        assert_report_well_formed(&truncated, top_n);
    }
}

#[test]
fn test_totals_sum_across_keywords() {
    let corpus = corpus_of(&[
        ("broad", "java sql rust"),
        ("deep", "java java"),
    ]);
    let report = search(&corpus, SearchRequest::new(["java", "sql", "rust"]));
    assert_eq!(ranked_ids(&report), vec!["broad", "deep"]);
    assert_eq!(report.results[0].total(), 3);
    assert_eq!(report.results[0].tally.hits().len(), 3);
}

#[test]
fn test_duplicate_keywords_counted_once() {
    let corpus = corpus_of(&[("r1", "SQL and sql")]);
    let report = search(&corpus, SearchRequest::new(["SQL", "sql", " Sql "]));
    assert_eq!(report.results[0].total(), 2);
    assert_eq!(report.results[0].tally.hits().len(), 1);
    assert_eq!(report.results[0].tally.hits()[0].label, "SQL");
}
