//! Ranking and escalation invariants over random corpora.

use proptest::prelude::*;

use crate::common::{assert_report_well_formed, ranked_ids, search};
use cvscan::{MemoryCorpus, Provenance, SearchRequest};

const VOCABULARY: &[&str] = &["java", "sql", "rust", "golang", "python", "team", "lead", "the"];

fn resume_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY.to_vec()), 0..25)
        .prop_map(|words| words.join(" "))
}

fn corpus() -> impl Strategy<Value = MemoryCorpus> {
    corpus_of_size(0..12)
}

fn corpus_of_size(size: std::ops::Range<usize>) -> impl Strategy<Value = MemoryCorpus> {
    prop::collection::vec(resume_text(), size).prop_map(|texts| {
        MemoryCorpus::from_texts(
            texts
                .into_iter()
                .enumerate()
                .map(|(i, text)| (format!("r{:02}", i), text)),
        )
    })
}

/// Keywords drawn from the vocabulary plus a few that never occur exactly.
fn keywords() -> impl Strategy<Value = Vec<String>> {
    let pool = vec!["java", "SQL", "rust", "pythn", "kotlin", "golang", "leed"];
    prop::collection::vec(prop::sample::select(pool), 1..4)
        .prop_map(|ks| ks.into_iter().map(str::to_string).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_reports_are_well_formed(corpus in corpus(), keywords in keywords(), top_n in 1usize..8) {
        let report = search(&corpus, SearchRequest::new(keywords).with_top_n(top_n));
        assert_report_well_formed(&report, top_n);
    }

    /// A smaller top_n yields a prefix of the larger ranking.
    #[test]
    fn prop_truncation_is_prefix(corpus in corpus(), keywords in keywords(), top_n in 1usize..6) {
        let full = search(&corpus, SearchRequest::new(keywords.clone()).with_top_n(100));
        let short = search(&corpus, SearchRequest::new(keywords).with_top_n(top_n));

        let expected = full.results.len().min(top_n);
        prop_assert_eq!(short.results.len(), expected);
        prop_assert_eq!(&short.results[..], &full.results[..expected]);
    }

    /// Under the global policy a keyword is escalated iff nothing matched it exactly,
    /// and only escalated keywords carry fuzzy counts.
    #[test]
    fn prop_escalation_partitions_keywords(corpus in corpus_of_size(1..12), keywords in keywords()) {
        let report = search(&corpus, SearchRequest::new(keywords.clone()).with_top_n(100));

        for keyword in &keywords {
            let normalized = keyword.to_lowercase();
            let exact_anywhere = report.results.iter().any(|r| r.tally.has_exact(&normalized));
            prop_assert_eq!(
                report.escalated.contains(&normalized),
                !exact_anywhere,
                "escalation mismatch for {:?}",
                keyword
            );
        }

        for result in &report.results {
            for hit in result.tally.hits() {
                if hit.provenance == Provenance::Fuzzy {
                    prop_assert!(report.escalated.contains(&hit.keyword));
                }
            }
        }
    }

    /// Same inputs, same ranking.
    #[test]
    fn prop_search_is_deterministic(corpus in corpus(), keywords in keywords()) {
        let first = search(&corpus, SearchRequest::new(keywords.clone()));
        let second = search(&corpus, SearchRequest::new(keywords));
        prop_assert_eq!(ranked_ids(&first), ranked_ids(&second));
        prop_assert_eq!(first.results, second.results);
        prop_assert_eq!(first.escalated, second.escalated);
    }
}
