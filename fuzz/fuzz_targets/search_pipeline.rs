// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full search pipeline.
//!
//! Arbitrary documents and keywords must never panic, and the report must
//! stay well formed: bounded, sorted, dense ranks, no zero totals.

#![no_main]

use arbitrary::Arbitrary;
use cvscan::{run_search, Algorithm, EscalationPolicy, MemoryCorpus, SearchRequest};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    documents: Vec<Option<String>>,
    keywords: Vec<String>,
    algorithm: u8,
    top_n: u8,
    per_document: bool,
}

fuzz_target!(|input: SearchInput| {
    let mut corpus = MemoryCorpus::new();
    for (i, text) in input.documents.into_iter().take(16).enumerate() {
        let id = format!("doc{}", i);
        corpus = match text {
            Some(text) => corpus.with_document(id, text.chars().take(500).collect::<String>()),
            None => corpus.with_unavailable(id),
        };
    }

    let keywords: Vec<String> = input
        .keywords
        .into_iter()
        .take(6)
        .map(|k| k.chars().take(12).collect())
        .collect();
    let top_n = usize::from(input.top_n.max(1));
    let escalation = if input.per_document {
        EscalationPolicy::PerDocument
    } else {
        EscalationPolicy::Global
    };
    let request = SearchRequest::new(keywords)
        .with_algorithm(Algorithm::ALL[usize::from(input.algorithm) % 3])
        .with_top_n(top_n)
        .with_escalation(escalation);

    let report = run_search(&corpus, &request).expect("valid request");

    assert!(report.results.len() <= top_n);
    assert_eq!(report.results.is_empty(), report.empty_reason.is_some());
    for (i, result) in report.results.iter().enumerate() {
        assert_eq!(result.rank, i + 1);
        assert!(result.total() > 0);
    }
    assert!(report
        .results
        .windows(2)
        .all(|w| w[0].total() >= w[1].total()));
});
