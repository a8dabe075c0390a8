// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the exact matchers.
//!
//! KMP, Boyer–Moore and Aho–Corasick must report identical byte offsets for
//! every pattern, and every offset must be a real occurrence on a char boundary.

#![no_main]

use arbitrary::Arbitrary;
use cvscan::{Algorithm, ExactMatcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    text: String,
    patterns: Vec<String>,
}

fuzz_target!(|input: MatchInput| {
    // Cap sizes to keep iterations fast
    let text: String = input.text.chars().take(2_000).collect();
    let patterns: Vec<String> = input
        .patterns
        .into_iter()
        .take(8)
        .map(|p| p.chars().take(16).collect::<String>())
        .filter(|p| !p.is_empty())
        .collect();
    if patterns.is_empty() {
        return;
    }

    let results: Vec<Vec<Vec<usize>>> = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            ExactMatcher::compile(algorithm, &patterns)
                .expect("non-empty patterns compile")
                .find_all(&text)
        })
        .collect();

    assert_eq!(results[0], results[1], "KMP and BM disagree");
    assert_eq!(results[0], results[2], "KMP and AC disagree");

    for (pattern, offsets) in patterns.iter().zip(&results[0]) {
        for &offset in offsets {
            assert!(text.is_char_boundary(offset));
            assert!(text[offset..].starts_with(pattern.as_str()));
        }
        assert!(offsets.windows(2).all(|w| w[0] < w[1]), "offsets not ascending");
    }
});
