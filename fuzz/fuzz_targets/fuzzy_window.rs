// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for windowed fuzzy matching.
//!
//! Every reported window must clear the threshold, carry its true edit
//! distance, and sit on char boundaries. Threshold 1.0 must reproduce exact
//! matching.

#![no_main]

use arbitrary::Arbitrary;
use cvscan::{edit_distance, fuzzy, Kmp};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct WindowInput {
    text: String,
    pattern: String,
    /// Mapped into (0, 1]
    threshold: u8,
}

fuzz_target!(|input: WindowInput| {
    let text: String = input.text.chars().take(300).collect();
    let pattern: String = input.pattern.chars().take(12).collect();
    if pattern.is_empty() {
        return;
    }
    let threshold = f64::from(input.threshold.max(1)) / 255.0;

    let matches = fuzzy::search(&text, &pattern, threshold).expect("valid arguments");
    let m = pattern.chars().count();
    for hit in &matches {
        assert!(text.is_char_boundary(hit.start));
        assert!(text.is_char_boundary(hit.start + hit.len));
        let window = &text[hit.start..hit.start + hit.len];
        let window_chars = window.chars().count();
        assert!(window_chars + 1 >= m && window_chars <= m + 1, "window size out of range");
        assert_eq!(hit.distance, edit_distance(window, &pattern));
        assert!(hit.similarity + fuzzy::SIMILARITY_EPSILON >= threshold);
    }
    assert!(matches.windows(2).all(|w| w[0].start < w[1].start));

    let exact: Vec<usize> = fuzzy::search(&text, &pattern, 1.0)
        .expect("valid arguments")
        .iter()
        .map(|hit| hit.start)
        .collect();
    let kmp = Kmp::new(&pattern).expect("non-empty pattern").find_all(&text);
    assert_eq!(exact, kmp);
});
