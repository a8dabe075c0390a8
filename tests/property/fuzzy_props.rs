//! Edit distance and windowed fuzzy search against brute-force oracles.

use proptest::prelude::*;

use crate::oracles::{
    oracle_best_window, oracle_levenshtein, small_alphabet_pattern, small_alphabet_text,
    unicode_pattern, unicode_text,
};
use cvscan::{bounded_edit_distance, edit_distance, fuzzy, levenshtein_within, Kmp};

fn threshold() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![0.5, 0.6, 0.7, 0.75, 0.8, 0.9, 1.0])
}

fn char_index(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_edit_distance_matches_strsim(a in unicode_text(), b in unicode_text()) {
        prop_assert_eq!(edit_distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    /// The bounded check agrees with the full distance for every bound.
    #[test]
    fn prop_levenshtein_within_is_exact(a in "[abc]{0,8}", b in "[abc]{0,8}", max in 0usize..5) {
        let distance = oracle_levenshtein(&a, &b);
        prop_assert_eq!(
            levenshtein_within(&a, &b, max),
            distance <= max,
            "levenshtein_within({:?}, {:?}, {}) with distance {}",
            a, b, max, distance
        );
        prop_assert_eq!(
            bounded_edit_distance(&a, &b, max),
            (distance <= max).then_some(distance)
        );
    }

    /// Threshold 1.0 yields exactly the exact-match occurrence set.
    #[test]
    fn prop_threshold_one_equals_exact(text in small_alphabet_text(), pattern in small_alphabet_pattern()) {
        let fuzzy: Vec<usize> = fuzzy::search(&text, &pattern, 1.0)
            .unwrap()
            .iter()
            .map(|m| m.start)
            .collect();
        prop_assert_eq!(fuzzy, Kmp::new(&pattern).unwrap().find_all(&text));
    }

    /// Same on multi-byte text, where windows are counted in characters.
    #[test]
    fn prop_threshold_one_equals_exact_unicode(text in unicode_text(), pattern in unicode_pattern()) {
        let fuzzy: Vec<usize> = fuzzy::search(&text, &pattern, 1.0)
            .unwrap()
            .iter()
            .map(|m| m.start)
            .collect();
        prop_assert_eq!(fuzzy, Kmp::new(&pattern).unwrap().find_all(&text));
    }

    /// Every reported match is the best window at its start, and clears the threshold.
    #[test]
    fn prop_reported_matches_are_sound(
        text in small_alphabet_text(),
        pattern in small_alphabet_pattern(),
        threshold in threshold(),
    ) {
        for m in fuzzy::search(&text, &pattern, threshold).unwrap() {
            let window = &text[m.start..m.start + m.len];
            prop_assert_eq!(m.distance, oracle_levenshtein(window, &pattern));
            prop_assert!(m.similarity + 1e-9 >= threshold);

            let best = oracle_best_window(&text, &pattern, char_index(&text, m.start));
            prop_assert!(best.is_some());
            prop_assert!((best.unwrap_or(0.0) - m.similarity).abs() < 1e-9);
        }
    }

    /// Every start whose best window clears the threshold is reported, once.
    #[test]
    fn prop_reported_matches_are_complete(
        text in small_alphabet_text(),
        pattern in small_alphabet_pattern(),
        threshold in threshold(),
    ) {
        let reported: Vec<usize> = fuzzy::search(&text, &pattern, threshold)
            .unwrap()
            .iter()
            .map(|m| char_index(&text, m.start))
            .collect();

        let expected: Vec<usize> = (0..text.chars().count())
            .filter(|&start| {
                oracle_best_window(&text, &pattern, start)
                    .is_some_and(|score| score + 1e-9 >= threshold)
            })
            .collect();

        prop_assert_eq!(reported, expected);
    }
}

#[test]
fn test_invalid_fuzzy_arguments() {
    assert!(fuzzy::search("text", "", 0.7).is_err());
    assert!(fuzzy::search("text", "t", 0.0).is_err());
    assert!(fuzzy::search("text", "t", 1.5).is_err());
}
