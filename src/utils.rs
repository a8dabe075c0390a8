//! Utility functions for string processing.

#[cfg(feature = "fold-diacritics")]
use unicode_normalization::UnicodeNormalization;

/// Normalize document text for matching: lowercase and collapse whitespace.
///
/// Line breaks left behind by text extraction become single spaces, so a
/// keyword that wraps across lines in the source file still matches:
/// - "Senior  Java\nDeveloper" → "senior java developer"
/// - "  SQL\t" → "sql"
///
/// # Algorithm (with fold-diacritics feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
#[cfg(feature = "fold-diacritics")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize document text for matching: lowercase and collapse whitespace.
///
/// Line breaks left behind by text extraction become single spaces, so a
/// keyword that wraps across lines in the source file still matches:
/// - "Senior  Java\nDeveloper" → "senior java developer"
/// - "  SQL\t" → "sql"
#[cfg(not(feature = "fold-diacritics"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "fold-diacritics")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Normalize a user keyword. Returns `None` when nothing is left to match.
///
/// Keywords go through the same pipeline as document text, so
/// `"  Machine   Learning "` becomes `"machine learning"` and lines up with
/// the collapsed whitespace in the corpus.
pub fn normalize_keyword(raw: &str) -> Option<String> {
    let normalized = normalize(raw.trim());
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Byte offset of every char boundary in `text`, plus `text.len()` at the end.
///
/// Lets the fuzzy matcher slide windows in characters while still reporting
/// byte offsets, which is what the exact matchers report.
pub fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect()
}
