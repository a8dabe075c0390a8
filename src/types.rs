//! Core data types: keywords, documents, tallies, reports.
//!
//! Everything here is created fresh for one search call and dropped when the
//! report has been consumed. Only the corpus outlives a call, and it lives
//! behind [`crate::corpus::DocumentSource`].

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::timing::SearchTimings;
use crate::utils::normalize_keyword;

/// Suffix marking a tally label as coming from the fuzzy phase.
pub const FUZZY_SUFFIX: &str = " (fuzzy)";

/// A user search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    /// Trimmed input, used in labels.
    pub display: String,
    /// Trimmed, lowercased, whitespace-collapsed; what actually gets matched.
    pub normalized: String,
}

impl Keyword {
    /// Returns `None` for keywords that normalize to nothing.
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_keyword(raw).map(|normalized| Keyword {
            display: raw.trim().to_string(),
            normalized,
        })
    }

    /// Label used for exact hits.
    pub fn label(&self) -> &str {
        &self.display
    }

    /// Label used for fuzzy hits, e.g. `python (fuzzy)`.
    pub fn fuzzy_label(&self) -> String {
        format!("{}{}", self.display, FUZZY_SUFFIX)
    }
}

/// Parse raw keywords, dropping blanks and repeats.
///
/// Two inputs that normalize the same ("Java", " java ") are one keyword; the
/// first spelling is kept for display. Input order is preserved.
pub fn prepare_keywords<I, S>(raw: I) -> Vec<Keyword>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|k| Keyword::parse(k.as_ref()))
        .filter(|k| seen.insert(k.normalized.clone()))
        .collect()
}

/// Display metadata for one document. The text itself stays with the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl DocumentRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: None,
            path: None,
        }
    }
}

/// Where a tally entry's evidence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Exact,
    Fuzzy,
}

/// Occurrence count for one keyword label in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordHit {
    pub label: String,
    /// Normalized keyword this hit was counted for.
    pub keyword: String,
    pub count: usize,
    pub provenance: Provenance,
}

/// Per-document keyword counts, in the order keywords were matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchTally {
    hits: Vec<KeywordHit>,
    total: usize,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` occurrences of `keyword`. Zero counts are ignored.
    pub fn record(&mut self, keyword: &Keyword, provenance: Provenance, count: usize) {
        if count == 0 {
            return;
        }
        let label = match provenance {
            Provenance::Exact => keyword.label().to_string(),
            Provenance::Fuzzy => keyword.fuzzy_label(),
        };
        self.total += count;
        self.hits.push(KeywordHit {
            label,
            keyword: keyword.normalized.clone(),
            count,
            provenance,
        });
    }

    /// Fold `other` into this tally. Fuzzy and exact labels never collide.
    pub fn merge(&mut self, other: MatchTally) {
        self.total += other.total;
        self.hits.extend(other.hits);
    }

    pub fn hits(&self) -> &[KeywordHit] {
        &self.hits
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Matched labels, in match order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.hits.iter().map(|h| h.label.as_str())
    }

    pub fn count(&self, label: &str) -> Option<usize> {
        self.hits.iter().find(|h| h.label == label).map(|h| h.count)
    }

    /// Does this tally hold an exact hit for the normalized keyword?
    pub fn has_exact(&self, normalized: &str) -> bool {
        self.hits
            .iter()
            .any(|h| h.provenance == Provenance::Exact && h.keyword == normalized)
    }
}

/// One document in the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedResult {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub document: DocumentRecord,
    pub tally: MatchTally,
}

impl RankedResult {
    pub fn total(&self) -> usize {
        self.tally.total()
    }
}

/// Why a report has no results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// Every keyword was blank.
    NoKeywords,
    /// The source listed no documents, or none had readable text.
    EmptyCorpus,
    /// Documents were scanned but nothing matched, exactly or fuzzily.
    NoMatches,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmptyReason::NoKeywords => "no keywords to search for",
            EmptyReason::EmptyCorpus => "no documents to search",
            EmptyReason::NoMatches => "no keywords matched",
        })
    }
}

/// Result of one search call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    /// Top-N results, best first.
    pub results: Vec<RankedResult>,
    pub timings: SearchTimings,
    /// Documents whose text was available and scanned.
    pub documents_scanned: usize,
    /// Ids of documents skipped because their text couldn't be fetched.
    pub unavailable: Vec<String>,
    /// Normalized keywords that went on to the fuzzy phase.
    pub escalated: Vec<String>,
    /// Set exactly when `results` is empty.
    pub empty_reason: Option<EmptyReason>,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn timing_summary(&self) -> String {
        self.timings.summary()
    }
}
