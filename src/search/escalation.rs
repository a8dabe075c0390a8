//! Which keywords go on to the fuzzy phase.
//!
//! This is the barrier between the two phases: under the global policy the set
//! depends on every document's exact tally, so it can't be computed until the
//! whole exact phase has finished.

use crate::config::EscalationPolicy;
use crate::types::{Keyword, MatchTally};

/// Keyword indices to fuzzy-search, by document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EscalationSet {
    /// Every escalated keyword index, in keyword order.
    keywords: Vec<usize>,
    /// Per-document lists; `None` means every document uses `keywords`.
    per_document: Option<Vec<Vec<usize>>>,
}

impl EscalationSet {
    pub(crate) fn compute(
        policy: EscalationPolicy,
        keywords: &[Keyword],
        tallies: &[MatchTally],
    ) -> Self {
        match policy {
            EscalationPolicy::Global => {
                let escalated = (0..keywords.len())
                    .filter(|&k| {
                        let normalized = &keywords[k].normalized;
                        !tallies.iter().any(|t| t.has_exact(normalized))
                    })
                    .collect();
                EscalationSet {
                    keywords: escalated,
                    per_document: None,
                }
            }
            EscalationPolicy::PerDocument => {
                let per_document: Vec<Vec<usize>> = tallies
                    .iter()
                    .map(|tally| {
                        (0..keywords.len())
                            .filter(|&k| !tally.has_exact(&keywords[k].normalized))
                            .collect()
                    })
                    .collect();
                let escalated = (0..keywords.len())
                    .filter(|k| per_document.iter().any(|doc| doc.contains(k)))
                    .collect();
                EscalationSet {
                    keywords: escalated,
                    per_document: Some(per_document),
                }
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub(crate) fn keywords(&self) -> &[usize] {
        &self.keywords
    }

    /// Keyword indices document `index` fuzzy-searches.
    pub(crate) fn for_document(&self, index: usize) -> &[usize] {
        match &self.per_document {
            Some(lists) => lists.get(index).map_or(&[][..], Vec::as_slice),
            None => &self.keywords,
        }
    }

    pub(crate) fn is_global(&self) -> bool {
        self.per_document.is_none()
    }
}
