use std::collections::HashMap;

use crate::error::Result;
use crate::types::DocumentRecord;

use super::DocumentSource;

/// Documents held in memory. A `None` text simulates a failed extraction.
///
/// Ids are unique, as in a manifest: pushing an id that's already present
/// replaces that document where it stands.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    documents: Vec<(DocumentRecord, Option<String>)>,
    /// Id to position in `documents`.
    positions: HashMap<String, usize>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(id, text)` pairs.
    pub fn from_texts<I, K, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let mut corpus = Self::new();
        for (id, text) in texts {
            corpus.push(DocumentRecord::new(id), Some(text.into()));
        }
        corpus
    }

    pub fn push(&mut self, record: DocumentRecord, text: Option<String>) {
        match self.positions.get(&record.id) {
            Some(&at) => {
                tracing::debug!(document = %record.id, "replacing document with duplicate id");
                self.documents[at] = (record, text);
            }
            None => {
                self.positions.insert(record.id.clone(), self.documents.len());
                self.documents.push((record, text));
            }
        }
    }

    /// Chainable [`push`](Self::push) for a document with text.
    pub fn with_document(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.push(DocumentRecord::new(id), Some(text.into()));
        self
    }

    /// Chainable [`push`](Self::push) for a document whose text is unavailable.
    pub fn with_unavailable(mut self, id: impl Into<String>) -> Self {
        self.push(DocumentRecord::new(id), None);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemoryCorpus {
    fn list_documents(&self) -> Result<Vec<DocumentRecord>> {
        Ok(self.documents.iter().map(|(record, _)| record.clone()).collect())
    }

    fn fetch_text(&self, document: &DocumentRecord) -> Option<String> {
        let &at = self.positions.get(&document.id)?;
        self.documents[at].1.clone()
    }
}
