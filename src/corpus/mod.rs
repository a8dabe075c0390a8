// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where documents come from.
//!
//! A search only needs two things from its corpus: the list of documents, in a
//! stable order, and the text of each one on demand. [`DocumentSource`] is that
//! boundary. Text extraction lives on the far side of it; a document whose text
//! can't be produced comes back as `None` and the search skips it.
//!
//! Three sources ship with the crate:
//!
//! - [`MemoryCorpus`]: documents held in memory (tests, embedding callers)
//! - [`DirectoryCorpus`]: every `*.txt` file in a directory
//! - [`ManifestCorpus`]: a `manifest.json` naming each document's file and metadata

mod directory;
mod manifest;
mod memory;

use std::path::Path;

pub use directory::DirectoryCorpus;
pub use manifest::{ManifestCorpus, ManifestEntry, ResumeManifest, MANIFEST_FILE};
pub use memory::MemoryCorpus;

use crate::error::Result;
use crate::types::DocumentRecord;

/// A corpus the search engine can scan.
///
/// `Sync` so documents can be fetched from worker threads.
pub trait DocumentSource: Sync {
    /// All documents, in corpus order. Ties in the ranking keep this order.
    fn list_documents(&self) -> Result<Vec<DocumentRecord>>;

    /// Plain text of one document, or `None` when it can't be produced.
    fn fetch_text(&self, document: &DocumentRecord) -> Option<String>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn list_documents(&self) -> Result<Vec<DocumentRecord>> {
        (**self).list_documents()
    }

    fn fetch_text(&self, document: &DocumentRecord) -> Option<String> {
        (**self).fetch_text(document)
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn list_documents(&self) -> Result<Vec<DocumentRecord>> {
        (**self).list_documents()
    }

    fn fetch_text(&self, document: &DocumentRecord) -> Option<String> {
        (**self).fetch_text(document)
    }
}

/// Open a corpus directory: a [`ManifestCorpus`] if it holds `manifest.json`,
/// otherwise a [`DirectoryCorpus`].
pub fn open(dir: &Path) -> Result<Box<dyn DocumentSource>> {
    let manifest_path = dir.join(manifest::MANIFEST_FILE);
    if manifest_path.is_file() {
        Ok(Box::new(ManifestCorpus::open(dir)?))
    } else {
        Ok(Box::new(DirectoryCorpus::new(dir)))
    }
}

/// Read a file as text for matching. Failures are logged and become `None`.
pub(crate) fn read_text(id: &str, path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::warn!(document = id, path = %path.display(), %err, "failed to read document text");
            None
        }
    }
}
