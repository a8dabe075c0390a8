//! `manifest.json` corpora.
//!
//! ```json
//! {
//!   "version": 1,
//!   "documents": [
//!     { "id": "10554236", "path": "resumes/10554236.txt",
//!       "name": "Jordan Lee", "category": "ENGINEERING" }
//!   ]
//! }
//! ```
//!
//! Paths are relative to the manifest's directory. Listing order is manifest
//! order.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::DocumentRecord;

use super::{read_text, DocumentSource};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Manifest format versions this crate understands.
const SUPPORTED_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
pub struct ResumeManifest {
    pub version: u32,
    pub documents: Vec<ManifestEntry>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ManifestEntry {
    pub id: String,
    pub path: PathBuf,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Documents listed in a `manifest.json`, with display metadata.
#[derive(Debug, Clone)]
pub struct ManifestCorpus {
    root: PathBuf,
    documents: Vec<DocumentRecord>,
}

impl ManifestCorpus {
    /// Read `<dir>/manifest.json`.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let manifest: ResumeManifest =
            serde_json::from_str(&content).map_err(|source| Error::Json { path, source })?;
        Self::from_manifest(dir, manifest)
    }

    /// Validate a parsed manifest. Ids must be unique and non-empty.
    pub fn from_manifest(root: &Path, manifest: ResumeManifest) -> Result<Self> {
        if manifest.version != SUPPORTED_VERSION {
            return Err(Error::InvalidRequest(format!(
                "unsupported manifest version {} (expected {})",
                manifest.version, SUPPORTED_VERSION
            )));
        }

        let mut seen = HashSet::new();
        let mut documents = Vec::with_capacity(manifest.documents.len());
        for entry in manifest.documents {
            if entry.id.trim().is_empty() {
                return Err(Error::InvalidRequest("manifest entry with empty id".into()));
            }
            if !seen.insert(entry.id.clone()) {
                return Err(Error::InvalidRequest(format!(
                    "duplicate document id '{}' in manifest",
                    entry.id
                )));
            }
            documents.push(DocumentRecord {
                id: entry.id,
                name: entry.name,
                category: entry.category,
                path: Some(root.join(entry.path)),
            });
        }

        tracing::debug!(documents = documents.len(), root = %root.display(), "loaded manifest");
        Ok(Self {
            root: root.to_path_buf(),
            documents,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for ManifestCorpus {
    fn list_documents(&self) -> Result<Vec<DocumentRecord>> {
        Ok(self.documents.clone())
    }

    fn fetch_text(&self, document: &DocumentRecord) -> Option<String> {
        let path = document.path.as_deref()?;
        read_text(&document.id, path)
    }
}
