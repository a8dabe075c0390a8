use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::DocumentRecord;

use super::{read_text, DocumentSource};

const TEXT_EXTENSION: &str = "txt";

/// Every `*.txt` file directly inside a directory, sorted by file name.
///
/// The document id is the file stem: `resumes/10554236.txt` → `10554236`.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
}

impl DirectoryCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for DirectoryCorpus {
    fn list_documents(&self) -> Result<Vec<DocumentRecord>> {
        let entries = fs::read_dir(&self.root).map_err(|source| Error::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == TEXT_EXTENSION)
            })
            .collect();
        // read_dir order is platform-dependent; ranking ties need a stable order
        paths.sort();

        Ok(paths
            .into_iter()
            .filter_map(|path| {
                let id = path.file_stem()?.to_string_lossy().into_owned();
                Some(DocumentRecord {
                    id,
                    name: None,
                    category: None,
                    path: Some(path),
                })
            })
            .collect())
    }

    fn fetch_text(&self, document: &DocumentRecord) -> Option<String> {
        let path = document.path.as_deref()?;
        read_text(&document.id, path)
    }
}
