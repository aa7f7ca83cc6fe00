use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::{
    category::{self, Category},
    error::{Error, Result},
    metadata,
    reference,
    walker,
};

/// One document of the corpus, read fresh from disk.
#[derive(Debug, Clone)]
pub struct Document {
    pub identifier: String,
    pub text: String,
    pub modified: DateTime<Utc>,
}

impl Document {
    pub fn title(&self) -> String {
        metadata::extract_title(&self.text)
    }

    pub fn description(&self) -> String {
        metadata::extract_description(&self.text, &self.identifier)
    }

    pub fn category(&self) -> Category {
        category::classify(&self.identifier)
    }

    pub fn uri(&self) -> String {
        reference::to_uri(&self.identifier)
    }
}

/// A directory of markdown documents.
///
/// Holds nothing but the root path: every call rescans the directory and
/// rereads the files it needs, so additions and removals show up
/// immediately.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
}

impl Corpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Identifiers of every document currently in the corpus.
    pub fn identifiers(&self) -> Result<Vec<String>> {
        Ok(walker::discover_files(&self.root)?
            .into_iter()
            .map(|file| file.identifier)
            .collect())
    }

    /// Read one document by identifier.
    ///
    /// The identifier is validated before the filesystem is touched.
    pub fn read(&self, identifier: &str) -> Result<Document> {
        reference::validate_identifier(identifier)?;

        let path = self.root.join(identifier);
        let not_found = || Error::NotFound {
            kind: "document",
            name: identifier.to_string(),
        };

        // Anything discovery would not list reads as absent.
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(not_found()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(not_found());
            }
            Err(e) => return Err(e.into()),
        }

        let text = std::fs::read_to_string(&path)?;
        let modified = walker::modified_at(&path)?;

        Ok(Document {
            identifier: identifier.to_string(),
            text,
            modified,
        })
    }

    /// Read one document by `docs://` reference or bare identifier.
    pub fn read_reference(&self, reference: &str) -> Result<Document> {
        let identifier = reference::resolve(reference)?;
        self.read(&identifier)
    }

    /// Load every document whose identifier passes `keep`.
    ///
    /// Failures degrade instead of aborting: an unreadable root yields an
    /// empty list and an unreadable file is skipped, each with a warning.
    pub fn load(&self, keep: impl Fn(&str) -> bool) -> Vec<Document> {
        let identifiers = match self.identifiers() {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(
                    root = %self.root.display(),
                    error = %e,
                    "cannot scan documentation directory"
                );
                return Vec::new();
            }
        };

        identifiers
            .iter()
            .filter(|id| keep(id))
            .filter_map(|id| match self.read(id) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    tracing::warn!(identifier = %id, error = %e, "skipping document");
                    None
                }
            })
            .collect()
    }

    /// Load every document in the corpus.
    pub fn load_all(&self) -> Vec<Document> {
        self.load(|_| true)
    }
}
