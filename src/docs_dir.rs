use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable overriding the documentation directory.
pub const DOCS_DIR_ENV: &str = "DOCSCOUT_DOCS_DIR";

/// Directory name looked up in the working directory and its ancestors.
pub const SCRAPED_DOCS: &str = "scraped_docs";

#[derive(Debug, Clone)]
pub struct DocsDir {
    root: PathBuf,
}

impl DocsDir {
    /// Resolve the documentation directory from, in order of priority:
    /// 1. An explicit path (from --docs-dir)
    /// 2. The DOCSCOUT_DOCS_DIR environment variable
    /// 3. A `scraped_docs` directory in the working directory or an ancestor
    /// 4. The XDG data directory (~/.local/share/docscout/docs)
    ///
    /// The directory is not created. A missing directory simply holds no
    /// documents.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let root = if let Some(path) = explicit {
            path.to_path_buf()
        } else if let Ok(val) = std::env::var(DOCS_DIR_ENV) {
            PathBuf::from(val)
        } else if let Some(found) = std::env::current_dir()
            .ok()
            .and_then(|cwd| find_scraped_docs(&cwd))
        {
            found
        } else {
            xdg::BaseDirectories::with_prefix("docscout")
                .get_data_home()
                .map(|home| home.join("docs"))
                .ok_or_else(|| {
                    Error::Config(
                        "could not determine XDG data home directory".into(),
                    )
                })?
        };

        if !root.is_dir() {
            tracing::warn!(
                root = %root.display(),
                "documentation directory does not exist"
            );
        }
        tracing::debug!(root = %root.display(), "using documentation directory");

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Walk up from `start` looking for a `scraped_docs` directory.
pub fn find_scraped_docs(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(SCRAPED_DOCS))
        .find(|candidate| candidate.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_with_explicit_path() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DocsDir::resolve(Some(tmp.path())).unwrap();
        assert_eq!(dir.root(), tmp.path());
    }

    #[test]
    fn explicit_path_need_not_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing");
        let dir = DocsDir::resolve(Some(&missing)).unwrap();
        assert_eq!(dir.root(), missing);
        assert!(!missing.exists());
    }

    #[test]
    fn finds_scraped_docs_in_ancestor() {
        let tmp = tempfile::tempdir().unwrap();
        let docs = tmp.path().join(SCRAPED_DOCS);
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&docs).unwrap();
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_scraped_docs(&nested), Some(docs));
    }

    #[test]
    fn nearest_scraped_docs_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let outer = tmp.path().join(SCRAPED_DOCS);
        let project = tmp.path().join("project");
        let inner = project.join(SCRAPED_DOCS);
        std::fs::create_dir_all(&outer).unwrap();
        std::fs::create_dir_all(&inner).unwrap();

        assert_eq!(find_scraped_docs(&project), Some(inner));
    }

    #[test]
    fn ignores_files_named_scraped_docs() {
        let tmp = tempfile::tempdir().unwrap();
        let isolated = tmp.path().join("isolated");
        std::fs::create_dir_all(&isolated).unwrap();
        std::fs::write(isolated.join(SCRAPED_DOCS), "not a dir").unwrap();

        let found = find_scraped_docs(&isolated);
        assert_ne!(found, Some(isolated.join(SCRAPED_DOCS)));
    }
}
