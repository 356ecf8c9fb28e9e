//! Reading migration and fixture documents.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DynamoTestError, DynamoTestResult};

/// A source of raw definition documents.
pub trait DefinitionsLoader: Send + Sync + fmt::Debug {
    /// Read the named documents, or every available document when `names`
    /// is empty.
    fn read_definitions(&self, names: &[&str]) -> DynamoTestResult<Vec<Vec<u8>>>;
}

/// Reads documents from files in one directory.
///
/// A name maps to `<dir>/<name>.<extension>`; names may contain a relative
/// sub-path such as `nested/users`. Reading everything only looks at files
/// directly inside `dir`, in file-name order.
#[derive(Debug, Clone)]
pub struct FilesystemDirectoryLoader {
    dir: PathBuf,
    extension: String,
}

impl FilesystemDirectoryLoader {
    /// A loader for files with `extension` (without the dot) under `dir`.
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// A loader for `*.json` files under `dir`.
    pub fn json(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, "json")
    }

    /// The directory this loader reads from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn list(&self) -> DynamoTestResult<Vec<PathBuf>> {
        let list_err = |source| DynamoTestError::ListDefinitions {
            dir: self.dir.clone(),
            source,
        };
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(list_err)? {
            let path = entry.map_err(list_err)?.path();
            let matches = path
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str());
            if matches && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl DefinitionsLoader for FilesystemDirectoryLoader {
    fn read_definitions(&self, names: &[&str]) -> DynamoTestResult<Vec<Vec<u8>>> {
        let paths = if names.is_empty() {
            self.list()?
        } else {
            names
                .iter()
                .map(|name| self.dir.join(format!("{name}.{}", self.extension)))
                .collect()
        };

        paths
            .into_iter()
            .map(|path| {
                debug!(path = %path.display(), "reading definition");
                std::fs::read(&path)
                    .map_err(|source| DynamoTestError::ReadDefinition { path, source })
            })
            .collect()
    }
}
