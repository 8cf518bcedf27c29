use std::fs;
use std::path::PathBuf;

use crate::error::{CatalogError, Result};
use crate::models::Folder;

/// CatalogStore reads and writes the folder list as a single JSON document.
///
/// The whole catalog is rewritten on every mutation (read-entire-list,
/// modify, write-entire-list); there is no partial update. Reads never fail:
/// an absent file is an empty catalog, and an unreadable or corrupt file is
/// logged and treated as empty. Write failures are surfaced to the caller,
/// since losing a catalog write after a successful file operation would leave
/// the catalog and the directory tree disagreeing.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog_path: PathBuf,
}

impl CatalogStore {
    pub fn new(catalog_path: PathBuf) -> Self {
        Self { catalog_path }
    }

    /// Reads the full folder list. Never fails.
    pub fn read_folders(&self) -> Vec<Folder> {
        if !self.catalog_path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.catalog_path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!(
                    "Failed to read catalog {}: {}",
                    self.catalog_path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(folders) => folders,
            Err(e) => {
                log::warn!(
                    "Failed to parse catalog {}: {}",
                    self.catalog_path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Writes the full folder list, replacing the previous document.
    pub fn write_folders(&self, folders: &[Folder]) -> Result<()> {
        let content = serde_json::to_string_pretty(folders)
            .map_err(|e| CatalogError::Persistence(format!("Failed to serialize catalog: {}", e)))?;

        fs::write(&self.catalog_path, content).map_err(|e| {
            CatalogError::Persistence(format!(
                "Failed to write catalog {}: {}",
                self.catalog_path.display(),
                e
            ))
        })
    }

    /// Returns the catalog file path.
    pub fn catalog_path(&self) -> &PathBuf {
        &self.catalog_path
    }
}
