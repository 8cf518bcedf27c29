use std::fs;
use std::sync::Arc;

use crate::config::ConfigManager;
use crate::error::{CatalogError, Result};
use crate::filesystem::{validate_component, FileSystem};
use crate::models::{Folder, FolderColor};
use crate::store::CatalogStore;

/// FolderCatalog owns the list of folders: identities, create/rename/delete,
/// and the recent-first display ordering.
///
/// The catalog document is re-read and rewritten wholesale on every mutation;
/// no list is cached in memory. Folders whose image list becomes empty after
/// a mutation are deleted automatically.
#[derive(Clone)]
pub struct FolderCatalog {
    fs: FileSystem,
    store: CatalogStore,
    config: Arc<ConfigManager>,
}

impl FolderCatalog {
    pub fn new(fs: FileSystem, config: Arc<ConfigManager>) -> Self {
        let store = CatalogStore::new(fs.catalog_file.clone());
        Self { fs, store, config }
    }

    /// Lists all folders. Never fails.
    ///
    /// With the recent-first preference enabled, folders whose ids appear in
    /// the recent list come first in most-recently-opened order; the rest
    /// follow in catalog order.
    pub fn list_folders(&self) -> Vec<Folder> {
        let folders = self.store.read_folders();
        if !self.config.recent_first() {
            return folders;
        }

        let mut rest = folders;
        let mut ordered = Vec::with_capacity(rest.len());
        for id in self.config.recent_folders() {
            if let Some(pos) = rest.iter().position(|f| f.id == id) {
                ordered.push(rest.remove(pos));
            }
        }
        ordered.extend(rest);
        ordered
    }

    /// Creates a folder: fresh id, appended to the catalog, persisted, and
    /// an empty backing directory created.
    pub fn add_folder(&self, name: &str, color: FolderColor) -> Result<Folder> {
        validate_component(name)?;

        let folder = Folder::new(name, color);
        let mut folders = self.store.read_folders();
        folders.push(folder.clone());
        self.store.write_folders(&folders)?;

        fs::create_dir_all(self.fs.folder_dir(name))?;
        Ok(folder)
    }

    /// Replaces the catalog entry matching `folder.id`.
    ///
    /// A name change renames the backing directory and rewrites the stored
    /// image paths to match. The directory rename is best-effort: the
    /// catalog is authoritative, so a rename failure is logged and the name
    /// change persists anyway (image paths then keep their old directory).
    ///
    /// After persisting, a folder whose image list is empty is deleted
    /// (auto-cleanup).
    pub fn update_folder(&self, folder: &Folder) -> Result<()> {
        let mut folders = self.store.read_folders();
        let pos = folders
            .iter()
            .position(|f| f.id == folder.id)
            .ok_or_else(|| CatalogError::NotFound(format!("No folder with id {}", folder.id)))?;

        let mut updated = folder.clone();
        let old_name = folders[pos].name.clone();
        if old_name != updated.name {
            validate_component(&updated.name)?;
            let old_dir = self.fs.folder_dir(&old_name);
            let new_dir = self.fs.folder_dir(&updated.name);
            match fs::rename(&old_dir, &new_dir) {
                Ok(()) => {
                    let new_name = updated.name.clone();
                    for image in updated.images_mut() {
                        image.path = self
                            .fs
                            .image_file(&new_name, &image.name)
                            .to_string_lossy()
                            .into_owned();
                    }
                }
                Err(e) => {
                    log::warn!(
                        "Failed to rename folder directory {} -> {}: {}",
                        old_dir.display(),
                        new_dir.display(),
                        e
                    );
                }
            }
        }

        let is_empty = updated.is_empty();
        folders[pos] = updated.clone();
        self.store.write_folders(&folders)?;

        if is_empty {
            self.delete_folder(&updated)?;
        }
        Ok(())
    }

    /// Deletes a folder: catalog entry removed, recent-list id dropped, and
    /// the backing directory recursively deleted. Irreversible; idempotent
    /// when the entry is already gone.
    pub fn delete_folder(&self, folder: &Folder) -> Result<()> {
        let mut folders = self.store.read_folders();
        let before = folders.len();
        folders.retain(|f| f.id != folder.id);
        if folders.len() != before {
            self.store.write_folders(&folders)?;
        }

        self.config.remove_recent(&folder.id)?;

        let dir = self.fs.folder_dir(&folder.name);
        if dir.exists() {
            if let Err(e) = fs::remove_dir_all(&dir) {
                log::warn!("Failed to delete folder directory {}: {}", dir.display(), e);
            }
        }
        Ok(())
    }

    /// Looks up a folder by id.
    pub fn get_folder_by_id(&self, id: &str) -> Option<Folder> {
        self.store.read_folders().into_iter().find(|f| f.id == id)
    }

    /// Looks up a folder by display name. First match; names are not unique,
    /// so under duplicates this is non-deterministic; a UI convenience only.
    pub fn get_folder_by_name(&self, name: &str) -> Option<Folder> {
        self.store.read_folders().into_iter().find(|f| f.name == name)
    }

    /// All folders except `excluding`; populates "move to" pickers.
    pub fn available_folders(&self, excluding: &Folder) -> Vec<Folder> {
        self.store
            .read_folders()
            .into_iter()
            .filter(|f| f.id != excluding.id)
            .collect()
    }

    /// Records that a folder was opened, promoting it in the recent list.
    pub fn mark_folder_opened(&self, folder_id: &str) -> Result<()> {
        self.config.promote_recent(folder_id)
    }

    /// Enables or disables recent-first ordering for `list_folders`.
    pub fn set_recent_first(&self, enabled: bool) -> Result<()> {
        self.config.set_recent_first(enabled)
    }

    pub(crate) fn filesystem(&self) -> &FileSystem {
        &self.fs
    }

    pub(crate) fn read_all(&self) -> Vec<Folder> {
        self.store.read_folders()
    }

    pub(crate) fn write_all(&self, folders: &[Folder]) -> Result<()> {
        self.store.write_folders(folders)
    }
}
