use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::catalog::FolderCatalog;
use crate::error::{CatalogError, Result};
use crate::filesystem::validate_component;
use crate::models::{Folder, Image};

/// ImageManager owns per-image file operations and the folder image-list
/// mutations that go with them.
///
/// The binding rule across every operation: the catalog is only mutated
/// after the file operation succeeded. A failed copy/rename/delete leaves
/// the persisted state exactly as it was, so the catalog never references a
/// file that is not there.
#[derive(Clone)]
pub struct ImageManager {
    catalog: FolderCatalog,
}

impl ImageManager {
    pub fn new(catalog: FolderCatalog) -> Self {
        Self { catalog }
    }

    /// Imports an image: copies the byte stream at `source` into
    /// `<name>.jpg` inside the folder's backing directory, appends the new
    /// record to the folder, and persists.
    ///
    /// A failed copy may leave a partial destination file behind; the
    /// catalog is untouched in that case. A name already taken inside the
    /// folder is rejected: the filename is derived from the name, so a
    /// duplicate would overwrite another image's backing file.
    pub fn save_image(&self, source: &Path, name: &str, folder_id: &str) -> Result<Image> {
        validate_component(name)?;

        let mut folders = self.catalog.read_all();
        let pos = position_by_id(&folders, folder_id)?;

        let fs_layout = self.catalog.filesystem();
        fs::create_dir_all(fs_layout.folder_dir(&folders[pos].name))?;

        let dest = fs_layout.image_file(&folders[pos].name, name);
        if folders[pos].images().iter().any(|i| i.name == name) || dest.exists() {
            return Err(CatalogError::Validation(format!(
                "An image named '{}' already exists in folder '{}'",
                name, folders[pos].name
            )));
        }

        let mut reader = File::open(source)?;
        let mut writer = File::create(&dest)?;
        io::copy(&mut reader, &mut writer)?;

        let image = Image::new(dest.to_string_lossy().into_owned(), name);
        folders[pos].push_image(image.clone());
        self.catalog.write_all(&folders)?;
        Ok(image)
    }

    /// Writes a camera-capture buffer into the cache staging area under a
    /// fresh uuid filename and returns the canonical path string. The staged
    /// file is a plain `save_image` source once a name and folder are chosen.
    pub fn stage_capture(&self, bytes: &[u8]) -> Result<String> {
        let fs_layout = self.catalog.filesystem();
        fs::create_dir_all(&fs_layout.cache_dir)?;

        let staged = fs_layout
            .cache_dir
            .join(format!("{}.jpg", uuid::Uuid::new_v4()));
        fs::write(&staged, bytes)?;
        Ok(staged.to_string_lossy().into_owned())
    }

    /// Moves an image between folders.
    ///
    /// The backing file is copied into the target directory first; if that
    /// copy fails the catalog is untouched and `false` is returned. On
    /// success both list mutations are committed in a single catalog write,
    /// the old file is deleted (best-effort), and an emptied source folder
    /// is auto-deleted.
    pub fn move_image(
        &self,
        image: &Image,
        source_folder_id: &str,
        target_folder_id: &str,
    ) -> Result<bool> {
        if source_folder_id == target_folder_id {
            return Err(CatalogError::Validation(
                "Source and target folder are the same".to_string(),
            ));
        }

        let mut folders = self.catalog.read_all();
        let src_pos = position_by_id(&folders, source_folder_id)?;
        let dst_pos = position_by_id(&folders, target_folder_id)?;
        if !folders[src_pos].images().contains(image) {
            return Err(CatalogError::NotFound(format!(
                "Image '{}' is not in folder '{}'",
                image.name, folders[src_pos].name
            )));
        }

        let fs_layout = self.catalog.filesystem();
        let dest = fs_layout.image_file(&folders[dst_pos].name, &image.name);
        if folders[dst_pos].images().iter().any(|i| i.name == image.name) || dest.exists() {
            return Err(CatalogError::Validation(format!(
                "An image named '{}' already exists in folder '{}'",
                image.name, folders[dst_pos].name
            )));
        }
        if let Err(e) = fs::create_dir_all(fs_layout.folder_dir(&folders[dst_pos].name)) {
            log::warn!("Failed to create target directory for move: {}", e);
            return Ok(false);
        }
        if let Err(e) = fs::copy(image.resolve(), &dest) {
            log::warn!(
                "Failed to copy {} -> {}: {}",
                image.path,
                dest.display(),
                e
            );
            return Ok(false);
        }

        let mut moved = Image::new(dest.to_string_lossy().into_owned(), image.name.clone());
        moved.tags = image.tags.clone();
        moved.created = image.created;

        folders[dst_pos].push_image(moved);
        folders[src_pos].remove_image(image);
        self.catalog.write_all(&folders)?;

        if let Err(e) = fs::remove_file(image.resolve()) {
            log::warn!("Failed to delete moved image file {}: {}", image.path, e);
        }

        let source = folders[src_pos].clone();
        if source.is_empty() {
            self.catalog.delete_folder(&source)?;
        }
        Ok(true)
    }

    /// Deletes an image. The backing file is removed first; only on success
    /// is the record dropped from the folder and the catalog persisted. A
    /// failed file deletion returns `false` with the catalog untouched.
    pub fn delete_image(&self, image: &Image, folder_id: &str) -> Result<bool> {
        let mut folders = self.catalog.read_all();
        let pos = position_by_id(&folders, folder_id)?;
        if !folders[pos].images().contains(image) {
            return Err(CatalogError::NotFound(format!(
                "Image '{}' is not in folder '{}'",
                image.name, folders[pos].name
            )));
        }

        if let Err(e) = fs::remove_file(image.resolve()) {
            log::warn!("Failed to delete image file {}: {}", image.path, e);
            return Ok(false);
        }

        folders[pos].remove_image(image);
        self.catalog.write_all(&folders)?;

        let folder = folders[pos].clone();
        if folder.is_empty() {
            self.catalog.delete_folder(&folder)?;
        }
        Ok(true)
    }

    /// Renames an image: backing file moved to `<new_name>.jpg`, then the
    /// record's name and path updated and persisted. A failed file rename
    /// returns `false` with no mutation; a name already taken inside the
    /// folder is rejected rather than overwriting that image's backing file.
    pub fn rename_image(&self, image: &Image, new_name: &str, folder_id: &str) -> Result<bool> {
        validate_component(new_name)?;

        let mut folders = self.catalog.read_all();
        let pos = position_by_id(&folders, folder_id)?;
        let image_pos = folders[pos]
            .images()
            .iter()
            .position(|i| i == image)
            .ok_or_else(|| {
                CatalogError::NotFound(format!(
                    "Image '{}' is not in folder '{}'",
                    image.name, folders[pos].name
                ))
            })?;

        let new_path = self
            .catalog
            .filesystem()
            .image_file(&folders[pos].name, new_name);
        let taken = folders[pos]
            .images()
            .iter()
            .any(|i| i.name == new_name && i != image)
            || (new_path.exists() && new_path != image.resolve());
        if taken {
            return Err(CatalogError::Validation(format!(
                "An image named '{}' already exists in folder '{}'",
                new_name, folders[pos].name
            )));
        }
        if let Err(e) = fs::rename(image.resolve(), &new_path) {
            log::warn!(
                "Failed to rename {} -> {}: {}",
                image.path,
                new_path.display(),
                e
            );
            return Ok(false);
        }

        let entry = &mut folders[pos].images_mut()[image_pos];
        entry.name = new_name.to_string();
        entry.path = new_path.to_string_lossy().into_owned();
        self.catalog.write_all(&folders)?;
        Ok(true)
    }

    /// The image list of the first folder matching `folder_name`.
    pub fn images_from_folder(&self, folder_name: &str) -> Result<Vec<Image>> {
        let folder = self
            .catalog
            .get_folder_by_name(folder_name)
            .ok_or_else(|| {
                CatalogError::NotFound(format!("No folder named '{}'", folder_name))
            })?;
        Ok(folder.images().to_vec())
    }

    /// Every image across every folder, in catalog order.
    pub fn all_images(&self) -> Vec<Image> {
        self.catalog
            .read_all()
            .into_iter()
            .flat_map(|f| f.images().to_vec())
            .collect()
    }
}

fn position_by_id(folders: &[Folder], folder_id: &str) -> Result<usize> {
    folders
        .iter()
        .position(|f| f.id == folder_id)
        .ok_or_else(|| CatalogError::NotFound(format!("No folder with id {}", folder_id)))
}
