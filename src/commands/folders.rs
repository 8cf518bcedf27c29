use crate::catalog::FolderCatalog;
use crate::models::{ApiResult, Folder};

/// Lists all folders in display order (recent-first when enabled).
pub fn list_folders(catalog: &FolderCatalog) -> Vec<Folder> {
    catalog.list_folders()
}

/// Creates a new folder from a name and a palette hex string.
pub fn create_folder(catalog: &FolderCatalog, name: &str, color_hex: &str) -> ApiResult {
    let color = match color_hex.parse() {
        Ok(color) => color,
        Err(e) => return ApiResult::error(e),
    };
    match catalog.add_folder(name, color) {
        Ok(folder) => ApiResult::success(format!("Folder '{}' created", folder.name))
            .with_folder_id(folder.id),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Renames a folder.
pub fn rename_folder(catalog: &FolderCatalog, folder_id: &str, new_name: &str) -> ApiResult {
    let mut folder = match catalog.get_folder_by_id(folder_id) {
        Some(folder) => folder,
        None => return ApiResult::error("Folder not found"),
    };
    folder.name = new_name.to_string();
    match catalog.update_folder(&folder) {
        Ok(()) => ApiResult::success(format!("Folder renamed to '{}'", new_name))
            .with_folder_id(folder_id),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Changes a folder's color tag.
pub fn recolor_folder(catalog: &FolderCatalog, folder_id: &str, color_hex: &str) -> ApiResult {
    let color = match color_hex.parse() {
        Ok(color) => color,
        Err(e) => return ApiResult::error(e),
    };
    let mut folder = match catalog.get_folder_by_id(folder_id) {
        Some(folder) => folder,
        None => return ApiResult::error("Folder not found"),
    };
    folder.color = color;
    match catalog.update_folder(&folder) {
        Ok(()) => ApiResult::success("Folder color updated").with_folder_id(folder_id),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Deletes a folder and all its images.
pub fn delete_folder(catalog: &FolderCatalog, folder_id: &str) -> ApiResult {
    let folder = match catalog.get_folder_by_id(folder_id) {
        Some(folder) => folder,
        None => return ApiResult::error("Folder not found"),
    };
    match catalog.delete_folder(&folder) {
        Ok(()) => ApiResult::success(format!("Folder '{}' deleted", folder.name)),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Records that a folder was opened (feeds recent-first ordering).
pub fn open_folder(catalog: &FolderCatalog, folder_id: &str) -> ApiResult {
    match catalog.mark_folder_opened(folder_id) {
        Ok(()) => ApiResult::success("Folder opened").with_folder_id(folder_id),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Toggles the recent-first display preference.
pub fn set_recent_first(catalog: &FolderCatalog, enabled: bool) -> ApiResult {
    match catalog.set_recent_first(enabled) {
        Ok(()) => ApiResult::success(if enabled {
            "Recent folders shown first"
        } else {
            "Folders shown in catalog order"
        }),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::filesystem::FileSystem;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    fn setup() -> (TempDir, FolderCatalog) {
        let temp_dir = tempdir().unwrap();
        let fs_layout = FileSystem::new_with_base(temp_dir.path());
        fs_layout.ensure_directories().unwrap();
        let config = Arc::new(ConfigManager::new(fs_layout.config_file.clone()));
        let catalog = FolderCatalog::new(fs_layout, config);
        (temp_dir, catalog)
    }

    #[test]
    fn test_create_folder_success_message() {
        let (_guard, catalog) = setup();

        let result = create_folder(&catalog, "Trips", "#1E90FF");
        assert!(result.success);
        assert_eq!(result.message, Some("Folder 'Trips' created".to_string()));
        assert!(result.folder_id.is_some());
    }

    #[test]
    fn test_create_folder_blank_name_error_message() {
        let (_guard, catalog) = setup();

        let result = create_folder(&catalog, "", "#1E90FF");
        assert!(!result.success);
        assert!(result.error.unwrap().contains("empty"));
    }

    #[test]
    fn test_create_folder_unknown_color() {
        let (_guard, catalog) = setup();

        let result = create_folder(&catalog, "Trips", "#BADBAD");
        assert!(!result.success);
        assert!(list_folders(&catalog).is_empty());
    }

    #[test]
    fn test_rename_missing_folder() {
        let (_guard, catalog) = setup();
        let result = rename_folder(&catalog, "no-such-id", "New");
        assert!(!result.success);
    }

    #[test]
    fn test_recolor_folder() {
        let (_guard, catalog) = setup();
        let created = create_folder(&catalog, "Trips", "#1E90FF");
        let id = created.folder_id.unwrap();

        // Keep the folder non-empty so the update does not auto-delete it.
        let mut folder = catalog.get_folder_by_id(&id).unwrap();
        folder.push_image(crate::models::Image::new("/p/Trips/a.jpg", "a"));
        catalog.update_folder(&folder).unwrap();

        let result = recolor_folder(&catalog, &id, "#DC143C");
        assert!(result.success);
        assert_eq!(
            catalog.get_folder_by_id(&id).unwrap().color,
            crate::models::FolderColor::Crimson
        );
    }

    #[test]
    fn test_delete_folder_message() {
        let (_guard, catalog) = setup();
        let created = create_folder(&catalog, "Trips", "#1E90FF");
        let id = created.folder_id.unwrap();

        let result = delete_folder(&catalog, &id);
        assert!(result.success);
        assert_eq!(result.message, Some("Folder 'Trips' deleted".to_string()));
        assert!(catalog.get_folder_by_id(&id).is_none());
    }
}
