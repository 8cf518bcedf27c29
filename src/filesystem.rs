use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

/// Validates a user-supplied name that becomes a path component.
///
/// Folder and image names turn into directory and file names under the
/// pictures area, so anything that could escape it is rejected up front:
/// - ".." (parent directory traversal)
/// - "/" and "\\" (path separators)
///
/// Blank names are rejected here too since every caller needs that check.
pub fn validate_component(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation("Name cannot be empty".to_string()));
    }
    if name.contains("..") {
        return Err(CatalogError::Validation(format!(
            "Name '{}' contains invalid traversal pattern '..'",
            name
        )));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CatalogError::Validation(format!(
            "Name '{}' contains a path separator",
            name
        )));
    }
    Ok(())
}

/// FileSystem manages the application's data directory structure.
///
/// The structure is:
/// - `{data_dir}/pictures/{folder name}/` - one directory per folder
/// - `{data_dir}/pictures/{folder name}/{image name}.jpg` - image files
/// - `{data_dir}/cache/` - capture staging area before a name/folder is chosen
/// - `{data_dir}/catalog.json` - the persisted folder catalog
/// - `{data_dir}/config.json` - user preferences
#[derive(Debug, Clone)]
pub struct FileSystem {
    /// Base data directory for the application
    pub base_dir: PathBuf,
    /// Directory holding one subdirectory per folder (pictures/)
    pub pictures_dir: PathBuf,
    /// Staging area for camera captures (cache/)
    pub cache_dir: PathBuf,
    /// Path to the catalog file (catalog.json)
    pub catalog_file: PathBuf,
    /// Path to the configuration file (config.json)
    pub config_file: PathBuf,
}

impl FileSystem {
    /// Creates a FileSystem rooted at the platform data directory.
    ///
    /// On Linux: ~/.local/share/picfolio/
    /// On macOS: ~/Library/Application Support/picfolio/
    /// On Windows: C:\Users\{user}\AppData\Roaming\picfolio\
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .ok_or_else(|| {
                CatalogError::Persistence("Could not determine data directory".to_string())
            })?
            .join("picfolio");

        Ok(Self::new_with_base(&base_dir))
    }

    /// Creates a FileSystem with a custom base directory. Useful for testing.
    pub fn new_with_base(base_dir: &Path) -> Self {
        let base_dir = base_dir.to_path_buf();
        let pictures_dir = base_dir.join("pictures");
        let cache_dir = base_dir.join("cache");
        let catalog_file = base_dir.join("catalog.json");
        let config_file = base_dir.join("config.json");

        Self {
            base_dir,
            pictures_dir,
            cache_dir,
            catalog_file,
            config_file,
        }
    }

    /// Ensures the base, pictures, and cache directories exist.
    pub fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        fs::create_dir_all(&self.pictures_dir)?;
        fs::create_dir_all(&self.cache_dir)?;
        Ok(())
    }

    /// Returns the backing directory for a folder name.
    pub fn folder_dir(&self, folder_name: &str) -> PathBuf {
        self.pictures_dir.join(folder_name)
    }

    /// Returns the backing file path for an image name inside a folder.
    /// The on-disk filename is always `<name>.jpg`.
    pub fn image_file(&self, folder_name: &str, image_name: &str) -> PathBuf {
        self.folder_dir(folder_name)
            .join(format!("{}.jpg", image_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_component_rejects_blank() {
        assert!(validate_component("").is_err());
        assert!(validate_component("   ").is_err());
    }

    #[test]
    fn test_validate_component_rejects_double_dot() {
        assert!(validate_component("..").is_err());
        assert!(validate_component("foo..bar").is_err());
    }

    #[test]
    fn test_validate_component_rejects_separators() {
        assert!(validate_component("foo/bar").is_err());
        assert!(validate_component("foo\\bar").is_err());
    }

    #[test]
    fn test_validate_component_accepts_plain_names() {
        assert!(validate_component("Trips").is_ok());
        assert!(validate_component("beach 2024").is_ok());
        // Single dots are fine (e.g. "v1.2 shots").
        assert!(validate_component("v1.2 shots").is_ok());
    }

    #[test]
    fn test_validation_errors_are_validation_variant() {
        let err = validate_component("..").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_filesystem_new_with_base() {
        let temp_dir = tempdir().unwrap();
        let fs = FileSystem::new_with_base(temp_dir.path());

        assert_eq!(fs.base_dir, temp_dir.path());
        assert_eq!(fs.pictures_dir, temp_dir.path().join("pictures"));
        assert_eq!(fs.cache_dir, temp_dir.path().join("cache"));
        assert_eq!(fs.catalog_file, temp_dir.path().join("catalog.json"));
        assert_eq!(fs.config_file, temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_filesystem_ensure_directories() {
        let temp_dir = tempdir().unwrap();
        let fs = FileSystem::new_with_base(temp_dir.path());

        assert!(!fs.pictures_dir.exists());
        fs.ensure_directories().unwrap();
        assert!(fs.pictures_dir.is_dir());
        assert!(fs.cache_dir.is_dir());

        // Idempotent.
        fs.ensure_directories().unwrap();
    }

    #[test]
    fn test_image_file_path() {
        let temp_dir = tempdir().unwrap();
        let fs = FileSystem::new_with_base(temp_dir.path());

        assert_eq!(
            fs.image_file("Trips", "beach"),
            temp_dir.path().join("pictures").join("Trips").join("beach.jpg")
        );
    }

    // Strategy for generating names containing ".."
    fn name_with_double_dot() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("..".to_string()),
            "[a-zA-Z0-9_-]{0,10}".prop_map(|s| format!("{}..{}", s, s)),
            "[a-zA-Z0-9_-]{0,10}".prop_map(|s| format!("..{}", s)),
            "[a-zA-Z0-9_-]{0,10}".prop_map(|s| format!("{}..", s)),
        ]
    }

    // Strategy for generating names containing a separator
    fn name_with_separator() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z0-9_-]{1,10}".prop_map(|s| format!("{}/{}", s, s)),
            "[a-zA-Z0-9_-]{1,10}".prop_map(|s| format!("\\{}", s)),
            "[a-zA-Z0-9_-]{1,10}".prop_map(|s| format!("{}/", s)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any name containing ".." must be rejected before it can become a
        /// path component.
        #[test]
        fn prop_traversal_rejection_double_dot(name in name_with_double_dot()) {
            prop_assert!(
                validate_component(&name).is_err(),
                "Name '{}' should be rejected but was accepted",
                name
            );
        }

        /// Any name containing a path separator must be rejected.
        #[test]
        fn prop_traversal_rejection_separator(name in name_with_separator()) {
            prop_assert!(
                validate_component(&name).is_err(),
                "Name '{}' should be rejected but was accepted",
                name
            );
        }
    }
}
