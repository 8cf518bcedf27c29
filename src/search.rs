use crate::catalog::FolderCatalog;
use crate::models::Image;

/// A single search match: the image plus the folder it lives in, so results
/// can link back to their location.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
    pub folder_id: String,
    pub folder_name: String,
    pub image: Image,
}

/// Case-insensitive substring search over image names and tags across every
/// folder. An empty query matches everything. Results follow catalog order;
/// there is no ranking.
pub fn search_images(catalog: &FolderCatalog, query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for folder in catalog.list_folders() {
        for image in folder.images() {
            if matches(image, &needle) {
                hits.push(SearchHit {
                    folder_id: folder.id.clone(),
                    folder_name: folder.name.clone(),
                    image: image.clone(),
                });
            }
        }
    }
    hits
}

fn matches(image: &Image, needle: &str) -> bool {
    image.name.to_lowercase().contains(needle)
        || image.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::filesystem::FileSystem;
    use crate::images::ImageManager;
    use crate::models::FolderColor;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    fn setup() -> (TempDir, FolderCatalog, ImageManager) {
        let temp_dir = tempdir().unwrap();
        let fs_layout = FileSystem::new_with_base(temp_dir.path());
        fs_layout.ensure_directories().unwrap();
        let config = Arc::new(ConfigManager::new(fs_layout.config_file.clone()));
        let catalog = FolderCatalog::new(fs_layout, config);
        let images = ImageManager::new(catalog.clone());
        (temp_dir, catalog, images)
    }

    fn import(images: &ImageManager, dir: &std::path::Path, name: &str, folder_id: &str) -> Image {
        let source = dir.join(format!("{}-src.jpg", name));
        std::fs::write(&source, b"x").unwrap();
        images.save_image(&source, name, folder_id).unwrap()
    }

    #[test]
    fn test_search_matches_name_substring_across_folders() {
        let (guard, catalog, images) = setup();
        let a = catalog.add_folder("A", FolderColor::Blue).unwrap();
        let b = catalog.add_folder("B", FolderColor::Gold).unwrap();
        import(&images, guard.path(), "beach sunset", &a.id);
        import(&images, guard.path(), "city", &b.id);

        let hits = search_images(&catalog, "SUN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].folder_name, "A");
        assert_eq!(hits[0].image.name, "beach sunset");
    }

    #[test]
    fn test_search_matches_tags() {
        let (guard, catalog, images) = setup();
        let a = catalog.add_folder("A", FolderColor::Blue).unwrap();
        let imported = import(&images, guard.path(), "img-001", &a.id);

        // Tag the image through the catalog.
        let mut folder = catalog.get_folder_by_id(&a.id).unwrap();
        folder.images_mut()[0].tags.push("Vacation".to_string());
        catalog.update_folder(&folder).unwrap();

        let hits = search_images(&catalog, "vaca");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].image.id, imported.id);
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let (guard, catalog, images) = setup();
        let a = catalog.add_folder("A", FolderColor::Blue).unwrap();
        import(&images, guard.path(), "one", &a.id);
        import(&images, guard.path(), "two", &a.id);

        assert_eq!(search_images(&catalog, "").len(), 2);
    }

    #[test]
    fn test_search_no_match() {
        let (guard, catalog, images) = setup();
        let a = catalog.add_folder("A", FolderColor::Blue).unwrap();
        import(&images, guard.path(), "one", &a.id);

        assert!(search_images(&catalog, "zzz").is_empty());
    }
}
