use std::path::Path;

use crate::catalog::FolderCatalog;
use crate::images::ImageManager;
use crate::models::{ApiResult, Image};
use crate::search::{self, SearchHit};

/// Imports an image from a source path into a folder.
pub fn import_image(
    images: &ImageManager,
    source: &str,
    name: &str,
    folder_id: &str,
) -> ApiResult {
    match images.save_image(Path::new(source), name, folder_id) {
        Ok(image) => ApiResult::success(format!("Image '{}' saved", image.name))
            .with_image_id(image.id)
            .with_path(image.path),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Stages a camera-capture buffer; the returned path is a later
/// `import_image` source.
pub fn stage_capture(images: &ImageManager, bytes: &[u8]) -> ApiResult {
    match images.stage_capture(bytes) {
        Ok(path) => ApiResult::success("Capture staged").with_path(path),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Moves an image to another folder.
pub fn move_image(
    catalog: &FolderCatalog,
    images: &ImageManager,
    image_id: &str,
    source_folder_id: &str,
    target_folder_id: &str,
) -> ApiResult {
    let image = match find_image(catalog, source_folder_id, image_id) {
        Some(image) => image,
        None => return ApiResult::error("Image not found"),
    };
    match images.move_image(&image, source_folder_id, target_folder_id) {
        Ok(true) => ApiResult::success(format!("Image '{}' moved", image.name)),
        Ok(false) => ApiResult::error(format!("Could not move image '{}'", image.name)),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Deletes an image and its backing file.
pub fn delete_image(
    catalog: &FolderCatalog,
    images: &ImageManager,
    image_id: &str,
    folder_id: &str,
) -> ApiResult {
    let image = match find_image(catalog, folder_id, image_id) {
        Some(image) => image,
        None => return ApiResult::error("Image not found"),
    };
    match images.delete_image(&image, folder_id) {
        Ok(true) => ApiResult::success(format!("Image '{}' deleted", image.name)),
        Ok(false) => ApiResult::error(format!("Could not delete image '{}'", image.name)),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Renames an image.
pub fn rename_image(
    catalog: &FolderCatalog,
    images: &ImageManager,
    image_id: &str,
    new_name: &str,
    folder_id: &str,
) -> ApiResult {
    let image = match find_image(catalog, folder_id, image_id) {
        Some(image) => image,
        None => return ApiResult::error("Image not found"),
    };
    match images.rename_image(&image, new_name, folder_id) {
        Ok(true) => ApiResult::success(format!("Image renamed to '{}'", new_name)),
        Ok(false) => ApiResult::error(format!("Could not rename image '{}'", image.name)),
        Err(e) => ApiResult::error(e.to_string()),
    }
}

/// Lists the images of the named folder.
pub fn list_images(images: &ImageManager, folder_name: &str) -> Result<Vec<Image>, String> {
    images
        .images_from_folder(folder_name)
        .map_err(|e| e.to_string())
}

/// Substring search over image names and tags across all folders.
pub fn search_images(catalog: &FolderCatalog, query: &str) -> Vec<SearchHit> {
    search::search_images(catalog, query)
}

fn find_image(catalog: &FolderCatalog, folder_id: &str, image_id: &str) -> Option<Image> {
    catalog
        .get_folder_by_id(folder_id)?
        .images()
        .iter()
        .find(|i| i.id == image_id)
        .cloned()
}
