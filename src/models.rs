use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed palette of folder color tags.
///
/// Serialized as the hex string (e.g. `"#1E90FF"`) so the persisted catalog
/// stays readable and the UI layer can use the value directly.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FolderColor {
    #[serde(rename = "#1E90FF")]
    Blue,
    #[serde(rename = "#DC143C")]
    Crimson,
    #[serde(rename = "#2E8B57")]
    Green,
    #[serde(rename = "#FFD700")]
    Gold,
    #[serde(rename = "#FF8C00")]
    Orange,
    #[serde(rename = "#9370DB")]
    Purple,
    #[serde(rename = "#20B2AA")]
    Teal,
    #[serde(rename = "#708090")]
    Gray,
}

impl FolderColor {
    /// Every palette entry, in picker order.
    pub const ALL: [FolderColor; 8] = [
        FolderColor::Blue,
        FolderColor::Crimson,
        FolderColor::Green,
        FolderColor::Gold,
        FolderColor::Orange,
        FolderColor::Purple,
        FolderColor::Teal,
        FolderColor::Gray,
    ];

    /// Returns the hex string form of the color tag.
    pub fn as_hex(&self) -> &'static str {
        match self {
            FolderColor::Blue => "#1E90FF",
            FolderColor::Crimson => "#DC143C",
            FolderColor::Green => "#2E8B57",
            FolderColor::Gold => "#FFD700",
            FolderColor::Orange => "#FF8C00",
            FolderColor::Purple => "#9370DB",
            FolderColor::Teal => "#20B2AA",
            FolderColor::Gray => "#708090",
        }
    }
}

impl FromStr for FolderColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FolderColor::ALL
            .iter()
            .find(|c| c.as_hex().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown folder color '{}'", s))
    }
}

/// A single image record inside a folder.
///
/// `path` is the canonical string form of the backing-file location; it is
/// what gets persisted, and `resolve` turns it back into a live path on
/// demand. The on-disk filename is always `<name>.jpg`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Image {
    pub id: String,
    pub path: String,
    pub name: String,
    /// Search terms. Defaulted so catalogs written before tags existed
    /// still deserialize.
    #[serde(default)]
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
}

impl Image {
    /// Creates a new image record with a fresh id and the current timestamp.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            path: path.into(),
            name: name.into(),
            tags: Vec::new(),
            created: Utc::now(),
        }
    }

    /// Resolves the stored path string to a live filesystem path.
    pub fn resolve(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}

/// Two images are the same image when they reference the same backing file.
impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Image {}

/// A user-named, color-tagged folder of images.
///
/// The image list is insertion-ordered (newest appended) and only the
/// managers mutate it; external code reads it through [`Folder::images`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub color: FolderColor,
    images: Vec<Image>,
}

impl Folder {
    /// Creates a new empty folder with a fresh id.
    pub fn new(name: impl Into<String>, color: FolderColor) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            color,
            images: Vec::new(),
        }
    }

    /// Read-only view of the image list.
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub(crate) fn push_image(&mut self, image: Image) {
        self.images.push(image);
    }

    /// Removes the entry matching `image` (path equality). Returns true when
    /// something was removed.
    pub(crate) fn remove_image(&mut self, image: &Image) -> bool {
        let before = self.images.len();
        self.images.retain(|i| i != image);
        self.images.len() != before
    }

    pub(crate) fn images_mut(&mut self) -> &mut Vec<Image> {
        &mut self.images
    }
}

/// Application preference state.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// When enabled, `list_folders` puts most-recently-opened folders first.
    pub recent_first: bool,
    /// Folder ids, most-recent-first.
    pub recent_folders: Vec<String>,
}

/// Generic result envelope for the collaborator-facing command surface.
///
/// Carries a short human-readable message the UI can show directly.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ApiResult {
    /// Create a successful result with a user-facing message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// Attach the folder id the operation produced or acted on.
    pub fn with_folder_id(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Attach the image id the operation produced or acted on.
    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    /// Attach a filesystem path (e.g. a staged capture).
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}
