//! Photo organizer core: user-named, color-tagged folders of images over a
//! JSON-backed catalog and the local filesystem.
//!
//! The catalog document and the directory tree are kept in lockstep: every
//! image-file operation either completes and is recorded, or fails and
//! leaves the catalog untouched.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod images;
pub mod models;
pub mod search;
pub mod store;

pub use catalog::FolderCatalog;
pub use config::ConfigManager;
pub use error::{CatalogError, Result};
pub use filesystem::FileSystem;
pub use images::ImageManager;
pub use models::{ApiResult, Config, Folder, FolderColor, Image};
pub use search::{search_images, SearchHit};
pub use store::CatalogStore;
