//! Collaborator-facing command surface.
//!
//! Thin wrappers over the managers for a UI layer to call: every operation
//! returns either the data directly or an [`ApiResult`](crate::models::ApiResult)
//! carrying a short human-readable success/failure message. No business
//! logic lives here.

pub mod folders;
pub mod images;

pub use folders::*;
pub use images::*;
