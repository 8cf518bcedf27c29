use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors produced by the catalog and image managers.
///
/// File-level failures of move/delete/rename are reported as `Ok(false)` by
/// the managers rather than through this enum; these variants cover the
/// cases callers must distinguish.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Invalid caller input: blank name, traversal-unsafe name, or a move
    /// where source and target folder are the same.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced folder or image does not exist in the catalog.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An underlying file operation failed (open, copy, create).
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the JSON catalog or config document failed. Surfaced to the
    /// caller because a lost catalog write after a successful file operation
    /// is exactly the divergence the data model forbids.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl CatalogError {
    /// True when the error is caller input that should never be retried.
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn failing() -> Result<()> {
            std::fs::read_to_string("/nonexistent/picfolio-test")?;
            Ok(())
        }
        let err = failing().unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_validation_predicate() {
        assert!(CatalogError::Validation("blank name".into()).is_validation());
        assert!(!CatalogError::NotFound("folder x".into()).is_validation());
    }

    #[test]
    fn test_display_messages() {
        let err = CatalogError::NotFound("no folder with id abc".into());
        assert_eq!(err.to_string(), "Not found: no folder with id abc");
    }
}
