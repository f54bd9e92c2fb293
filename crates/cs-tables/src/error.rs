//! Table lookup errors.

use cs_core::CsError;
use thiserror::Error;

/// Result type for table lookups.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised when a key or size is not present in the static tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Material key did not match any catalog entry.
    #[error("Unknown conductor material '{key}'")]
    UnknownMaterial { key: String },

    /// Cross-section is not one of the standard catalog sizes.
    #[error("Cross-section {mm2} mm² is not a standard catalog size")]
    SizeNotInCatalog { mm2: f64 },
}

impl From<TableError> for CsError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::UnknownMaterial { key } => CsError::NotFound {
                what: format!("conductor material '{}'", key),
            },
            TableError::SizeNotInCatalog { mm2 } => CsError::InvalidArg {
                what: format!("cross-section {} mm² is not a catalog size", mm2),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TableError::UnknownMaterial { key: "gold".into() };
        assert!(err.to_string().contains("gold"));

        let err = TableError::SizeNotInCatalog { mm2: 3.3 };
        assert!(err.to_string().contains("3.3"));
    }

    #[test]
    fn error_to_cs_error() {
        let err: CsError = TableError::UnknownMaterial { key: "gold".into() }.into();
        assert!(matches!(err, CsError::NotFound { .. }));

        let err: CsError = TableError::SizeNotInCatalog { mm2: 3.3 }.into();
        assert!(matches!(err, CsError::InvalidArg { .. }));
    }
}
