//! Error types for the vessel adapter

use thiserror::Error;

/// Error raised while mapping between a `Vessel` and its stored document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A required input was absent (empty id, empty document)
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Stored vessel has no '{field}' field")]
    MissingField { field: &'static str },

    #[error("Stored vessel field '{field}' should be a string, found {found}")]
    UnexpectedType {
        field: &'static str,
        found: String,
    },

    /// Visibility is neither the global sentinel nor the creation center
    #[error("Stored vessel '{id}' has visibility '{visibility}' but was created by center '{creation}'")]
    InconsistentVisibility {
        id: String,
        visibility: String,
        creation: String,
    },

    /// A center named like the sentinel would decode as globally visible
    #[error("Center '{center}' collides with the global visibility marker")]
    ReservedCenter { center: String },
}

/// Error raised by a vessel store operation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    #[error("In-memory store error: {message}")]
    Memory { message: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_is_transparent() {
        let err = StoreError::from(ConversionError::MissingArgument("uuid"));
        assert_eq!(err.to_string(), "Missing required argument: uuid");
    }

    #[test]
    fn test_inconsistent_visibility_message() {
        let err = ConversionError::InconsistentVisibility {
            id: "v-1".to_string(),
            visibility: "2".to_string(),
            creation: "1".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'v-1'"));
        assert!(message.contains("'2'"));
        assert!(message.contains("'1'"));
    }
}
