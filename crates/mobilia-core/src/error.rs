//! # Error Types
//!
//! Domain-specific error types for mobilia-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every message names the offending field ("name", "price", ...)
//! 3. Errors are enum variants, never String
//!
//! Invalid construction of the abstract layers (`BaseItem` and the category
//! components) is impossible by design: those types have no public
//! constructor, so there is no runtime error to represent for them.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised synchronously when constructing an item or mutating a field with
/// an invalid value. The mutation is rejected and the prior value is kept.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set.
    #[error("{field} must be one of {allowed:?}, got '{value}'")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "capacity".to_string(),
        };
        assert_eq!(err.to_string(), "capacity must be positive");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        };
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_not_allowed_lists_choices() {
        let err = ValidationError::NotAllowed {
            field: "size".to_string(),
            value: "gigante".to_string(),
            allowed: vec!["individual".to_string(), "king".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("size"));
        assert!(msg.contains("gigante"));
        assert!(msg.contains("individual"));
    }
}
