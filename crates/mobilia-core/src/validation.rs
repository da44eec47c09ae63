//! # Validation Module
//!
//! Input validation utilities shared by the item constructors and setters.
//!
//! ## Validation Strategy
//! Every mutable field is validated at two points with the same rule:
//! once in the constructor and once in its setter. A failed validation
//! returns an error naming the field and leaves the prior value untouched.
//!
//! ## Usage
//! ```rust
//! use mobilia_core::validation::{validate_capacity, validate_name};
//!
//! assert_eq!(validate_name("  Oak Table  ").unwrap(), "Oak Table");
//! assert!(validate_capacity(0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty after trimming surrounding whitespace
///
/// ## Returns
/// The trimmed name; the trimmed value is what gets stored.
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a free-form required text field (material, color).
///
/// ## Rules
/// - Must not be blank
pub fn validate_text(field: &str, value: &str) -> ValidationResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a base price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional items)
///
/// ## Example
/// ```rust
/// use mobilia_core::validation::validate_price;
/// use mobilia_core::Money;
///
/// assert!(validate_price(Money::from_units(500)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a seating capacity (persons).
///
/// ## Rules
/// - Must be at least 1
pub fn validate_capacity(capacity: u32) -> ValidationResult<()> {
    if capacity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "capacity".to_string(),
        });
    }

    Ok(())
}

/// Validates a linear dimension (length, width, height).
///
/// ## Rules
/// - Must be strictly positive
pub fn validate_dimension(field: &str, value: f64) -> ValidationResult<()> {
    if !(value > 0.0) {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a compartment count.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_compartments(compartments: u32) -> ValidationResult<()> {
    if compartments == 0 {
        return Err(ValidationError::MustBePositive {
            field: "compartments".to_string(),
        });
    }

    Ok(())
}

/// Validates a storage capacity in liters.
///
/// ## Rules
/// - Must be strictly positive
pub fn validate_liters(liters: f64) -> ValidationResult<()> {
    if !(liters > 0.0) {
        return Err(ValidationError::MustBePositive {
            field: "capacity_liters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
