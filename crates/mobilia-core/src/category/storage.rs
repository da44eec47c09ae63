//! Storage category: compartments, liters, and the storage factor they
//! produce.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::validation::{validate_compartments, validate_liters};

/// Shared state of storage furniture.
///
/// ```compile_fail
/// use mobilia_core::Storage;
///
/// // Category components have no public constructor.
/// let storage = Storage::new(4, 150.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Storage {
    compartments: u32,
    capacity_liters: f64,
}

impl Storage {
    pub(crate) fn new(compartments: u32, capacity_liters: f64) -> ValidationResult<Self> {
        validate_compartments(compartments)?;
        validate_liters(capacity_liters)?;
        Ok(Storage {
            compartments,
            capacity_liters,
        })
    }

    /// Number of compartments. Always at least 1.
    pub fn compartments(&self) -> u32 {
        self.compartments
    }

    /// Sets the compartment count. Rejects zero.
    pub fn set_compartments(&mut self, compartments: u32) -> ValidationResult<()> {
        validate_compartments(compartments)?;
        self.compartments = compartments;
        Ok(())
    }

    /// Usable volume in liters. Always strictly positive.
    pub fn capacity_liters(&self) -> f64 {
        self.capacity_liters
    }

    /// Sets the capacity in liters. Rejects non-positive values.
    pub fn set_capacity_liters(&mut self, liters: f64) -> ValidationResult<()> {
        validate_liters(liters)?;
        self.capacity_liters = liters;
        Ok(())
    }

    /// The storage multiplier applied to a storage item's base price.
    ///
    /// `1.0 + 0.05 × compartments + liters / 1000`: monotonically
    /// increasing in both dimensions, always `>= 1.0`.
    pub fn storage_factor(&self) -> f64 {
        1.0 + 0.05 * self.compartments as f64 + self.capacity_liters / 1000.0
    }

    /// One-line attribute summary used by concrete `describe()` outputs.
    pub fn info(&self) -> String {
        format!(
            "compartments: {}, capacity: {} L",
            self.compartments, self.capacity_liters
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(compartments: u32, liters: f64) -> Storage {
        Storage::new(compartments, liters).unwrap()
    }

    #[test]
    fn test_field_validation() {
        assert!(Storage::new(0, 100.0).is_err());
        assert!(Storage::new(4, 0.0).is_err());
        assert!(Storage::new(4, -10.0).is_err());

        let mut s = storage(5, 200.0);
        assert!(s.set_compartments(0).is_err());
        assert_eq!(s.compartments(), 5);
        assert!(s.set_capacity_liters(0.0).is_err());
        assert_eq!(s.capacity_liters(), 200.0);

        s.set_compartments(8).unwrap();
        s.set_capacity_liters(300.0).unwrap();
        assert_eq!(s.compartments(), 8);
        assert_eq!(s.capacity_liters(), 300.0);
    }

    #[test]
    fn test_storage_factor_floor() {
        assert!(storage(1, 1.0).storage_factor() >= 1.0);
    }

    #[test]
    fn test_storage_factor_monotonic_in_compartments() {
        let few = storage(2, 100.0);
        let many = storage(5, 100.0);
        assert!(many.storage_factor() > few.storage_factor());
    }

    #[test]
    fn test_storage_factor_monotonic_in_liters() {
        let small = storage(3, 100.0);
        let large = storage(3, 500.0);
        assert!(large.storage_factor() > small.storage_factor());
    }

    #[test]
    fn test_storage_factor_exact() {
        // 1.0 + 0.05·4 + 150/1000 = 1.35
        assert!((storage(4, 150.0).storage_factor() - 1.35).abs() < 1e-9);
    }

    #[test]
    fn test_info_mentions_attributes() {
        let info = storage(6, 180.0).info();
        assert!(info.contains('6'));
        assert!(info.contains("180"));
        assert!(info.to_lowercase().contains("compartments"));
    }
}
