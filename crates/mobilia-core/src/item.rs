//! # Base Item & Furniture Trait
//!
//! The foundation of the catalog hierarchy:
//!
//! - [`BaseItem`] holds the four fields every piece of furniture has
//!   (name, material, color, base price) with validate-on-mutation
//!   discipline.
//! - [`Furniture`] is the polymorphic seam: every concrete catalog type
//!   implements `compute_price` and `describe` and exposes its embedded
//!   `BaseItem`.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Hierarchy                            │
//! │                                                                     │
//! │   Furniture (trait)        compute_price() -> Money                 │
//! │       │                    describe()      -> String                │
//! │       │                                                             │
//! │   BaseItem (component)     name, material, color, base price        │
//! │       │                                                             │
//! │   Seating / Surface / Storage (category components)                 │
//! │       │                                                             │
//! │   Chair, Table, Sofa, Bed, Wardrobe, Desk,                          │
//! │   DrawerUnit, Armchair, SofaBed (concrete types)                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `BaseItem` and the category components have no public constructor; only
//! the concrete catalog types can be created by users of the crate.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation::{validate_name, validate_price, validate_text};

// =============================================================================
// Base Item
// =============================================================================

/// The common state of every catalog item.
///
/// Constructed only by the concrete catalog types; all four fields stay
/// valid for the item's lifetime because every setter validates before
/// assigning.
///
/// ```compile_fail
/// use mobilia_core::{BaseItem, Money};
///
/// // No public constructor: the abstract layer cannot be instantiated.
/// let item = BaseItem::new("Table", "Oak", "Natural", Money::from_units(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct BaseItem {
    name: String,
    material: String,
    color: String,
    base_price: Money,
}

impl BaseItem {
    pub(crate) fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        validate_price(base_price)?;
        Ok(BaseItem {
            name: validate_name(name)?,
            material: validate_text("material", material)?,
            color: validate_text("color", color)?,
            base_price,
        })
    }

    /// Returns the item name (stored trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the item name. Rejects names that are empty after trimming.
    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    /// Sets the material. Rejects blank values.
    pub fn set_material(&mut self, material: &str) -> ValidationResult<()> {
        self.material = validate_text("material", material)?;
        Ok(())
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sets the color. Rejects blank values.
    pub fn set_color(&mut self, color: &str) -> ValidationResult<()> {
        self.color = validate_text("color", color)?;
        Ok(())
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    /// Sets the base price. Rejects negative values; zero is allowed.
    pub fn set_base_price(&mut self, price: Money) -> ValidationResult<()> {
        validate_price(price)?;
        self.base_price = price;
        Ok(())
    }
}

// =============================================================================
// Furniture Trait
// =============================================================================

/// Polymorphic interface of every concrete catalog type.
///
/// Callers construct concrete items and then price and render them through
/// this trait, e.g. over a `Vec<Box<dyn Furniture>>` catalog.
pub trait Furniture {
    /// The embedded common state.
    fn base(&self) -> &BaseItem;

    /// Mutable access to the common state (validated setters).
    fn base_mut(&mut self) -> &mut BaseItem;

    /// Computes the sale price from the base price and the type's
    /// surcharge rules.
    fn compute_price(&self) -> Money;

    /// Renders a human-readable description containing the name, material,
    /// color, and the attributes that drive this type's pricing.
    fn describe(&self) -> String;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn material(&self) -> &str {
        self.base().material()
    }

    fn color(&self) -> &str {
        self.base().color()
    }

    fn base_price(&self) -> Money {
        self.base().base_price()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
