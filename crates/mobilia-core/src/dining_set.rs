//! # Dining Set
//!
//! Composition of one table and an ordered run of chairs, with aggregate
//! pricing and a bulk discount.
//!
//! ## Aggregate Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Dining Set Pricing                             │
//! │                                                                     │
//! │  table.compute_price() ──┐                                          │
//! │                          ├──► sum ──► 4+ chairs? ──► -5% ──► total  │
//! │  chair.compute_price() ──┘           (whole sum discounted)         │
//! │  (each chair)                                                       │
//! │                                                                     │
//! │  The set owns no pricing rules of its own beyond the discount.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::catalog::{Chair, Table};
use crate::error::ValidationResult;
use crate::item::Furniture;
use crate::money::Money;
use crate::validation::validate_name;
use crate::{BULK_DISCOUNT_BPS, BULK_DISCOUNT_MIN_CHAIRS};

// =============================================================================
// Dining Set
// =============================================================================

/// A named table-and-chairs set.
///
/// Chairs keep insertion order and duplicates are allowed. The chair
/// accessor returns a defensive copy: mutating the returned vector never
/// changes the set.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DiningSet {
    name: String,
    table: Table,
    chairs: Vec<Chair>,
}

impl DiningSet {
    /// Creates a set from a table and any number of starting chairs.
    pub fn new(name: &str, table: Table, chairs: Vec<Chair>) -> ValidationResult<Self> {
        Ok(DiningSet {
            name: validate_name(name)?,
            table,
            chairs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the set name. Rejects names that are empty after trimming.
    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Defensive copy of the chair run, in insertion order.
    pub fn chairs(&self) -> Vec<Chair> {
        self.chairs.clone()
    }

    pub fn chair_count(&self) -> usize {
        self.chairs.len()
    }

    /// Appends a chair to the set. No upper bound is enforced here.
    pub fn add_chair(&mut self, chair: Chair) -> String {
        let message = format!("Added chair '{}' to set '{}'", chair.name(), self.name);
        self.chairs.push(chair);
        message
    }

    /// Removes the chair at `index` (default: the last one).
    ///
    /// Removing from an empty set, or with an out-of-range index, performs
    /// no mutation and returns an explanatory message instead of failing.
    pub fn remove_chair(&mut self, index: Option<usize>) -> String {
        if self.chairs.is_empty() {
            return format!("Set '{}' has no chairs to remove", self.name);
        }
        let index = index.unwrap_or(self.chairs.len() - 1);
        if index >= self.chairs.len() {
            return format!(
                "Set '{}' has no chair at position {} ({} chairs)",
                self.name,
                index,
                self.chairs.len()
            );
        }
        let chair = self.chairs.remove(index);
        format!("Removed chair '{}' from set '{}'", chair.name(), self.name)
    }

    /// Pre-discount chair subtotal.
    fn chairs_price(&self) -> Money {
        self.chairs.iter().map(Chair::compute_price).sum()
    }

    /// Whether the set qualifies for the bulk discount.
    fn discount_applies(&self) -> bool {
        self.chairs.len() >= BULK_DISCOUNT_MIN_CHAIRS
    }

    /// Table price plus every chair price, with the 5% bulk discount
    /// applied to the whole sum once the set has four or more chairs.
    pub fn total_price(&self) -> Money {
        let sum = self.table.compute_price() + self.chairs_price();
        if self.discount_applies() {
            sum.apply_percentage_discount(BULK_DISCOUNT_BPS)
        } else {
            sum
        }
    }

    /// Structured totals snapshot.
    pub fn summary(&self) -> DiningSetSummary {
        DiningSetSummary::from(self)
    }

    /// Multi-line rendering of the whole set: table, every chair (or an
    /// explicit "none" marker), the chair count, and the discount when it
    /// applies.
    pub fn full_description(&self) -> String {
        let mut lines = vec![
            format!("Dining set '{}'", self.name),
            format!("  Table: {}", self.table.describe()),
        ];
        if self.chairs.is_empty() {
            lines.push("  Chairs: none".to_string());
        } else {
            for chair in &self.chairs {
                lines.push(format!("  Chair: {}", chair.describe()));
            }
        }
        lines.push(format!("  Chair count: {}", self.chairs.len()));
        if self.discount_applies() {
            lines.push(format!(
                "  Bulk discount: 5% off for {}+ chairs",
                BULK_DISCOUNT_MIN_CHAIRS
            ));
        }
        lines.push(format!("  Total price: {}", self.total_price()));
        lines.join("\n")
    }
}

// =============================================================================
// Summary DTO
// =============================================================================

/// Totals snapshot of a dining set, for API/frontend consumption.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiningSetSummary {
    pub name: String,
    /// Table plus chairs.
    pub total_item_count: usize,
    pub table_price: Money,
    /// Pre-discount chair subtotal.
    pub chairs_price: Money,
    /// Post-discount set total.
    pub total_price: Money,
    /// One seat per chair.
    pub seating_capacity: usize,
    /// Distinct materials across table and chairs, sorted.
    pub materials_used: Vec<String>,
}

impl From<&DiningSet> for DiningSetSummary {
    fn from(set: &DiningSet) -> Self {
        let mut materials: Vec<String> = std::iter::once(set.table.material())
            .chain(set.chairs.iter().map(|c| c.material()))
            .map(str::to_string)
            .collect();
        materials.sort();
        materials.dedup();

        DiningSetSummary {
            name: set.name.clone(),
            total_item_count: 1 + set.chairs.len(),
            table_price: set.table.compute_price(),
            chairs_price: set.chairs_price(),
            total_price: set.total_price(),
            seating_capacity: set.chairs.len(),
            materials_used: materials,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
