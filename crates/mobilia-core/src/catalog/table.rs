//! Table: a dining/work surface with shape and person capacity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::category::Surface;
use crate::error::{ValidationError, ValidationResult};
use crate::item::{BaseItem, Furniture};
use crate::money::Money;
use crate::validation::validate_capacity;

/// Surcharge for any shape other than rectangular.
const NON_RECTANGULAR_SURCHARGE: Money = Money::from_units(50);

/// Surcharge once the table seats more than four.
const CAPACITY_OVER_4_SURCHARGE: Money = Money::from_units(100);

/// Additional surcharge once the table seats more than six.
const CAPACITY_OVER_6_SURCHARGE: Money = Money::from_units(150);

// =============================================================================
// Table Shape
// =============================================================================

/// The shapes a table can be cut in. Anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Rectangular,
    Redonda,
    Cuadrada,
    Ovalada,
}

impl TableShape {
    /// All accepted shapes, in wire form.
    pub const ALL: [&'static str; 4] = ["rectangular", "redonda", "cuadrada", "ovalada"];
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableShape::Rectangular => "rectangular",
            TableShape::Redonda => "redonda",
            TableShape::Cuadrada => "cuadrada",
            TableShape::Ovalada => "ovalada",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TableShape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangular" => Ok(TableShape::Rectangular),
            "redonda" => Ok(TableShape::Redonda),
            "cuadrada" => Ok(TableShape::Cuadrada),
            "ovalada" => Ok(TableShape::Ovalada),
            other => Err(ValidationError::NotAllowed {
                field: "shape".to_string(),
                value: other.to_string(),
                allowed: Self::ALL.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// A table.
///
/// Pricing: `base × size factor`, plus fixed surcharges for non-rectangular
/// shapes and for each capacity bracket crossed (more than four, more than
/// six persons).
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Table {
    base: BaseItem,
    surface: Surface,
    shape: TableShape,
    capacity: u32,
}

impl Table {
    /// Creates a table with the catalog defaults: rectangular,
    /// 120 × 80 × 75, seats four.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(Table {
            base: BaseItem::new(name, material, color, base_price)?,
            surface: Surface::new(120.0, 80.0, 75.0)?,
            shape: TableShape::Rectangular,
            capacity: 4,
        })
    }

    pub fn with_shape(mut self, shape: TableShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_dimensions(
        mut self,
        length: f64,
        width: f64,
        height: f64,
    ) -> ValidationResult<Self> {
        self.surface = Surface::new(length, width, height)?;
        Ok(self)
    }

    pub fn with_capacity(mut self, capacity: u32) -> ValidationResult<Self> {
        validate_capacity(capacity)?;
        self.capacity = capacity;
        Ok(self)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn shape(&self) -> TableShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: TableShape) {
        self.shape = shape;
    }

    /// Persons the table seats. Always at least 1.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Sets the capacity. Rejects zero.
    pub fn set_capacity(&mut self, capacity: u32) -> ValidationResult<()> {
        validate_capacity(capacity)?;
        self.capacity = capacity;
        Ok(())
    }

    /// Top area, delegated to the surface component.
    pub fn area(&self) -> f64 {
        self.surface.area()
    }
}

impl Furniture for Table {
    fn base(&self) -> &BaseItem {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }

    fn compute_price(&self) -> Money {
        let mut price = self.base.base_price().apply_factor(self.surface.size_factor());
        if self.shape != TableShape::Rectangular {
            price += NON_RECTANGULAR_SURCHARGE;
        }
        if self.capacity > 4 {
            price += CAPACITY_OVER_4_SURCHARGE;
        }
        if self.capacity > 6 {
            price += CAPACITY_OVER_6_SURCHARGE;
        }
        price
    }

    fn describe(&self) -> String {
        format!(
            "Table '{}' ({}, {}). Shape: {}, seats {} persons. {}. Price: {}",
            self.base.name(),
            self.base.material(),
            self.base.color(),
            self.shape,
            self.capacity,
            self.surface.info(),
            self.compute_price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(base_price: i64) -> Table {
        Table::new("Table", "Madera", "Natural", Money::from_units(base_price)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let t = table(200);
        assert_eq!(t.shape(), TableShape::Rectangular);
        assert_eq!(t.surface().length(), 120.0);
        assert_eq!(t.surface().width(), 80.0);
        assert_eq!(t.surface().height(), 75.0);
        assert_eq!(t.capacity(), 4);
    }

    #[test]
    fn test_default_table_exact_price() {
        // area 9600 → size factor 1.48 → 200 × 1.48 = $296.00
        assert_eq!(table(200).compute_price(), Money::from_units(296));
    }

    #[test]
    fn test_non_rectangular_costs_more() {
        let rect = table(200);
        let round = table(200).with_shape(TableShape::Redonda);

        assert_eq!(
            round.compute_price() - rect.compute_price(),
            NON_RECTANGULAR_SURCHARGE
        );
    }

    #[test]
    fn test_capacity_brackets() {
        let four = table(200);
        let six = table(200).with_capacity(6).unwrap();
        let eight = table(200).with_capacity(8).unwrap();

        assert!(six.compute_price() > four.compute_price());
        assert!(eight.compute_price() > six.compute_price());
        assert_eq!(
            eight.compute_price() - four.compute_price(),
            CAPACITY_OVER_4_SURCHARGE + CAPACITY_OVER_6_SURCHARGE
        );
    }

    #[test]
    fn test_larger_area_costs_more() {
        let small = table(200).with_dimensions(80.0, 60.0, 75.0).unwrap();
        let large = table(200).with_dimensions(200.0, 120.0, 75.0).unwrap();

        assert!(large.compute_price() > small.compute_price());
    }

    #[test]
    fn test_capacity_validation() {
        let mut t = table(200);
        assert!(t.set_capacity(0).is_err());
        assert_eq!(t.capacity(), 4);
        t.set_capacity(8).unwrap();
        assert_eq!(t.capacity(), 8);
    }

    #[test]
    fn test_shape_parsing() {
        for wire in TableShape::ALL {
            assert_eq!(wire.parse::<TableShape>().unwrap().to_string(), wire);
        }

        let err = "triangular".parse::<TableShape>().unwrap_err();
        assert!(err.to_string().contains("shape"));
        assert!(err.to_string().contains("triangular"));
    }

    #[test]
    fn test_describe_contains_attributes() {
        let t = Table::new("Mesa Grande", "Roble", "Oscuro", Money::from_units(350))
            .unwrap()
            .with_shape(TableShape::Redonda)
            .with_capacity(8)
            .unwrap();
        let desc = t.describe();

        assert!(desc.contains("Mesa Grande"));
        assert!(desc.contains("Roble"));
        assert!(desc.contains("Oscuro"));
        assert!(desc.contains("redonda"));
        assert!(desc.contains('8'));
        assert!(desc.to_lowercase().contains("person"));
        assert!(desc.contains('$'));
    }
}
