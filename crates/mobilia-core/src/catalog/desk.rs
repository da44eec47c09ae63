//! Desk: a work surface priced by drawers, reach, lighting, and cut.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::item::{BaseItem, Furniture};
use crate::money::Money;
use crate::validation::validate_dimension;

const PER_DRAWER_SURCHARGE: Money = Money::from_units(25);
const LONG_DESK_SURCHARGE: Money = Money::from_units(50);
const LIGHTING_SURCHARGE: Money = Money::from_units(40);
const NON_RECTANGULAR_SURCHARGE: Money = Money::from_units(30);

/// Length (meters) above which the long-desk surcharge applies.
const LONG_DESK_THRESHOLD_M: f64 = 1.5;

/// A desk.
///
/// Desk length is measured in meters. Unlike tables, the shape is a free
/// label (executive desks come in cuts like "curvo" or "esquinero"); any
/// label other than "rectangular" carries the shape surcharge.
///
/// Pricing: `base + 25 per drawer (when fitted) + 50 if longer than 1.5 m
/// + 40 if lit + 30 if not rectangular`.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Desk {
    base: BaseItem,
    shape: String,
    has_drawers: bool,
    num_drawers: u32,
    length_m: f64,
    has_lighting: bool,
}

impl Desk {
    /// Creates a desk with the catalog defaults: rectangular, no drawers,
    /// 1.2 m long, no lighting.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(Desk {
            base: BaseItem::new(name, material, color, base_price)?,
            shape: "rectangular".to_string(),
            has_drawers: false,
            num_drawers: 0,
            length_m: 1.2,
            has_lighting: false,
        })
    }

    pub fn with_shape(mut self, shape: &str) -> Self {
        self.shape = shape.to_string();
        self
    }

    /// Fits a drawer block with the given drawer count.
    pub fn with_drawers(mut self, num_drawers: u32) -> Self {
        self.has_drawers = true;
        self.num_drawers = num_drawers;
        self
    }

    pub fn with_length(mut self, length_m: f64) -> ValidationResult<Self> {
        validate_dimension("length", length_m)?;
        self.length_m = length_m;
        Ok(self)
    }

    pub fn with_lighting(mut self, has_lighting: bool) -> Self {
        self.has_lighting = has_lighting;
        self
    }

    pub fn shape(&self) -> &str {
        &self.shape
    }

    pub fn set_shape(&mut self, shape: &str) {
        self.shape = shape.to_string();
    }

    pub fn has_drawers(&self) -> bool {
        self.has_drawers
    }

    pub fn num_drawers(&self) -> u32 {
        self.num_drawers
    }

    /// Sets the drawer count; zero removes the drawer block.
    pub fn set_num_drawers(&mut self, num_drawers: u32) {
        self.num_drawers = num_drawers;
        self.has_drawers = num_drawers > 0;
    }

    /// Desk length in meters. Always strictly positive.
    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// Sets the desk length. Rejects non-positive values.
    pub fn set_length_m(&mut self, length_m: f64) -> ValidationResult<()> {
        validate_dimension("length", length_m)?;
        self.length_m = length_m;
        Ok(())
    }

    pub fn has_lighting(&self) -> bool {
        self.has_lighting
    }

    pub fn set_has_lighting(&mut self, has_lighting: bool) {
        self.has_lighting = has_lighting;
    }
}

impl Furniture for Desk {
    fn base(&self) -> &BaseItem {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }

    fn compute_price(&self) -> Money {
        let mut price = self.base.base_price();
        if self.has_drawers {
            price += PER_DRAWER_SURCHARGE * self.num_drawers;
        }
        if self.length_m > LONG_DESK_THRESHOLD_M {
            price += LONG_DESK_SURCHARGE;
        }
        if self.has_lighting {
            price += LIGHTING_SURCHARGE;
        }
        if self.shape != "rectangular" {
            price += NON_RECTANGULAR_SURCHARGE;
        }
        price
    }

    fn describe(&self) -> String {
        let lighting = if self.has_lighting { "yes" } else { "no" };
        format!(
            "Desk '{}' ({}, {}). Shape: {}, drawers: {}, length: {} m, lighting: {}. Price: {}",
            self.base.name(),
            self.base.material(),
            self.base.color(),
            self.shape,
            self.num_drawers,
            self.length_m,
            lighting,
            self.compute_price()
        )
    }
}
