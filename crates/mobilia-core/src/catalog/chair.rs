//! Chair: a single-person seat with optional office features.

use serde::Serialize;
use ts_rs::TS;

use crate::category::{Seating, Upholstery};
use crate::error::ValidationResult;
use crate::item::{BaseItem, Furniture};
use crate::money::Money;

/// Comfort premium for a height-adjustable column.
const HEIGHT_ADJUSTABLE_BONUS: f64 = 0.3;

/// Comfort premium for casters.
const WHEELS_BONUS: f64 = 0.2;

/// A chair. Capacity is fixed at one person.
///
/// Pricing: `base × comfort factor`, where the chair folds its own feature
/// premiums (height adjustment, wheels) into the seating comfort factor
/// before applying it.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Chair {
    base: BaseItem,
    seating: Seating,
    height_adjustable: bool,
    has_wheels: bool,
}

impl Chair {
    /// Creates a chair with the catalog defaults: backrest, no upholstery,
    /// fixed height, no wheels.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(Chair {
            base: BaseItem::new(name, material, color, base_price)?,
            seating: Seating::new(1, true, None)?,
            height_adjustable: false,
            has_wheels: false,
        })
    }

    pub fn with_backrest(mut self, has_backrest: bool) -> Self {
        self.seating.set_has_backrest(has_backrest);
        self
    }

    pub fn with_upholstery(mut self, upholstery: Upholstery) -> Self {
        self.seating.set_upholstery(Some(upholstery));
        self
    }

    pub fn with_height_adjustable(mut self, height_adjustable: bool) -> Self {
        self.height_adjustable = height_adjustable;
        self
    }

    pub fn with_wheels(mut self, has_wheels: bool) -> Self {
        self.has_wheels = has_wheels;
        self
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn seating_mut(&mut self) -> &mut Seating {
        &mut self.seating
    }

    pub fn height_adjustable(&self) -> bool {
        self.height_adjustable
    }

    pub fn set_height_adjustable(&mut self, height_adjustable: bool) {
        self.height_adjustable = height_adjustable;
    }

    pub fn has_wheels(&self) -> bool {
        self.has_wheels
    }

    pub fn set_has_wheels(&mut self, has_wheels: bool) {
        self.has_wheels = has_wheels;
    }

    /// The chair's full comfort multiplier: the seating factor plus the
    /// chair-specific feature premiums.
    pub fn comfort_factor(&self) -> f64 {
        let mut factor = self.seating.comfort_factor();
        if self.height_adjustable {
            factor += HEIGHT_ADJUSTABLE_BONUS;
        }
        if self.has_wheels {
            factor += WHEELS_BONUS;
        }
        factor
    }

    /// Moves the seat column to the requested height.
    ///
    /// Returns a confirmation message, or an explanatory message when the
    /// chair is not height-adjustable. Never errors.
    pub fn adjust_height(&self, target_cm: u32) -> String {
        if self.height_adjustable {
            format!(
                "'{}' seat height set to {} cm",
                self.base.name(),
                target_cm
            )
        } else {
            format!("'{}' is not height-adjustable", self.base.name())
        }
    }
}

impl Furniture for Chair {
    fn base(&self) -> &BaseItem {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }

    fn compute_price(&self) -> Money {
        self.base.base_price().apply_factor(self.comfort_factor())
    }

    fn describe(&self) -> String {
        let mut extras = Vec::new();
        if self.height_adjustable {
            extras.push("height adjustable");
        }
        if self.has_wheels {
            extras.push("wheels");
        }
        let extras = if extras.is_empty() {
            "none".to_string()
        } else {
            extras.join(", ")
        };
        format!(
            "Chair '{}' ({}, {}). {}. Extras: {}. Price: {}",
            self.base.name(),
            self.base.material(),
            self.base.color(),
            self.seating.info(),
            extras,
            self.compute_price()
        )
    }
}
