//! Sofa: a multi-person seat with arm, modular, and cushion options.

use serde::Serialize;
use ts_rs::TS;

use crate::category::{Seating, Upholstery};
use crate::error::ValidationResult;
use crate::item::{BaseItem, Furniture};
use crate::money::Money;

const ARMS_SURCHARGE: Money = Money::from_units(80);
const MODULAR_SURCHARGE: Money = Money::from_units(150);
const CUSHIONS_SURCHARGE: Money = Money::from_units(50);

/// A sofa.
///
/// Pricing: `base × comfort factor`, plus fixed surcharges for arms,
/// modular construction, and included cushions.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Sofa {
    base: BaseItem,
    seating: Seating,
    has_arms: bool,
    is_modular: bool,
    includes_cushions: bool,
}

impl Sofa {
    /// Creates a sofa with the catalog defaults: seats three, backrest, no
    /// upholstery, arms, not modular, no cushions.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(Sofa {
            base: BaseItem::new(name, material, color, base_price)?,
            seating: Seating::new(3, true, None)?,
            has_arms: true,
            is_modular: false,
            includes_cushions: false,
        })
    }

    pub fn with_capacity(mut self, capacity: u32) -> ValidationResult<Self> {
        self.seating.set_capacity(capacity)?;
        Ok(self)
    }

    pub fn with_backrest(mut self, has_backrest: bool) -> Self {
        self.seating.set_has_backrest(has_backrest);
        self
    }

    pub fn with_upholstery(mut self, upholstery: Upholstery) -> Self {
        self.seating.set_upholstery(Some(upholstery));
        self
    }

    pub fn with_arms(mut self, has_arms: bool) -> Self {
        self.has_arms = has_arms;
        self
    }

    pub fn with_modular(mut self, is_modular: bool) -> Self {
        self.is_modular = is_modular;
        self
    }

    pub fn with_cushions(mut self, includes_cushions: bool) -> Self {
        self.includes_cushions = includes_cushions;
        self
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn seating_mut(&mut self) -> &mut Seating {
        &mut self.seating
    }

    pub fn has_arms(&self) -> bool {
        self.has_arms
    }

    pub fn set_has_arms(&mut self, has_arms: bool) {
        self.has_arms = has_arms;
    }

    pub fn is_modular(&self) -> bool {
        self.is_modular
    }

    pub fn set_is_modular(&mut self, is_modular: bool) {
        self.is_modular = is_modular;
    }

    pub fn includes_cushions(&self) -> bool {
        self.includes_cushions
    }

    pub fn set_includes_cushions(&mut self, includes_cushions: bool) {
        self.includes_cushions = includes_cushions;
    }
}

impl Furniture for Sofa {
    fn base(&self) -> &BaseItem {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }

    fn compute_price(&self) -> Money {
        let mut price = self
            .base
            .base_price()
            .apply_factor(self.seating.comfort_factor());
        if self.has_arms {
            price += ARMS_SURCHARGE;
        }
        if self.is_modular {
            price += MODULAR_SURCHARGE;
        }
        if self.includes_cushions {
            price += CUSHIONS_SURCHARGE;
        }
        price
    }

    fn describe(&self) -> String {
        let mut features = Vec::new();
        if self.has_arms {
            features.push("arms");
        }
        if self.is_modular {
            features.push("modular");
        }
        if self.includes_cushions {
            features.push("cushions included");
        }
        let features = if features.is_empty() {
            "none".to_string()
        } else {
            features.join(", ")
        };
        format!(
            "Sofa '{}' ({}, {}). {}. Features: {}. Price: {}",
            self.base.name(),
            self.base.material(),
            self.base.color(),
            self.seating.info(),
            features,
            self.compute_price()
        )
    }
}
