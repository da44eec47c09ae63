//! Armchair: a lounge seat priced by fitted features.

use serde::Serialize;
use ts_rs::TS;

use crate::category::{Seating, Upholstery};
use crate::error::ValidationResult;
use crate::item::{BaseItem, Furniture};
use crate::money::Money;

const UPHOLSTERY_SURCHARGE: Money = Money::from_units(200);
const ARMS_SURCHARGE: Money = Money::from_units(100);
const RECLINER_SURCHARGE: Money = Money::from_units(250);
const FOOTREST_SURCHARGE: Money = Money::from_units(80);

/// An armchair.
///
/// Pricing: `base + 200 if upholstered + 100 if armed + 250 if reclinable
/// + 80 if footrest`. The seating comfort factor does NOT enter the price;
/// armchairs are priced purely by fitted features.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Armchair {
    base: BaseItem,
    seating: Seating,
    has_arms: bool,
    reclinable: bool,
    has_footrest: bool,
}

impl Armchair {
    /// Creates an armchair with the catalog defaults: seats two, backrest,
    /// no upholstery, arms, not reclinable, no footrest.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(Armchair {
            base: BaseItem::new(name, material, color, base_price)?,
            seating: Seating::new(2, true, None)?,
            has_arms: true,
            reclinable: false,
            has_footrest: false,
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

    pub fn with_reclinable(mut self, reclinable: bool) -> Self {
        self.reclinable = reclinable;
        self
    }

    pub fn with_footrest(mut self, has_footrest: bool) -> Self {
        self.has_footrest = has_footrest;
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

    pub fn reclinable(&self) -> bool {
        self.reclinable
    }

    pub fn set_reclinable(&mut self, reclinable: bool) {
        self.reclinable = reclinable;
    }

    pub fn has_footrest(&self) -> bool {
        self.has_footrest
    }

    pub fn set_has_footrest(&mut self, has_footrest: bool) {
        self.has_footrest = has_footrest;
    }
}

impl Furniture for Armchair {
    fn base(&self) -> &BaseItem {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }

    fn compute_price(&self) -> Money {
        let mut price = self.base.base_price();
        if self.seating.upholstery().is_some() {
            price += UPHOLSTERY_SURCHARGE;
        }
        if self.has_arms {
            price += ARMS_SURCHARGE;
        }
        if self.reclinable {
            price += RECLINER_SURCHARGE;
        }
        if self.has_footrest {
            price += FOOTREST_SURCHARGE;
        }
        price
    }

    fn describe(&self) -> String {
        let mut features = Vec::new();
        if self.has_arms {
            features.push("arms");
        }
        if self.reclinable {
            features.push("reclinable");
        }
        if self.has_footrest {
            features.push("footrest");
        }
        let features = if features.is_empty() {
            "none".to_string()
        } else {
            features.join(", ")
        };
        format!(
            "Armchair '{}' ({}, {}). {}. Features: {}. Price: {}",
            self.base.name(),
            self.base.material(),
            self.base.color(),
            self.seating.info(),
            features,
            self.compute_price()
        )
    }
}
