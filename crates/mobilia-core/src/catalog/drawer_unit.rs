//! Drawer unit: a freestanding drawer block.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::item::{BaseItem, Furniture};
use crate::money::Money;

const PER_DRAWER_SURCHARGE: Money = Money::from_units(20);
const WHEELS_SURCHARGE: Money = Money::from_units(30);

/// A drawer unit.
///
/// Pricing: `base + 20 per drawer + 30 if wheeled`.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DrawerUnit {
    base: BaseItem,
    num_drawers: u32,
    has_wheels: bool,
}

impl DrawerUnit {
    /// Creates a drawer unit with the catalog defaults: three drawers, no
    /// wheels.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(DrawerUnit {
            base: BaseItem::new(name, material, color, base_price)?,
            num_drawers: 3,
            has_wheels: false,
        })
    }

    pub fn with_drawers(mut self, num_drawers: u32) -> Self {
        self.num_drawers = num_drawers;
        self
    }

    pub fn with_wheels(mut self, has_wheels: bool) -> Self {
        self.has_wheels = has_wheels;
        self
    }

    pub fn num_drawers(&self) -> u32 {
        self.num_drawers
    }

    pub fn set_num_drawers(&mut self, num_drawers: u32) {
        self.num_drawers = num_drawers;
    }

    pub fn has_wheels(&self) -> bool {
        self.has_wheels
    }

    pub fn set_has_wheels(&mut self, has_wheels: bool) {
        self.has_wheels = has_wheels;
    }
}

impl Furniture for DrawerUnit {
    fn base(&self) -> &BaseItem {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }

    fn compute_price(&self) -> Money {
        let mut price = self.base.base_price() + PER_DRAWER_SURCHARGE * self.num_drawers;
        if self.has_wheels {
            price += WHEELS_SURCHARGE;
        }
        price
    }

    fn describe(&self) -> String {
        let wheels = if self.has_wheels { "yes" } else { "no" };
        format!(
            "Drawer unit '{}' ({}, {}). Drawers: {}, wheels: {}. Price: {}",
            self.base.name(),
            self.base.material(),
            self.base.color(),
            self.num_drawers,
            wheels,
            self.compute_price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(base_price: i64) -> DrawerUnit {
        DrawerUnit::new("Drawer Unit", "Madera", "Natural", Money::from_units(base_price))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let u = unit(200);
        assert_eq!(u.num_drawers(), 3);
        assert!(!u.has_wheels());
    }

    #[test]
    fn test_fully_fitted_exact_price() {
        // 200 + 4·20 + 30 = 310
        let u = unit(200).with_drawers(4).with_wheels(true);
        assert_eq!(u.compute_price(), Money::from_units(310));
    }

    #[test]
    fn test_increment_table() {
        let cases = [(3u32, false, 60), (5, false, 100), (3, true, 90), (6, true, 150)];
        for (drawers, wheels, increment) in cases {
            let u = unit(200).with_drawers(drawers).with_wheels(wheels);
            assert_eq!(u.compute_price(), Money::from_units(200 + increment));
        }
    }

    #[test]
    fn test_drawer_increment() {
        let three = unit(200);
        let five = unit(200).with_drawers(5);
        assert_eq!(
            five.compute_price() - three.compute_price(),
            Money::from_units(40)
        );
    }

    #[test]
    fn test_describe_contains_attributes() {
        let u = DrawerUnit::new("Cajonera", "Roble", "Oscuro", Money::from_units(200))
            .unwrap()
            .with_drawers(5)
            .with_wheels(true);
        let desc = u.describe();

        assert!(desc.contains("Cajonera"));
        assert!(desc.contains("Roble"));
        assert!(desc.contains("Oscuro"));
        assert!(desc.contains('5'));
        assert!(desc.contains("yes"));
        assert!(desc.contains('$'));
    }
}
