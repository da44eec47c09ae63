//! Wardrobe: door/drawer storage priced per fitting.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::item::{BaseItem, Furniture};
use crate::money::Money;

const PER_DOOR_SURCHARGE: Money = Money::from_units(50);
const PER_DRAWER_SURCHARGE: Money = Money::from_units(30);
const MIRRORS_SURCHARGE: Money = Money::from_units(100);

/// A wardrobe.
///
/// Pricing: `base + 50 per door + 30 per drawer + 100 if mirrored`.
/// Purely additive whole-unit surcharges.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Wardrobe {
    base: BaseItem,
    num_doors: u32,
    num_drawers: u32,
    has_mirrors: bool,
}

impl Wardrobe {
    /// Creates a wardrobe with the catalog defaults: two doors, no
    /// drawers, no mirrors.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(Wardrobe {
            base: BaseItem::new(name, material, color, base_price)?,
            num_doors: 2,
            num_drawers: 0,
            has_mirrors: false,
        })
    }

    pub fn with_doors(mut self, num_doors: u32) -> Self {
        self.num_doors = num_doors;
        self
    }

    pub fn with_drawers(mut self, num_drawers: u32) -> Self {
        self.num_drawers = num_drawers;
        self
    }

    pub fn with_mirrors(mut self, has_mirrors: bool) -> Self {
        self.has_mirrors = has_mirrors;
        self
    }

    pub fn num_doors(&self) -> u32 {
        self.num_doors
    }

    pub fn set_num_doors(&mut self, num_doors: u32) {
        self.num_doors = num_doors;
    }

    pub fn num_drawers(&self) -> u32 {
        self.num_drawers
    }

    pub fn set_num_drawers(&mut self, num_drawers: u32) {
        self.num_drawers = num_drawers;
    }

    pub fn has_mirrors(&self) -> bool {
        self.has_mirrors
    }

    pub fn set_has_mirrors(&mut self, has_mirrors: bool) {
        self.has_mirrors = has_mirrors;
    }
}

impl Furniture for Wardrobe {
    fn base(&self) -> &BaseItem {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }

    fn compute_price(&self) -> Money {
        let mut price = self.base.base_price()
            + PER_DOOR_SURCHARGE * self.num_doors
            + PER_DRAWER_SURCHARGE * self.num_drawers;
        if self.has_mirrors {
            price += MIRRORS_SURCHARGE;
        }
        price
    }

    fn describe(&self) -> String {
        let mirrors = if self.has_mirrors { "yes" } else { "no" };
        format!(
            "Wardrobe '{}' ({}, {}). Doors: {}, drawers: {}, mirrors: {}. Price: {}",
            self.base.name(),
            self.base.material(),
            self.base.color(),
            self.num_doors,
            self.num_drawers,
            mirrors,
            self.compute_price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wardrobe(base_price: i64) -> Wardrobe {
        Wardrobe::new("Wardrobe", "Madera", "Blanco", Money::from_units(base_price)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let w = wardrobe(500);
        assert_eq!(w.num_doors(), 2);
        assert_eq!(w.num_drawers(), 0);
        assert!(!w.has_mirrors());
    }

    #[test]
    fn test_fully_fitted_exact_price() {
        // 500 + 4·50 + 5·30 + 100 = 950
        let w = wardrobe(500)
            .with_doors(4)
            .with_drawers(5)
            .with_mirrors(true);
        assert_eq!(w.compute_price(), Money::from_units(950));
    }

    #[test]
    fn test_per_fitting_increments() {
        let two_doors = wardrobe(500);
        let four_doors = wardrobe(500).with_doors(4);
        assert_eq!(
            four_doors.compute_price() - two_doors.compute_price(),
            Money::from_units(100)
        );

        let three_drawers = wardrobe(500).with_drawers(3);
        assert_eq!(
            three_drawers.compute_price() - two_doors.compute_price(),
            Money::from_units(90)
        );

        let mirrored = wardrobe(500).with_mirrors(true);
        assert_eq!(
            mirrored.compute_price() - two_doors.compute_price(),
            MIRRORS_SURCHARGE
        );
    }

    #[test]
    fn test_increment_table() {
        let cases = [
            (2u32, 0u32, false, 100),
            (3, 0, false, 150),
            (2, 2, false, 160),
            (2, 0, true, 200),
            (3, 2, true, 310),
        ];
        for (doors, drawers, mirrors, increment) in cases {
            let w = wardrobe(500)
                .with_doors(doors)
                .with_drawers(drawers)
                .with_mirrors(mirrors);
            assert_eq!(w.compute_price(), Money::from_units(500 + increment));
        }
    }

    #[test]
    fn test_describe_contains_attributes() {
        let w = Wardrobe::new("Armario Triple", "Roble", "Natural", Money::from_units(600))
            .unwrap()
            .with_doors(3)
            .with_drawers(2)
            .with_mirrors(true);
        let desc = w.describe();

        assert!(desc.contains("Armario Triple"));
        assert!(desc.contains("Roble"));
        assert!(desc.contains("Natural"));
        assert!(desc.contains('3'));
        assert!(desc.contains('2'));
        assert!(desc.contains("yes"));
        assert!(desc.contains('$'));
    }
}
