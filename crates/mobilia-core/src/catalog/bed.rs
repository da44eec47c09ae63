//! Bed: a sleeping platform priced by size bracket and extras.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::item::{BaseItem, Furniture};
use crate::money::Money;

/// Surcharge for an included mattress.
pub(crate) const MATTRESS_SURCHARGE: Money = Money::from_units(300);

/// Surcharge for a headboard.
const HEADBOARD_SURCHARGE: Money = Money::from_units(100);

// =============================================================================
// Bed Size
// =============================================================================

/// The catalog's bed size brackets. Anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BedSize {
    Individual,
    Matrimonial,
    Queen,
    King,
}

impl BedSize {
    /// All accepted sizes, in wire form.
    pub const ALL: [&'static str; 4] = ["individual", "matrimonial", "queen", "king"];

    /// Fixed surcharge for this size bracket. Strictly increasing from
    /// individual to king.
    pub fn surcharge(&self) -> Money {
        match self {
            BedSize::Individual => Money::zero(),
            BedSize::Matrimonial => Money::from_units(200),
            BedSize::Queen => Money::from_units(400),
            BedSize::King => Money::from_units(600),
        }
    }
}

impl fmt::Display for BedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BedSize::Individual => "individual",
            BedSize::Matrimonial => "matrimonial",
            BedSize::Queen => "queen",
            BedSize::King => "king",
        };
        write!(f, "{s}")
    }
}

impl FromStr for BedSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Ok(BedSize::Individual),
            "matrimonial" => Ok(BedSize::Matrimonial),
            "queen" => Ok(BedSize::Queen),
            "king" => Ok(BedSize::King),
            other => Err(ValidationError::NotAllowed {
                field: "size".to_string(),
                value: other.to_string(),
                allowed: Self::ALL.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Bed Spec
// =============================================================================

/// The sleeping-capability value: size bracket plus mattress flag.
///
/// Shared by [`Bed`] and the sofa bed, which satisfies the bed contract
/// through an embedded `BedSpec`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct BedSpec {
    size: BedSize,
    includes_mattress: bool,
}

impl BedSpec {
    pub(crate) fn new(size: BedSize, includes_mattress: bool) -> Self {
        BedSpec {
            size,
            includes_mattress,
        }
    }

    pub fn size(&self) -> BedSize {
        self.size
    }

    pub fn set_size(&mut self, size: BedSize) {
        self.size = size;
    }

    pub fn includes_mattress(&self) -> bool {
        self.includes_mattress
    }

    pub fn set_includes_mattress(&mut self, includes_mattress: bool) {
        self.includes_mattress = includes_mattress;
    }

    /// Combined sleeping surcharge: size bracket plus mattress.
    pub fn surcharge_total(&self) -> Money {
        let mut total = self.size.surcharge();
        if self.includes_mattress {
            total += MATTRESS_SURCHARGE;
        }
        total
    }
}

// =============================================================================
// Bed
// =============================================================================

/// A bed.
///
/// Pricing: `base + size surcharge + 300 if mattress + 100 if headboard`.
/// Purely additive, so whole-unit base prices stay whole units.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Bed {
    base: BaseItem,
    spec: BedSpec,
    has_headboard: bool,
}

impl Bed {
    /// Creates a bed with the catalog defaults: individual size, no
    /// mattress, no headboard.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(Bed {
            base: BaseItem::new(name, material, color, base_price)?,
            spec: BedSpec::new(BedSize::Individual, false),
            has_headboard: false,
        })
    }

    pub fn with_size(mut self, size: BedSize) -> Self {
        self.spec.set_size(size);
        self
    }

    pub fn with_mattress(mut self, includes_mattress: bool) -> Self {
        self.spec.set_includes_mattress(includes_mattress);
        self
    }

    pub fn with_headboard(mut self, has_headboard: bool) -> Self {
        self.has_headboard = has_headboard;
        self
    }

    pub fn size(&self) -> BedSize {
        self.spec.size()
    }

    pub fn set_size(&mut self, size: BedSize) {
        self.spec.set_size(size);
    }

    pub fn includes_mattress(&self) -> bool {
        self.spec.includes_mattress()
    }

    pub fn set_includes_mattress(&mut self, includes_mattress: bool) {
        self.spec.set_includes_mattress(includes_mattress);
    }

    pub fn has_headboard(&self) -> bool {
        self.has_headboard
    }

    pub fn set_has_headboard(&mut self, has_headboard: bool) {
        self.has_headboard = has_headboard;
    }
}

impl Furniture for Bed {
    fn base(&self) -> &BaseItem {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }

    fn compute_price(&self) -> Money {
        let mut price = self.base.base_price() + self.spec.surcharge_total();
        if self.has_headboard {
            price += HEADBOARD_SURCHARGE;
        }
        price
    }

    fn describe(&self) -> String {
        let mattress = if self.spec.includes_mattress() {
            "mattress included"
        } else {
            "no mattress"
        };
        let headboard = if self.has_headboard {
            "with headboard"
        } else {
            "no headboard"
        };
        format!(
            "Bed '{}' ({}, {}). Size: {}, {}, {}. Price: {}",
            self.base.name(),
            self.base.material(),
            self.base.color(),
            self.spec.size(),
            mattress,
            headboard,
            self.compute_price()
        )
    }
}
