//! Sofa bed: one item satisfying both the seating and the sleeping
//! contracts, with a conversion mechanism and a two-state mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::bed::{BedSize, BedSpec};
use crate::category::{Seating, Upholstery};
use crate::error::{ValidationError, ValidationResult};
use crate::item::{BaseItem, Furniture};
use crate::money::Money;

// =============================================================================
// Conversion Mechanism
// =============================================================================

/// How the sofa converts into a bed. Surcharges increase strictly with the
/// mechanism's sophistication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Mechanism {
    /// Manual fold-out: no surcharge
    Plegable,
    /// Hydraulic assist
    Hidraulico,
    /// Motorized
    Electrico,
}

impl Mechanism {
    /// All accepted mechanisms, in wire form.
    pub const ALL: [&'static str; 3] = ["plegable", "hidraulico", "electrico"];

    /// Fixed surcharge for this mechanism.
    pub fn surcharge(&self) -> Money {
        match self {
            Mechanism::Plegable => Money::zero(),
            Mechanism::Hidraulico => Money::from_units(150),
            Mechanism::Electrico => Money::from_units(300),
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mechanism::Plegable => "plegable",
            Mechanism::Hidraulico => "hidraulico",
            Mechanism::Electrico => "electrico",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Mechanism {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plegable" => Ok(Mechanism::Plegable),
            "hidraulico" => Ok(Mechanism::Hidraulico),
            "electrico" => Ok(Mechanism::Electrico),
            other => Err(ValidationError::NotAllowed {
                field: "mechanism".to_string(),
                value: other.to_string(),
                allowed: Self::ALL.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Mode
// =============================================================================

/// The sofa bed's current configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SofaBedMode {
    Sofa,
    Cama,
}

impl SofaBedMode {
    fn flipped(self) -> Self {
        match self {
            SofaBedMode::Sofa => SofaBedMode::Cama,
            SofaBedMode::Cama => SofaBedMode::Sofa,
        }
    }
}

impl fmt::Display for SofaBedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SofaBedMode::Sofa => "sofa",
            SofaBedMode::Cama => "cama",
        };
        write!(f, "{s}")
    }
}

// =============================================================================
// Sofa Bed
// =============================================================================

/// A sofa bed.
///
/// Holds a seating capability and a sleeping capability side by side and
/// prices them in a fixed combination order: seating price first
/// (`base × comfort factor`), then the sleeping surcharges (size bracket,
/// mattress), then the mechanism surcharge. The current mode does not
/// enter the price.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SofaBed {
    base: BaseItem,
    seating: Seating,
    bed: BedSpec,
    mechanism: Mechanism,
    mode: SofaBedMode,
}

impl SofaBed {
    /// Creates a sofa bed with the catalog defaults: seats three, backrest,
    /// fabric upholstery, matrimonial bed with mattress, fold-out
    /// mechanism, starting in sofa mode.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(SofaBed {
            base: BaseItem::new(name, material, color, base_price)?,
            seating: Seating::new(3, true, Some(Upholstery::Fabric))?,
            bed: BedSpec::new(BedSize::Matrimonial, true),
            mechanism: Mechanism::Plegable,
            mode: SofaBedMode::Sofa,
        })
    }

    pub fn with_capacity(mut self, capacity: u32) -> ValidationResult<Self> {
        self.seating.set_capacity(capacity)?;
        Ok(self)
    }

    pub fn with_upholstery(mut self, upholstery: Upholstery) -> Self {
        self.seating.set_upholstery(Some(upholstery));
        self
    }

    pub fn with_bed_size(mut self, size: BedSize) -> Self {
        self.bed.set_size(size);
        self
    }

    pub fn with_mattress(mut self, includes_mattress: bool) -> Self {
        self.bed.set_includes_mattress(includes_mattress);
        self
    }

    pub fn with_mechanism(mut self, mechanism: Mechanism) -> Self {
        self.mechanism = mechanism;
        self
    }

    /// The seating capability (capacity, backrest, upholstery).
    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn seating_mut(&mut self) -> &mut Seating {
        &mut self.seating
    }

    /// The sleeping capability (size bracket, mattress flag).
    pub fn bed_size(&self) -> BedSize {
        self.bed.size()
    }

    pub fn set_bed_size(&mut self, size: BedSize) {
        self.bed.set_size(size);
    }

    pub fn includes_mattress(&self) -> bool {
        self.bed.includes_mattress()
    }

    pub fn set_includes_mattress(&mut self, includes_mattress: bool) {
        self.bed.set_includes_mattress(includes_mattress);
    }

    pub fn mechanism(&self) -> Mechanism {
        self.mechanism
    }

    pub fn set_mechanism(&mut self, mechanism: Mechanism) {
        self.mechanism = mechanism;
    }

    /// Current configuration; starts in sofa mode.
    pub fn mode(&self) -> SofaBedMode {
        self.mode
    }

    /// Converts between sofa and bed configuration.
    ///
    /// Each call flips the mode and returns a confirmation naming the new
    /// one; two calls return the item to its initial state.
    pub fn transform(&mut self) -> String {
        self.mode = self.mode.flipped();
        format!(
            "'{}' converted to {} mode ({})",
            self.base.name(),
            self.mode,
            self.mechanism
        )
    }
}

impl Furniture for SofaBed {
    fn base(&self) -> &BaseItem {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }

    fn compute_price(&self) -> Money {
        // Combination order is part of the contract: seating price, then
        // sleeping surcharges, then mechanism.
        let seating_price = self
            .base
            .base_price()
            .apply_factor(self.seating.comfort_factor());
        seating_price + self.bed.surcharge_total() + self.mechanism.surcharge()
    }

    fn describe(&self) -> String {
        let mattress = if self.bed.includes_mattress() {
            "mattress included"
        } else {
            "no mattress"
        };
        format!(
            "Sofa bed '{}' ({}, {}). {}. Bed size: {}, {}. Mechanism: {}. Mode: {}. Price: {}",
            self.base.name(),
            self.base.material(),
            self.base.color(),
            self.seating.info(),
            self.bed.size(),
            mattress,
            self.mechanism,
            self.mode,
            self.compute_price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofa_bed(base_price: i64) -> SofaBed {
        SofaBed::new("Sofa Bed", "Metal", "Azul", Money::from_units(base_price)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let sb = sofa_bed(600);
        assert_eq!(sb.seating().capacity(), 3);
        assert!(sb.seating().has_backrest());
        assert_eq!(sb.seating().upholstery(), Some(&Upholstery::Fabric));
        assert_eq!(sb.bed_size(), BedSize::Matrimonial);
        assert!(sb.includes_mattress());
        assert_eq!(sb.mechanism(), Mechanism::Plegable);
        assert_eq!(sb.mode(), SofaBedMode::Sofa);
    }

    #[test]
    fn test_default_exact_price() {
        // comfort 1 + 0.1 + 0.15 + 0.05·2 = 1.35 → 810
        // + matrimonial 200 + mattress 300 + plegable 0 = $1310.00
        assert_eq!(sofa_bed(600).compute_price(), Money::from_units(1310));
    }

    #[test]
    fn test_bed_size_raises_price() {
        let matrimonial = sofa_bed(600).with_mattress(false);
        let queen = sofa_bed(600)
            .with_mattress(false)
            .with_bed_size(BedSize::Queen);
        let king = sofa_bed(600)
            .with_mattress(false)
            .with_bed_size(BedSize::King);

        assert!(queen.compute_price() > matrimonial.compute_price());
        assert!(king.compute_price() > queen.compute_price());
    }

    #[test]
    fn test_mattress_raises_price() {
        let without = sofa_bed(600).with_mattress(false);
        let with = sofa_bed(600);
        assert_eq!(
            with.compute_price() - without.compute_price(),
            Money::from_units(300)
        );
    }

    #[test]
    fn test_mechanism_ordering_is_strict() {
        let plegable = sofa_bed(600);
        let hidraulico = sofa_bed(600).with_mechanism(Mechanism::Hidraulico);
        let electrico = sofa_bed(600).with_mechanism(Mechanism::Electrico);

        assert!(hidraulico.compute_price() > plegable.compute_price());
        assert!(electrico.compute_price() > hidraulico.compute_price());
    }

    #[test]
    fn test_transform_two_cycle() {
        let mut sb = sofa_bed(600);
        assert_eq!(sb.mode(), SofaBedMode::Sofa);

        let msg = sb.transform();
        assert_eq!(sb.mode(), SofaBedMode::Cama);
        assert!(msg.contains("cama"));

        let msg = sb.transform();
        assert_eq!(sb.mode(), SofaBedMode::Sofa);
        assert!(msg.contains("sofa"));
    }

    #[test]
    fn test_price_is_mode_independent() {
        let mut sb = sofa_bed(700)
            .with_bed_size(BedSize::Queen)
            .with_mechanism(Mechanism::Hidraulico);
        let in_sofa_mode = sb.compute_price();
        sb.transform();
        assert_eq!(sb.compute_price(), in_sofa_mode);
    }

    #[test]
    fn test_price_combines_both_capabilities() {
        let sb = sofa_bed(600);
        assert!(sb.compute_price() > sb.base_price());
    }

    #[test]
    fn test_mechanism_parsing() {
        for wire in Mechanism::ALL {
            assert_eq!(wire.parse::<Mechanism>().unwrap().to_string(), wire);
        }

        let err = "magnetico".parse::<Mechanism>().unwrap_err();
        assert!(err.to_string().contains("mechanism"));
    }

    #[test]
    fn test_describe_contains_attributes() {
        let sb = SofaBed::new("SofaCama Versátil", "Metal", "Azul", Money::from_units(700))
            .unwrap()
            .with_bed_size(BedSize::Queen)
            .with_mechanism(Mechanism::Hidraulico);
        let desc = sb.describe();

        assert!(desc.contains("SofaCama Versátil"));
        assert!(desc.contains("Metal"));
        assert!(desc.contains("Azul"));
        assert!(desc.contains("tela"));
        assert!(desc.contains("queen"));
        assert!(desc.contains("hidraulico"));
        assert!(desc.contains("sofa"));
        assert!(desc.contains('$'));
    }
}
