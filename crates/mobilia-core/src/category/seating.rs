//! Seating category: capacity, backrest, upholstery, and the comfort
//! factor they produce.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::validation::validate_capacity;

// =============================================================================
// Upholstery
// =============================================================================

/// Upholstery material of a seat.
///
/// Two materials carry a comfort premium; anything else is recognized but
/// priced neutrally. Catalog fields hold `Option<Upholstery>` so a bare
/// (unupholstered) seat is representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Upholstery {
    /// Fabric ("tela"): +0.15 comfort
    #[serde(rename = "tela")]
    Fabric,
    /// Leather ("cuero"): +0.25 comfort
    #[serde(rename = "cuero")]
    Leather,
    /// Any other covering: no comfort premium
    #[serde(rename = "other")]
    Other(String),
}

impl Upholstery {
    /// Comfort premium contributed by this covering.
    pub fn comfort_bonus(&self) -> f64 {
        match self {
            Upholstery::Fabric => 0.15,
            Upholstery::Leather => 0.25,
            Upholstery::Other(_) => 0.0,
        }
    }
}

impl fmt::Display for Upholstery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upholstery::Fabric => write!(f, "tela"),
            Upholstery::Leather => write!(f, "cuero"),
            Upholstery::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Parsing never fails: unknown coverings land in `Other`.
impl FromStr for Upholstery {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "tela" => Upholstery::Fabric,
            "cuero" => Upholstery::Leather,
            other => Upholstery::Other(other.to_string()),
        })
    }
}

// =============================================================================
// Seating Component
// =============================================================================

/// Shared state of every seat in the catalog (chairs, sofas, armchairs,
/// sofa beds).
///
/// ```compile_fail
/// use mobilia_core::Seating;
///
/// // Category components have no public constructor.
/// let seating = Seating::new(2, true, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Seating {
    capacity: u32,
    has_backrest: bool,
    upholstery: Option<Upholstery>,
}

impl Seating {
    pub(crate) fn new(
        capacity: u32,
        has_backrest: bool,
        upholstery: Option<Upholstery>,
    ) -> ValidationResult<Self> {
        validate_capacity(capacity)?;
        Ok(Seating {
            capacity,
            has_backrest,
            upholstery,
        })
    }

    /// Number of persons the seat holds. Always at least 1.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Sets the capacity. Rejects zero.
    pub fn set_capacity(&mut self, capacity: u32) -> ValidationResult<()> {
        validate_capacity(capacity)?;
        self.capacity = capacity;
        Ok(())
    }

    pub fn has_backrest(&self) -> bool {
        self.has_backrest
    }

    pub fn set_has_backrest(&mut self, has_backrest: bool) {
        self.has_backrest = has_backrest;
    }

    pub fn upholstery(&self) -> Option<&Upholstery> {
        self.upholstery.as_ref()
    }

    pub fn set_upholstery(&mut self, upholstery: Option<Upholstery>) {
        self.upholstery = upholstery;
    }

    /// The comfort multiplier applied to a seat's base price.
    ///
    /// `1.0`, plus `0.1` for a backrest, plus the upholstery premium, plus
    /// `0.05` per seat beyond the first. Always `>= 1.0`.
    pub fn comfort_factor(&self) -> f64 {
        let mut factor = 1.0;
        if self.has_backrest {
            factor += 0.1;
        }
        if let Some(upholstery) = &self.upholstery {
            factor += upholstery.comfort_bonus();
        }
        factor + 0.05 * (self.capacity - 1) as f64
    }

    /// One-line attribute summary used by concrete `describe()` outputs.
    pub fn info(&self) -> String {
        let backrest = if self.has_backrest {
            "with backrest"
        } else {
            "no backrest"
        };
        let upholstery = match &self.upholstery {
            Some(u) => u.to_string(),
            None => "none".to_string(),
        };
        format!(
            "capacity: {} person(s), {}, upholstery: {}",
            self.capacity, backrest, upholstery
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
