//! # mobilia-core: Pure Business Logic for the Mobilia Catalog
//!
//! This crate is the **heart** of the Mobilia furniture catalog. It contains
//! the whole domain model as pure, deterministic code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Mobilia Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │             Callers (storefront, admin tooling)               │  │
//! │  │   construct items ──► read prices ──► render descriptions     │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               ★ mobilia-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌────────────────┐  │  │
//! │  │  │  money   │ │   item   │ │ category  │ │    catalog     │  │  │
//! │  │  │  Money   │ │ BaseItem │ │  Seating  │ │ Chair, Table,  │  │  │
//! │  │  │          │ │Furniture │ │  Surface  │ │ Sofa, Bed, ... │  │  │
//! │  │  └──────────┘ └──────────┘ │  Storage  │ └────────────────┘  │  │
//! │  │                            └───────────┘  ┌────────────────┐  │  │
//! │  │                                           │  dining_set    │  │  │
//! │  │  NO I/O • NO DATABASE • PURE FUNCTIONS    │  DiningSet     │  │  │
//! │  │                                           └────────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point drift)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//! - [`item`] - The common item state and the polymorphic `Furniture` trait
//! - [`category`] - Seating / surface / storage components and their factors
//! - [`catalog`] - The nine concrete furniture types
//! - [`dining_set`] - Table-and-chairs composition with bulk discount
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every price is deterministic in the item's state
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: monetary values are cents (i64); multipliers round
//!    to the nearest cent at the single point they are applied
//! 4. **Explicit Errors**: invalid field values are typed errors, never
//!    panics, and a rejected mutation keeps the prior value
//!
//! ## Example Usage
//!
//! ```rust
//! use mobilia_core::{Chair, Furniture, Money, Upholstery};
//!
//! let chair = Chair::new("Office Chair", "Metal", "Negro", Money::from_units(150))?
//!     .with_upholstery(Upholstery::Leather)
//!     .with_height_adjustable(true)
//!     .with_wheels(true);
//!
//! // comfort factor 1.85 → $277.50
//! assert_eq!(chair.compute_price(), Money::from_cents(27750));
//! assert!(chair.describe().contains("Office Chair"));
//! # Ok::<(), mobilia_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod category;
pub mod dining_set;
pub mod error;
pub mod item;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mobilia_core::Chair` instead of
// `use mobilia_core::catalog::Chair`

pub use catalog::{
    Armchair, Bed, BedSize, BedSpec, Chair, Desk, DrawerUnit, Mechanism, Sofa, SofaBed,
    SofaBedMode, Table, TableShape, Wardrobe,
};
pub use category::{Seating, Storage, Surface, Upholstery};
pub use dining_set::{DiningSet, DiningSetSummary};
pub use error::{ValidationError, ValidationResult};
pub use item::{BaseItem, Furniture};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Chair count at which a dining set qualifies for the bulk discount.
pub const BULK_DISCOUNT_MIN_CHAIRS: usize = 4;

/// Bulk discount in basis points (500 = 5%), applied to the whole set
/// total, not just the chair portion.
pub const BULK_DISCOUNT_BPS: u32 = 500;
