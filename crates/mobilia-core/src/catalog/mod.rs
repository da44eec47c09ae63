//! # Concrete Catalog Types
//!
//! The nine purchasable furniture types. Each embeds [`crate::BaseItem`]
//! (and a category component where one applies), implements
//! [`crate::Furniture`], and owns its surcharge table.
//!
//! Constructors take the four common fields and apply the catalog defaults;
//! the remaining attributes are set with chainable `with_*` builders or
//! validated setters.

mod armchair;
mod bed;
mod chair;
mod desk;
mod drawer_unit;
mod sofa;
mod sofa_bed;
mod table;
mod wardrobe;

pub use armchair::Armchair;
pub use bed::{Bed, BedSize, BedSpec};
pub use chair::Chair;
pub use desk::Desk;
pub use drawer_unit::DrawerUnit;
pub use sofa::Sofa;
pub use sofa_bed::{Mechanism, SofaBed, SofaBedMode};
pub use table::{Table, TableShape};
pub use wardrobe::Wardrobe;
