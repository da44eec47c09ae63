//! # Category Components
//!
//! The middle layer of the hierarchy: seating, surface, and storage.
//!
//! Each component bundles the attributes its category shares, enforces the
//! same validate-and-reject-on-invalid discipline as [`crate::BaseItem`],
//! and contributes one pure pricing factor plus one `info()` string used by
//! the concrete `describe()` implementations.
//!
//! Like `BaseItem`, none of these can be constructed from outside the
//! crate; they exist only embedded inside concrete catalog types.

mod seating;
mod storage;
mod surface;

pub use seating::{Seating, Upholstery};
pub use storage::Storage;
pub use surface::Surface;
