//! Surface category: dimensions, area, and the size factor they produce.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::validation::validate_dimension;

/// Area (in square centimeters) at which the size factor reaches its cap.
const AREA_CAP_DIVISOR: f64 = 20_000.0;

/// Maximum contribution of area to the size factor.
const SIZE_FACTOR_CAP: f64 = 0.5;

/// Shared state of flat work/dining surfaces.
///
/// Dimensions are linear units (centimeters in the catalog data); each must
/// be strictly positive.
///
/// ```compile_fail
/// use mobilia_core::Surface;
///
/// // Category components have no public constructor.
/// let surface = Surface::new(120.0, 80.0, 75.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Surface {
    length: f64,
    width: f64,
    height: f64,
}

impl Surface {
    pub(crate) fn new(length: f64, width: f64, height: f64) -> ValidationResult<Self> {
        validate_dimension("length", length)?;
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        Ok(Surface {
            length,
            width,
            height,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) -> ValidationResult<()> {
        validate_dimension("length", length)?;
        self.length = length;
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) -> ValidationResult<()> {
        validate_dimension("width", width)?;
        self.width = width;
        Ok(())
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) -> ValidationResult<()> {
        validate_dimension("height", height)?;
        self.height = height;
        Ok(())
    }

    /// Top area: length × width.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// The size multiplier applied to a surface's base price.
    ///
    /// `1.0 + min(area / 20000, 0.5)`: grows monotonically with area, with
    /// the area contribution capped at `0.5`. Always `>= 1.0`.
    pub fn size_factor(&self) -> f64 {
        1.0 + (self.area() / AREA_CAP_DIVISOR).min(SIZE_FACTOR_CAP)
    }

    /// One-line attribute summary used by concrete `describe()` outputs.
    pub fn info(&self) -> String {
        format!(
            "dimensions: {} x {} x {} (area {})",
            self.length,
            self.width,
            self.height,
            self.area()
        )
    }
}
