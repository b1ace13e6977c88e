//! Validated rectangle dimensions.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Which rectangle dimension a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => f.write_str("width"),
            Dimension::Height => f.write_str("height"),
        }
    }
}

/// Width and height of the rectangle being rounded.
///
/// Both values are finite and strictly positive; the only way to build one is
/// through [`RectSpec::new`], so a degenerate rectangle never reaches the
/// allocator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectSpec {
    width: f64,
    height: f64,
}

impl RectSpec {
    /// Validate and wrap a width/height pair.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] if either value is `<= 0`,
    /// NaN or infinite. Width is checked first.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        check_dimension(Dimension::Width, width)?;
        check_dimension(Dimension::Height, height)?;
        Ok(Self { width, height })
    }

    /// Like [`RectSpec::new`], with `None` meaning "not measured yet".
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] for a missing or invalid value.
    pub fn from_measured(width: Option<f64>, height: Option<f64>) -> Result<Self, GeometryError> {
        let width = width.ok_or(GeometryError::missing_dimension(Dimension::Width))?;
        let height = height.ok_or(GeometryError::missing_dimension(Dimension::Height))?;
        Self::new(width, height)
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(self) -> f64 {
        self.width
    }

    /// Vertical extent.
    #[inline]
    pub fn height(self) -> f64 {
        self.height
    }
}

fn check_dimension(dimension: Dimension, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid_dimension(dimension, value))
    }
}
