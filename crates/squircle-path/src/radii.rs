//! Per-corner radii and the override resolver that produces them.

use serde::{Deserialize, Serialize};

use crate::corner::{Corner, Side};
use crate::error::GeometryError;

/// Resolved radius for each corner.
///
/// A radius of `0` denotes a sharp corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    /// Radius of the top-left corner.
    pub top_left: f64,
    /// Radius of the top-right corner.
    pub top_right: f64,
    /// Radius of the bottom-right corner.
    pub bottom_right: f64,
    /// Radius of the bottom-left corner.
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Radii in clockwise order starting at top-left.
    #[inline]
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// The same radius on all four corners.
    #[inline]
    pub const fn all(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Sharp corners everywhere.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Radius of `corner`.
    #[inline]
    pub fn get(&self, corner: Corner) -> f64 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// Replace the radius of `corner`.
    #[inline]
    pub fn set(&mut self, corner: Corner, radius: f64) {
        match corner {
            Corner::TopLeft => self.top_left = radius,
            Corner::TopRight => self.top_right = radius,
            Corner::BottomRight => self.bottom_right = radius,
            Corner::BottomLeft => self.bottom_left = radius,
        }
    }

    /// Returns `true` if all four radii are equal.
    pub fn is_uniform(&self) -> bool {
        let first = self.top_left.to_bits();
        Corner::ALL
            .into_iter()
            .all(|corner| self.get(corner).to_bits() == first)
    }

    /// Check that every radius is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] for the first offending corner
    /// in [`Corner::ALL`] order.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for corner in Corner::ALL {
            let radius = self.get(corner);
            if !radius.is_finite() || radius < 0.0 {
                return Err(GeometryError::invalid_radius(corner, radius));
            }
        }
        Ok(())
    }
}

/// Optional radius overrides layered over a base radius.
///
/// Each corner resolves to the first value present in:
///
/// 1. its own corner field (`top_left`, ...),
/// 2. its top/bottom edge field,
/// 3. its left/right edge field,
/// 4. `base` (also accepted as `corner_radius` when deserializing),
/// 5. `0`.
///
/// # Example
///
/// ```
/// use squircle_path::{Corner, RadiusOverrides};
///
/// let overrides = RadiusOverrides {
///     base: Some(12.0),
///     top: Some(20.0),
///     bottom_left: Some(0.0),
///     ..RadiusOverrides::default()
/// };
/// let radii = overrides.resolve();
/// assert_eq!(radii.get(Corner::TopLeft), 20.0);
/// assert_eq!(radii.get(Corner::BottomRight), 12.0);
/// assert_eq!(radii.get(Corner::BottomLeft), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusOverrides {
    /// Radius used by every corner that has no more specific value.
    #[serde(alias = "corner_radius", skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    /// Applies to top-left and top-right.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// Applies to top-right and bottom-right.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    /// Applies to bottom-right and bottom-left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    /// Applies to top-left and bottom-left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Top-left corner only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left: Option<f64>,
    /// Top-right corner only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right: Option<f64>,
    /// Bottom-right corner only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<f64>,
    /// Bottom-left corner only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<f64>,
}

impl RadiusOverrides {
    /// Overrides with only a base radius.
    pub fn uniform(radius: f64) -> Self {
        Self {
            base: Some(radius),
            ..Self::default()
        }
    }

    /// The corner-specific override for `corner`, if any.
    pub fn corner(&self, corner: Corner) -> Option<f64> {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// The edge override for `side`, if any.
    pub fn side(&self, side: Side) -> Option<f64> {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Resolve the radius of a single corner.
    pub fn resolve_corner(&self, corner: Corner) -> f64 {
        let (vertical, horizontal) = match corner {
            Corner::TopLeft => (Side::Top, Side::Left),
            Corner::TopRight => (Side::Top, Side::Right),
            Corner::BottomRight => (Side::Bottom, Side::Right),
            Corner::BottomLeft => (Side::Bottom, Side::Left),
        };

        self.corner(corner)
            .or(self.side(vertical))
            .or(self.side(horizontal))
            .or(self.base)
            .unwrap_or(0.0)
    }

    /// Resolve all four corners.
    pub fn resolve(&self) -> CornerRadii {
        CornerRadii::new(
            self.resolve_corner(Corner::TopLeft),
            self.resolve_corner(Corner::TopRight),
            self.resolve_corner(Corner::BottomRight),
            self.resolve_corner(Corner::BottomLeft),
        )
    }
}

impl From<CornerRadii> for RadiusOverrides {
    fn from(radii: CornerRadii) -> Self {
        Self {
            top_left: Some(radii.top_left),
            top_right: Some(radii.top_right),
            bottom_right: Some(radii.bottom_right),
            bottom_left: Some(radii.bottom_left),
            ..Self::default()
        }
    }
}
