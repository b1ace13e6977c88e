//! Error types for path generation.

use crate::corner::Corner;
use crate::rect::Dimension;

/// Error type for squircle path generation.
///
/// Both variants are local, synchronous input failures. Nothing about them is
/// transient, so callers should not retry; a host that cannot produce a path
/// should render its content unclipped instead.
///
/// Smoothing has no variant here: it is clamped into `[0, 1]`, never rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Width or height is missing, non-finite, or not strictly positive.
    ///
    /// `value` is `None` when the dimension has not been measured yet.
    #[error("{dimension} must be a positive finite number, got {}", display_value(.value))]
    InvalidDimension {
        /// Which dimension was rejected.
        dimension: Dimension,
        /// The rejected value, or `None` if it was never supplied.
        value: Option<f64>,
    },

    /// A resolved corner radius is negative or non-finite.
    #[error("{corner} radius must be a non-negative finite number, got {value}")]
    InvalidRadius {
        /// The corner whose radius was rejected.
        corner: Corner,
        /// The rejected radius.
        value: f64,
    },
}

impl GeometryError {
    /// Create an invalid dimension error for a supplied value.
    pub fn invalid_dimension(dimension: Dimension, value: f64) -> Self {
        GeometryError::InvalidDimension {
            dimension,
            value: Some(value),
        }
    }

    /// Create an invalid dimension error for a dimension that was never supplied.
    pub fn missing_dimension(dimension: Dimension) -> Self {
        GeometryError::InvalidDimension {
            dimension,
            value: None,
        }
    }

    /// Create an invalid radius error.
    pub fn invalid_radius(corner: Corner, value: f64) -> Self {
        GeometryError::InvalidRadius { corner, value }
    }

    /// Returns `true` if the error was caused by a dimension that has not been measured yet.
    pub fn is_unmeasured(&self) -> bool {
        matches!(self, GeometryError::InvalidDimension { value: None, .. })
    }
}

fn display_value(value: &Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "nothing (not yet measured)".to_string(),
    }
}
