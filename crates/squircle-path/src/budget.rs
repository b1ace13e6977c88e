//! Rounding and smoothing budget allocation.
//!
//! Two corners sharing an edge must not let their curves overlap. Each corner
//! is therefore given a budget: the longest stretch of its edges it may occupy.
//! On each adjacent edge a corner may claim half the edge, or the whole edge
//! when the other corner on it is sharp. The smaller of the two edge
//! allowances is the corner's budget, and its radius is capped at that budget.

use serde::Serialize;

use crate::corner::{Corner, Corners};
use crate::error::GeometryError;
use crate::params::CornerPathParams;
use crate::radii::CornerRadii;
use crate::rect::RectSpec;
use crate::smoothing::Smoothing;

/// Everything the parameter calculator needs for one corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerBudget {
    /// The corner this budget belongs to.
    pub corner: Corner,
    /// Radius after capping at the budget.
    pub radius: f64,
    /// Longest stretch of each adjacent edge the corner may occupy.
    pub budget: f64,
    /// Requested smoothing.
    pub smoothing: Smoothing,
    /// Whether smoothing is kept exact under budget pressure.
    pub preserve_smoothing: bool,
}

impl CornerBudget {
    /// Compute this corner's curve parameters.
    pub fn path_params(&self) -> CornerPathParams {
        CornerPathParams::compute(
            self.radius,
            self.smoothing,
            self.preserve_smoothing,
            self.budget,
        )
    }
}

/// Budgets for all four corners of one rectangle.
pub type CornerBudgets = Corners<CornerBudget>;

/// Allocate rounding budgets for every corner of `rect`.
///
/// Budgets are never negative. Of two corners sharing an edge, either both
/// are held to half of it or one of them is sharp, so their curves never
/// overlap.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidRadius`] if any radius is negative or
/// non-finite.
///
/// # Example
///
/// ```
/// use squircle_path::{allocate, CornerRadii, RectSpec, Smoothing};
///
/// let rect = RectSpec::new(120.0, 80.0)?;
/// let budgets = allocate(rect, &CornerRadii::all(16.0), Smoothing::new(0.8), false)?;
/// assert_eq!(budgets.top_left.budget, 40.0);
/// # Ok::<(), squircle_path::GeometryError>(())
/// ```
pub fn allocate(
    rect: RectSpec,
    radii: &CornerRadii,
    smoothing: Smoothing,
    preserve_smoothing: bool,
) -> Result<CornerBudgets, GeometryError> {
    radii.validate()?;

    Ok(Corners::from_fn(|corner| {
        let requested = radii.get(corner);
        let budget = corner
            .adjacents()
            .into_iter()
            .map(|(other, side)| edge_allowance(side.length(rect), radii.get(other)))
            .fold(f64::INFINITY, f64::min);

        if requested > budget {
            tracing::debug!(
                corner = %corner,
                requested,
                budget,
                "corner radius reduced to fit rounding budget"
            );
        }

        CornerBudget {
            corner,
            radius: requested.min(budget),
            budget,
            smoothing,
            preserve_smoothing,
        }
    }))
}

/// How much of an edge a corner may claim, given the radius of the other corner on it.
fn edge_allowance(side_length: f64, other_radius: f64) -> f64 {
    if other_radius > 0.0 {
        side_length / 2.0
    } else {
        side_length
    }
}
