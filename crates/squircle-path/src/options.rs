//! Caller-facing options and the one-shot [`generate_path`] entry point.

use serde::{Deserialize, Serialize};

use crate::budget::allocate;
use crate::corner::Corners;
use crate::error::GeometryError;
use crate::params::CornerPathParams;
use crate::path::{SquirclePath, assemble};
use crate::radii::{CornerRadii, RadiusOverrides};
use crate::rect::RectSpec;
use crate::smoothing::Smoothing;

/// Everything needed to draw one smoothed-corner rectangle.
///
/// Width and height are optional so a host can build options before layout
/// has measured the element; generation then fails with an unmeasured
/// [`GeometryError::InvalidDimension`] instead of guessing a size.
///
/// Radius fields are flattened, so a JSON or YAML document reads:
///
/// ```
/// use squircle_path::SquircleOptions;
///
/// let options: SquircleOptions = serde_json::from_str(
///     r#"{ "width": 120, "height": 80, "corner_radius": 16, "corner_smoothing": 0.8 }"#,
/// )?;
/// assert!(options.to_path()?.to_string().starts_with("M 91.2 0 c"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquircleOptions {
    /// Rectangle width, or `None` if not measured yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Rectangle height, or `None` if not measured yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Base, edge and corner radius overrides.
    #[serde(flatten)]
    pub radii: RadiusOverrides,
    /// Corner smoothing in `[0, 1]`.
    pub corner_smoothing: Smoothing,
    /// Keep smoothing exact when a corner is short of room.
    pub preserve_smoothing: bool,
}

impl SquircleOptions {
    /// Options for a measured rectangle with sharp corners and no smoothing.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Set the base radius.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.radii.base = Some(radius);
        self
    }

    /// Override the top-left radius.
    #[must_use]
    pub fn with_top_left_radius(mut self, radius: f64) -> Self {
        self.radii.top_left = Some(radius);
        self
    }

    /// Override the top-right radius.
    #[must_use]
    pub fn with_top_right_radius(mut self, radius: f64) -> Self {
        self.radii.top_right = Some(radius);
        self
    }

    /// Override the bottom-right radius.
    #[must_use]
    pub fn with_bottom_right_radius(mut self, radius: f64) -> Self {
        self.radii.bottom_right = Some(radius);
        self
    }

    /// Override the bottom-left radius.
    #[must_use]
    pub fn with_bottom_left_radius(mut self, radius: f64) -> Self {
        self.radii.bottom_left = Some(radius);
        self
    }

    /// Set the smoothing factor; out-of-range values are clamped.
    #[must_use]
    pub fn with_corner_smoothing(mut self, smoothing: impl Into<Smoothing>) -> Self {
        self.corner_smoothing = smoothing.into();
        self
    }

    /// Choose the budget policy.
    #[must_use]
    pub fn with_preserve_smoothing(mut self, preserve: bool) -> Self {
        self.preserve_smoothing = preserve;
        self
    }

    /// The validated rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] if a dimension is missing or invalid.
    pub fn rect(&self) -> Result<RectSpec, GeometryError> {
        RectSpec::from_measured(self.width, self.height)
    }

    /// Radii after applying the override priority.
    pub fn resolved_radii(&self) -> CornerRadii {
        self.radii.resolve()
    }

    /// Curve parameters for all four corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] for invalid dimensions or radii.
    pub fn corner_params(&self) -> Result<Corners<CornerPathParams>, GeometryError> {
        let rect = self.rect()?;
        self.corner_params_in(rect)
    }

    fn corner_params_in(&self, rect: RectSpec) -> Result<Corners<CornerPathParams>, GeometryError> {
        let budgets = allocate(
            rect,
            &self.resolved_radii(),
            self.corner_smoothing,
            self.preserve_smoothing,
        )?;

        Ok(budgets.map(|budget| {
            let params = budget.path_params();
            tracing::trace!(
                corner = %budget.corner,
                radius = params.corner_radius,
                smoothing = params.smoothing,
                p = params.p,
                "corner parameters"
            );
            params
        }))
    }

    /// Build the outline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] for invalid dimensions or radii.
    pub fn to_path(&self) -> Result<SquirclePath, GeometryError> {
        let rect = self.rect()?;
        let params = self.corner_params_in(rect)?;
        Ok(assemble(rect, &params))
    }
}

/// Generate SVG path data for a smoothed-corner rectangle.
///
/// Smoothing is clamped into `[0, 1]`; `NaN` counts as `0`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidDimension`] if `width` or `height` is not a
/// positive finite number, and [`GeometryError::InvalidRadius`] if a radius is
/// negative or non-finite.
///
/// # Example
///
/// ```
/// use squircle_path::generate_path;
///
/// let path = generate_path(100.0, 100.0, 0.0, 0.0, 0.0, 0.0, 0.6, false)?;
/// assert_eq!(path, "M 100 0 L 100 100 L 0 100 L 0 0 Z");
/// # Ok::<(), squircle_path::GeometryError>(())
/// ```
#[expect(
    clippy::too_many_arguments,
    reason = "mirrors the flat signature hosts bind against"
)]
pub fn generate_path(
    width: f64,
    height: f64,
    top_left: f64,
    top_right: f64,
    bottom_left: f64,
    bottom_right: f64,
    smoothing: f64,
    preserve_smoothing: bool,
) -> Result<String, GeometryError> {
    let options = SquircleOptions {
        width: Some(width),
        height: Some(height),
        radii: CornerRadii::new(top_left, top_right, bottom_right, bottom_left).into(),
        corner_smoothing: Smoothing::new(smoothing),
        preserve_smoothing,
    };
    Ok(options.to_path()?.to_svg_path_data())
}
