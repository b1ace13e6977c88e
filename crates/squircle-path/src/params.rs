//! Per-corner curve parameters.
//!
//! Each rounded corner is drawn as a cubic Bézier run-in, a circular arc, and a
//! mirrored Bézier run-out. Travelling clockwise into the corner, the run-in
//! starts `p` before the corner vertex; its control points sit `a` and `a + b`
//! along the edge, and it ends `a + b + c` along the edge and `d` inward,
//! where the arc takes over. The arc spans `arc_section_length` on both axes.
//!
//! With smoothing `0` the Béziers collapse to nothing and the arc is a full
//! quarter circle; as smoothing grows the arc shrinks toward `0°` and the
//! Béziers take over the curvature.

use core::f64::consts::SQRT_2;

use serde::Serialize;

use crate::smoothing::Smoothing;

/// Curve parameters for a single corner.
///
/// Distances are in the same unit as the rectangle and are always measured
/// along the corner's two edges; the path assembler applies the per-corner
/// orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CornerPathParams {
    /// Distance from the run-in start to its first control point.
    pub a: f64,
    /// Distance between the run-in's two control points.
    pub b: f64,
    /// Along-edge distance from the second control point to the arc start.
    pub c: f64,
    /// Inward offset of the arc start from the edge.
    pub d: f64,
    /// Total length of the edge consumed by this corner.
    pub p: f64,
    /// Chord extent of the circular-arc section on each axis.
    pub arc_section_length: f64,
    /// The radius actually used; `0` for a sharp corner.
    pub corner_radius: f64,
    /// Smoothing after budget clamping.
    pub smoothing: f64,
    /// Angle swept by the circular-arc section, in degrees.
    pub arc_measure_degrees: f64,
}

impl CornerPathParams {
    /// Parameters of a sharp corner: no arc, no Béziers, zero footprint.
    pub const fn straight() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            p: 0.0,
            arc_section_length: 0.0,
            corner_radius: 0.0,
            smoothing: 0.0,
            arc_measure_degrees: 0.0,
        }
    }

    /// Compute the parameters of one corner.
    ///
    /// `budget` is the longest stretch of each adjacent edge this corner may
    /// occupy (see [`crate::budget::allocate`]). A `radius` larger than the
    /// budget is first reduced to it.
    ///
    /// When `preserve_smoothing` is `false`, smoothing is lowered until the
    /// corner fits its budget and `p` follows the lowered smoothing. When it is
    /// `true`, smoothing is kept and the run-in control points are pulled in
    /// instead, shrinking `b` before `a` so the curve stays free of cusps, and
    /// `p` is capped at `budget`.
    ///
    /// A `radius` of `0` (or below) yields [`CornerPathParams::straight`].
    ///
    /// # Example
    ///
    /// ```
    /// use squircle_path::{CornerPathParams, Smoothing};
    ///
    /// let params = CornerPathParams::compute(16.0, Smoothing::new(0.8), false, 40.0);
    /// assert!((params.p - 28.8).abs() < 1e-9);
    /// assert!((params.smoothing - 0.8).abs() < 1e-12);
    /// ```
    pub fn compute(radius: f64, smoothing: Smoothing, preserve_smoothing: bool, budget: f64) -> Self {
        let radius = radius.min(budget);
        if radius <= 0.0 {
            return Self::straight();
        }

        let requested = smoothing.value();
        let mut smoothing = requested;
        let mut p = (1.0 + smoothing) * radius;

        if !preserve_smoothing {
            let max_smoothing = budget / radius - 1.0;
            smoothing = smoothing.min(max_smoothing).max(0.0);
            p = (1.0 + smoothing) * radius;
            if smoothing < requested {
                tracing::trace!(
                    radius,
                    budget,
                    requested,
                    effective = smoothing,
                    "corner smoothing clamped to fit budget"
                );
            }
        }

        let arc_measure_degrees = 90.0 * (1.0 - smoothing);
        let arc_section_length = (arc_measure_degrees / 2.0).to_radians().sin() * radius * SQRT_2;

        let angle_alpha = (90.0 - arc_measure_degrees) / 2.0;
        let p3_to_p4_distance = radius * (angle_alpha / 2.0).to_radians().tan();

        let angle_beta = (45.0 * smoothing).to_radians();
        let c = p3_to_p4_distance * angle_beta.cos();
        let d = c * angle_beta.tan();

        let mut b = (p - arc_section_length - c - d) / 3.0;
        let mut a = 2.0 * b;

        if preserve_smoothing && p > budget {
            let p1_to_p3_max_distance = budget - d - arc_section_length - c;
            let min_a = p1_to_p3_max_distance / 6.0;
            let max_b = p1_to_p3_max_distance - min_a;

            b = b.min(max_b);
            a = p1_to_p3_max_distance - b;
            p = p.min(budget);
            tracing::trace!(radius, budget, a, b, "control points shrunk to preserve smoothing");
        }

        Self {
            a,
            b,
            c,
            d,
            p,
            arc_section_length,
            corner_radius: radius,
            smoothing,
            arc_measure_degrees,
        }
    }

    /// Returns `true` for a sharp corner, which is drawn as a plain line.
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.corner_radius <= 0.0
    }

    /// Along-edge distance covered by each of the two Bézier segments.
    #[inline]
    pub fn bezier_extent(&self) -> f64 {
        self.a + self.b + self.c
    }
}
