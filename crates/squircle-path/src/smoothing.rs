//! Corner smoothing factor.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How much of each corner is spent on Bézier run-in/out instead of circular arc.
///
/// Always within `[0, 1]`: `0` is an ordinary quarter-circle fillet, `1` is the
/// maximally smoothed superellipse-style corner. Smoothing values often arrive
/// from animations and interpolations, so construction clamps instead of
/// failing, and `NaN` becomes `0`.
///
/// # Example
///
/// ```
/// use squircle_path::Smoothing;
///
/// assert_eq!(Smoothing::new(1.7).value(), 1.0);
/// assert_eq!(Smoothing::new(-0.2).value(), 0.0);
/// assert_eq!(Smoothing::new(f64::NAN).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Smoothing(f64);

impl Smoothing {
    /// Plain circular fillet.
    pub const NONE: Smoothing = Smoothing(0.0);

    /// Smoothing used by iOS app icons.
    pub const IOS: Smoothing = Smoothing(0.6);

    /// Maximal smoothing.
    pub const MAX: Smoothing = Smoothing(1.0);

    /// Clamp `value` into `[0, 1]`.
    #[inline]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NONE;
        }
        Smoothing(value.clamp(0.0, 1.0))
    }

    /// The clamped factor.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Smoothing {
    fn from(value: f64) -> Self {
        Smoothing::new(value)
    }
}

impl From<Smoothing> for f64 {
    fn from(smoothing: Smoothing) -> Self {
        smoothing.0
    }
}

impl fmt::Display for Smoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_are_kept() {
        for v in [0.0, 0.25, 0.6, 1.0] {
            assert!((Smoothing::new(v).value() - v).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        assert!((Smoothing::new(3.0).value() - 1.0).abs() < f64::EPSILON);
        assert!(Smoothing::new(-3.0).value().abs() < f64::EPSILON);
        assert!((Smoothing::new(f64::INFINITY).value() - 1.0).abs() < f64::EPSILON);
        assert!(Smoothing::new(f64::NEG_INFINITY).value().abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_is_none() {
        assert_eq!(Smoothing::new(f64::NAN), Smoothing::NONE);
    }

    #[test]
    fn test_deserialize_clamps() -> Result<(), serde_json::Error> {
        let s: Smoothing = serde_json::from_str("1.5")?;
        assert_eq!(s, Smoothing::MAX);
        let s: Smoothing = serde_json::from_str("0.6")?;
        assert_eq!(s, Smoothing::IOS);
        assert_eq!(serde_json::to_string(&Smoothing::IOS)?, "0.6");
        Ok(())
    }
}
