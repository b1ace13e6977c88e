//! Smoothed-corner ("squircle") rectangle outlines.
//!
//! This crate turns a rectangle, per-corner radii and a smoothing factor into
//! a closed SVG path whose corners blend into the edges with continuous
//! curvature instead of the abrupt start of a circular fillet.
//!
//! # Overview
//!
//! Generation is a single pass of three pure steps:
//!
//! - **Budget allocation** ([`allocate`]): each corner gets the longest stretch
//!   of its two edges it may occupy, so neighbouring curves never overlap.
//! - **Corner parameters** ([`CornerPathParams::compute`]): the Bézier and arc
//!   offsets of one corner, lowering smoothing (or shrinking control points
//!   when smoothing must be preserved) to fit the budget.
//! - **Path assembly** ([`assemble`]): the corners are walked clockwise from the
//!   top edge and written as `M`, `L`, `c`, `a` and `Z` commands with two
//!   decimals.
//!
//! Nothing is cached implicitly and nothing is shared between calls, so every
//! function here can be called from any thread. Hosts that regenerate the same
//! outline every frame can opt into [`PathCache`].
//!
//! # Errors
//!
//! Missing or non-positive dimensions and negative radii are reported as
//! [`GeometryError`]. Smoothing is clamped into `[0, 1]` and never fails.
//!
//! # Example
//!
//! ```
//! use squircle_path::generate_path;
//!
//! let path = generate_path(120.0, 80.0, 16.0, 16.0, 16.0, 16.0, 0.8, false)?;
//! assert!(path.starts_with("M 91.2 0 c 12 0 18 0 22.2 3.06 a 16 16 0 0 1 3.54 3.54"));
//! assert!(path.ends_with('Z'));
//! # Ok::<(), squircle_path::GeometryError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod budget;
pub mod cache;
pub mod corner;
pub mod error;
pub mod options;
pub mod params;
pub mod path;
pub mod prelude;
pub mod radii;
pub mod rect;
pub mod smoothing;

pub use budget::{CornerBudget, CornerBudgets, allocate};
pub use cache::PathCache;
pub use corner::{Corner, Corners, Side};
pub use error::GeometryError;
pub use options::{SquircleOptions, generate_path};
pub use params::CornerPathParams;
pub use path::{PRECISION_DECIMALS, PathCommand, SquirclePath, assemble, round_to_precision};
pub use radii::{CornerRadii, RadiusOverrides};
pub use rect::{Dimension, RectSpec};
pub use smoothing::Smoothing;

/// Result alias for path generation.
pub type Result<T> = std::result::Result<T, GeometryError>;
