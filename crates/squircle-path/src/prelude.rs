//! Common imports for hosts generating outlines.
//!
//! ```
//! use squircle_path::prelude::*;
//!
//! let path = SquircleOptions::new(48.0, 48.0)
//!     .with_corner_radius(12.0)
//!     .with_corner_smoothing(Smoothing::IOS)
//!     .to_path()?;
//! assert_eq!(path.commands().first().map(PathCommand::letter), Some('M'));
//! # Ok::<(), GeometryError>(())
//! ```

pub use crate::cache::PathCache;
pub use crate::corner::{Corner, Corners};
pub use crate::error::GeometryError;
pub use crate::options::{SquircleOptions, generate_path};
pub use crate::path::{PathCommand, SquirclePath};
pub use crate::radii::{CornerRadii, RadiusOverrides};
pub use crate::rect::RectSpec;
pub use crate::smoothing::Smoothing;
