//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use squircle_test_helpers::prelude::*;
//! ```

pub use crate::fixtures::{ShapeFixture, shape_fixtures};
pub use crate::must::{must, must_err, must_some, must_with};
pub use crate::path_trace::{PathParseError, PathTrace, Segment, distance, parse_path_data};
pub use crate::{assert_approx_eq, assert_in_range, assert_path_closes, assert_strictly_decreasing};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
