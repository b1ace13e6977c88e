//! Shared test utilities for the squircle workspace.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Assertion macros for floats and path data
//! - [`path_trace`] - Parser and pen tracer for emitted path data
//! - [`fixtures`] - Named rectangle scenarios
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! squircle-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use squircle_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod assertions;
pub mod fixtures;
pub mod must;
pub mod path_trace;
pub mod prelude;

pub use must::*;
