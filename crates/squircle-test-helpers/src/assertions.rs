//! Assertion macros for geometry tests.

/// Assert that two floating-point values are within `tolerance` of each other.
///
/// # Example
///
/// ```rust
/// use squircle_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(28.8, 1.8 * 16.0, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $tolerance, "values differ")
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {{
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    }};
}

/// Assert that a sequence of floats strictly decreases.
///
/// # Example
///
/// ```rust
/// use squircle_test_helpers::assert_strictly_decreasing;
///
/// assert_strictly_decreasing!(&[90.0, 45.0, 0.0]);
/// ```
#[macro_export]
macro_rules! assert_strictly_decreasing {
    ($collection:expr $(,)?) => {{
        let collection = $collection;
        let mut iter = collection.iter();
        if let Some(mut prev) = iter.next() {
            for (i, curr) in iter.enumerate() {
                if !(prev > curr) {
                    panic!(
                        "assertion failed: sequence is not strictly decreasing\n  violation at index {}: {:?} <= {:?}",
                        i + 1, prev, curr
                    );
                }
                prev = curr;
            }
        }
    }};
}

/// Assert that a value lies in a range.
///
/// # Example
///
/// ```rust
/// use squircle_test_helpers::assert_in_range;
///
/// assert_in_range!(0.6, 0.0..=1.0);
/// ```
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $range:expr $(,)?) => {{
        let value = $value;
        let range = $range;
        if !range.contains(&value) {
            panic!("assertion failed: value {:?} is not in range {:?}", value, range);
        }
    }};
    ($value:expr, $range:expr, $($arg:tt)+) => {{
        let value = $value;
        let range = $range;
        if !range.contains(&value) {
            panic!("assertion failed: value {:?} is not in range {:?}: {}", value, range, format_args!($($arg)+));
        }
    }};
}

/// Assert that path data parses and `Z` closes it with a straight edge.
///
/// See [`PathTrace::is_closed`](crate::path_trace::PathTrace::is_closed).
///
/// Evaluates to the [`PathTrace`](crate::path_trace::PathTrace) for further checks.
///
/// # Example
///
/// ```rust
/// use squircle_test_helpers::assert_path_closes;
///
/// let trace = assert_path_closes!("M 10 0 L 10 10 L 0 10 L 0 0 Z", 0.01);
/// assert_eq!(trace.count('L'), 3);
/// ```
#[macro_export]
macro_rules! assert_path_closes {
    ($data:expr, $tolerance:expr $(,)?) => {{
        let data: &str = &$data;
        let trace = $crate::must_with($crate::path_trace::PathTrace::from_path_data(data), data);
        let tolerance: f64 = $tolerance;
        if !trace.is_closed(tolerance) {
            panic!(
                "assertion failed: path does not close along an edge\n  start: {:?}\n    end: {:?}\n   path: {}",
                trace.start(),
                trace.end(),
                data
            );
        }
        trace
    }};
}
