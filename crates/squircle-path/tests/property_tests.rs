//! Property-based tests for path generation.
//!
//! These tests check the geometric guarantees every outline must satisfy,
//! against both the intermediate parameters and the emitted string.

use proptest::prelude::*;
use quickcheck_macros::quickcheck;
use squircle_path::{
    Corner, CornerPathParams, CornerRadii, PathCommand, RectSpec, Side, Smoothing, SquircleOptions, allocate,
    generate_path, round_to_precision,
};
use squircle_test_helpers::assert_strictly_decreasing;
use squircle_test_helpers::path_trace::PathTrace;

/// Float slack from summing relative deltas in the trace. The rounded points
/// themselves line up exactly.
const CLOSE_TOLERANCE: f64 = 1e-9;

fn dimension(raw: u16) -> f64 {
    1.0 + f64::from(raw % 1000)
}

fn radius(raw: u16) -> f64 {
    f64::from(raw % 600) / 2.0
}

fn smoothing(raw: u8) -> f64 {
    f64::from(raw) / f64::from(u8::MAX)
}

fn trace(
    width: f64,
    height: f64,
    radii: [f64; 4],
    smoothing: f64,
    preserve: bool,
) -> Option<(RectSpec, PathTrace)> {
    let [top_left, top_right, bottom_right, bottom_left] = radii;
    let data = generate_path(
        width,
        height,
        top_left,
        top_right,
        bottom_left,
        bottom_right,
        smoothing,
        preserve,
    )
    .ok()?;
    let rect = RectSpec::new(width, height).ok()?;
    PathTrace::from_path_data(&data).ok().map(|trace| (rect, trace))
}

#[quickcheck]
fn prop_path_closes(w: u16, h: u16, r: (u16, u16, u16, u16), s: u8, preserve: bool) -> bool {
    let radii = [radius(r.0), radius(r.1), radius(r.2), radius(r.3)];
    let Some((_, trace)) = trace(dimension(w), dimension(h), radii, smoothing(s), preserve) else {
        return false;
    };
    let (dx, dy) = trace.closing_gap();
    trace.is_closed(CLOSE_TOLERANCE) && dy.abs() <= CLOSE_TOLERANCE && dx >= -CLOSE_TOLERANCE
}

#[quickcheck]
fn prop_outline_stays_inside_rectangle(w: u16, h: u16, r: (u16, u16, u16, u16), s: u8, preserve: bool) -> bool {
    let (width, height) = (dimension(w), dimension(h));
    let radii = [radius(r.0), radius(r.1), radius(r.2), radius(r.3)];
    let Some((_, trace)) = trace(width, height, radii, smoothing(s), preserve) else {
        return false;
    };
    let (min_x, min_y, max_x, max_y) = trace.bounds();
    min_x >= -CLOSE_TOLERANCE
        && min_y >= -CLOSE_TOLERANCE
        && max_x <= width + CLOSE_TOLERANCE
        && max_y <= height + CLOSE_TOLERANCE
}

#[quickcheck]
fn prop_each_corner_lands_on_next_edge(w: u16, h: u16, r: (u16, u16, u16, u16), s: u8, preserve: bool) -> bool {
    let (width, height) = (dimension(w), dimension(h));
    let radii = [radius(r.0), radius(r.1), radius(r.2), radius(r.3)];
    let [top_left, top_right, bottom_right, bottom_left] = radii;
    let options = SquircleOptions::new(width, height)
        .with_top_left_radius(top_left)
        .with_top_right_radius(top_right)
        .with_bottom_right_radius(bottom_right)
        .with_bottom_left_radius(bottom_left)
        .with_corner_smoothing(smoothing(s))
        .with_preserve_smoothing(preserve);
    let (Ok(params), Some((_, trace))) = (options.corner_params(), trace(width, height, radii, smoothing(s), preserve))
    else {
        return false;
    };

    // Each curve ends exactly on the edge leaving its corner.
    let p = |corner: Corner| params.get(corner).p;
    let landings = [
        (Corner::TopRight, (width, p(Corner::TopRight))),
        (Corner::BottomRight, (width - p(Corner::BottomRight), height)),
        (Corner::BottomLeft, (0.0, height - p(Corner::BottomLeft))),
        (Corner::TopLeft, (p(Corner::TopLeft), 0.0)),
    ];
    landings
        .into_iter()
        .filter(|(corner, _)| !params.get(*corner).is_straight())
        .all(|(_, (x, y))| trace.visits((round_to_precision(x), round_to_precision(y)), CLOSE_TOLERANCE))
}

#[quickcheck]
fn prop_lines_are_axis_aligned(w: u16, h: u16, r: (u16, u16, u16, u16), s: u8, preserve: bool) -> bool {
    let radii = [radius(r.0), radius(r.1), radius(r.2), radius(r.3)];
    let Some((_, trace)) = trace(dimension(w), dimension(h), radii, smoothing(s), preserve) else {
        return false;
    };
    let mut previous = trace.start();
    trace.segments().iter().zip(trace.points()).all(|(segment, &point)| {
        let from = previous;
        previous = point;
        segment.letter() != 'L'
            || (point.0 - from.0).abs() <= CLOSE_TOLERANCE
            || (point.1 - from.1).abs() <= CLOSE_TOLERANCE
    })
}

#[quickcheck]
fn prop_sharp_corners_are_plain_lines(w: u16, h: u16, r: u16, sharp: u8, s: u8) -> bool {
    let (width, height) = (dimension(w), dimension(h));
    let rounded = 1.0 + radius(r);
    let mut radii = [rounded; 4];
    let mut sharp_corners = Vec::new();
    for (bit, corner) in Corner::ALL.into_iter().enumerate() {
        if sharp & (1 << bit) != 0 {
            if let Some(slot) = radii.get_mut(bit) {
                *slot = 0.0;
            }
            sharp_corners.push(corner);
        }
    }

    let Some((rect, trace)) = trace(width, height, radii, smoothing(s), false) else {
        return false;
    };

    let rounded_count = 4 - sharp_corners.len();
    let shape_ok = trace.count('a') == rounded_count
        && trace.count('c') == 2 * rounded_count
        && trace.count('M') == 1
        && trace.count('L') == 3;
    let vertices_ok = sharp_corners
        .iter()
        .all(|corner| trace.visits(corner.vertex(rect), CLOSE_TOLERANCE));
    shape_ok && vertices_ok
}

#[quickcheck]
fn prop_smoothing_never_errors(s: f64) -> bool {
    generate_path(64.0, 64.0, 12.0, 12.0, 12.0, 12.0, s, false).is_ok()
}

fn budgets_respect_sides(
    width: f64,
    height: f64,
    radii: CornerRadii,
    smoothing: f64,
    preserve: bool,
) -> Result<(), TestCaseError> {
    let rect = RectSpec::new(width, height).map_err(|e| TestCaseError::fail(format!("{e}")))?;
    let budgets = allocate(rect, &radii, Smoothing::new(smoothing), preserve)
        .map_err(|e| TestCaseError::fail(format!("{e}")))?;
    let params = budgets.map(|budget| budget.path_params());

    for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
        let [a, b] = side.corners();
        let used = params.get(a).p + params.get(b).p;
        prop_assert!(
            used <= side.length(rect) + 1e-9,
            "{side:?}: p sum {used} exceeds {}",
            side.length(rect)
        );
        if !params.get(a).is_straight() && !params.get(b).is_straight() {
            let half = side.length(rect) / 2.0;
            prop_assert!(budgets.get(a).budget <= half + 1e-9 && budgets.get(b).budget <= half + 1e-9);
        }
    }
    for (corner, budget) in budgets.iter() {
        prop_assert!(budget.budget >= 0.0, "{corner} budget {}", budget.budget);
        prop_assert!(budget.radius <= budget.budget + 1e-12);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Neighbouring corners never claim more than their shared edge.
    #[test]
    fn prop_budget_respect(
        width in 1.0f64..2000.0,
        height in 1.0f64..2000.0,
        tl in 0.0f64..1500.0,
        tr in 0.0f64..1500.0,
        br in 0.0f64..1500.0,
        bl in 0.0f64..1500.0,
        smoothing in 0.0f64..=1.0,
        preserve in any::<bool>(),
    ) {
        budgets_respect_sides(width, height, CornerRadii::new(tl, tr, br, bl), smoothing, preserve)?;
    }

    /// Sharp neighbours leave the whole edge to a rounded corner.
    #[test]
    fn prop_budget_respect_with_sharp_corners(
        width in 1.0f64..500.0,
        height in 1.0f64..500.0,
        r in 0.0f64..800.0,
        corner in 0usize..4,
    ) {
        let mut radii = CornerRadii::zero();
        let target = Corner::ALL.get(corner).copied().unwrap_or(Corner::TopLeft);
        radii.set(target, r);
        budgets_respect_sides(width, height, radii, 0.6, false)?;
    }

    /// A square with equal corners has four identical corner parameter sets.
    #[test]
    fn prop_square_is_rotation_invariant(
        side in 1.0f64..1000.0,
        r in 0.0f64..800.0,
        smoothing in 0.0f64..=1.0,
        preserve in any::<bool>(),
    ) {
        let options = SquircleOptions::new(side, side)
            .with_corner_radius(r)
            .with_corner_smoothing(smoothing)
            .with_preserve_smoothing(preserve);
        let params = options.corner_params().map_err(|e| TestCaseError::fail(format!("{e}")))?;
        for (corner, p) in params.iter() {
            prop_assert_eq!(p, &params.top_left, "{} differs", corner);
        }
    }

    /// Rotating one corner's commands by 90 degrees yields the next corner's commands.
    #[test]
    fn prop_square_path_commands_rotate(
        side in 10.0f64..1000.0,
        r in 1.0f64..400.0,
        smoothing in 0.0f64..=1.0,
    ) {
        let path = SquircleOptions::new(side, side)
            .with_corner_radius(r)
            .with_corner_smoothing(smoothing)
            .to_path()
            .map_err(|e| TestCaseError::fail(format!("{e}")))?;

        let relative: Vec<(f64, f64)> = path
            .commands()
            .iter()
            .filter_map(|command| match *command {
                PathCommand::CubicBy { dx, dy, .. } | PathCommand::ArcBy { dx, dy, .. } => Some((dx, dy)),
                _ => None,
            })
            .collect();
        prop_assert_eq!(relative.len(), 12);

        for (current, next) in relative.iter().zip(relative.iter().skip(3)) {
            let rotated = (-current.1, current.0);
            prop_assert!(
                (rotated.0 - next.0).abs() < 1e-9 && (rotated.1 - next.1).abs() < 1e-9,
                "{current:?} rotated to {rotated:?}, expected {next:?}"
            );
        }
    }

    /// Holding the radius fixed, more smoothing means a shorter arc.
    #[test]
    fn prop_arc_measure_decreases_with_smoothing(
        r in 0.5f64..500.0,
        low in 0.0f64..1.0,
        gap in 0.001f64..1.0,
    ) {
        let high = (low + gap).min(1.0);
        prop_assume!(high > low);
        let degrees: Vec<f64> = [low, (low + high) / 2.0, high]
            .into_iter()
            .map(|s| CornerPathParams::compute(r, Smoothing::new(s), false, f64::INFINITY).arc_measure_degrees)
            .collect();
        assert_strictly_decreasing!(&degrees);
    }

    /// Zero smoothing is an ordinary quarter-circle fillet.
    #[test]
    fn prop_zero_smoothing_is_quarter_circle(
        width in 1.0f64..1000.0,
        height in 1.0f64..1000.0,
        r in 0.01f64..500.0,
    ) {
        let params = SquircleOptions::new(width, height)
            .with_corner_radius(r)
            .corner_params()
            .map_err(|e| TestCaseError::fail(format!("{e}")))?;
        for (_, p) in params.iter() {
            prop_assert!((p.arc_measure_degrees - 90.0).abs() < 1e-12);
            prop_assert!(p.a.abs() < 1e-9 && p.b.abs() < 1e-9);
            prop_assert!(p.c.abs() < 1e-9 && p.d.abs() < 1e-9);
            prop_assert!((p.arc_section_length - p.corner_radius).abs() < 1e-9 * p.corner_radius.max(1.0));
            prop_assert!((p.p - p.corner_radius).abs() < 1e-9 * p.corner_radius.max(1.0));
        }
    }
}

#[test]
fn scenario_roomy_card_keeps_full_smoothing() -> Result<(), squircle_path::GeometryError> {
    let options = SquircleOptions::new(120.0, 80.0)
        .with_corner_radius(16.0)
        .with_corner_smoothing(0.8);
    let rect = options.rect()?;
    let budgets = allocate(rect, &options.resolved_radii(), options.corner_smoothing, false)?;
    let params = options.corner_params()?;

    for (corner, p) in params.iter() {
        assert!((budgets.get(corner).budget - 40.0).abs() < 1e-12);
        assert!((p.smoothing - 0.8).abs() < f64::EPSILON, "{corner} smoothing {}", p.smoothing);
        assert!((p.p - 28.8).abs() < 1e-9);
    }
    assert_eq!(params.top_left, params.top_right);
    assert_eq!(params.bottom_left, params.bottom_right);
    Ok(())
}

#[test]
fn scenario_starved_corner_drops_to_plain_fillet() -> Result<(), squircle_path::GeometryError> {
    let params = SquircleOptions::new(120.0, 80.0)
        .with_corner_radius(40.0)
        .with_corner_smoothing(1.0)
        .corner_params()?;
    for (corner, p) in params.iter() {
        assert!(p.smoothing.abs() < f64::EPSILON, "{corner} smoothing {}", p.smoothing);
        assert!((p.arc_measure_degrees - 90.0).abs() < 1e-12);
        assert!((p.p - 40.0).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn scenario_starved_corner_preserving_smoothing() -> Result<(), squircle_path::GeometryError> {
    let unconstrained = CornerPathParams::compute(40.0, Smoothing::MAX, true, f64::INFINITY);
    let params = SquircleOptions::new(120.0, 80.0)
        .with_corner_radius(40.0)
        .with_corner_smoothing(1.0)
        .with_preserve_smoothing(true)
        .corner_params()?;
    for (corner, p) in params.iter() {
        assert!((p.smoothing - 1.0).abs() < f64::EPSILON, "{corner} smoothing {}", p.smoothing);
        assert!(p.a < unconstrained.a);
        assert!((p.arc_section_length - unconstrained.arc_section_length).abs() < 1e-12);
        assert!((p.c - unconstrained.c).abs() < 1e-12);
        assert!((p.d - unconstrained.d).abs() < 1e-12);
        assert!((p.p - 40.0).abs() < 1e-12);
    }
    Ok(())
}
