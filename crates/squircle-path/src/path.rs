//! Path assembly and serialization.
//!
//! The outline starts on the top edge where the top-right corner's curve
//! begins and walks the corners clockwise. Absolute `M`/`L` commands pin every
//! corner's start point; each rounded corner is written as relative `c`, `a`,
//! `c` commands. A sharp corner's start point is its vertex, so the `L` that
//! reaches it is all it needs.
//!
//! All numbers are rounded to [`PRECISION_DECIMALS`] places. Relative deltas
//! are taken between rounded absolute points, never rounded on their own, so
//! rounding error does not build up along a corner and every curve lands
//! exactly on the next edge. Renderers that use the outline as a clip mask
//! show a 1px seam where adjacent commands disagree by a sub-pixel amount.

use core::fmt;

use serde::Serialize;

use crate::corner::{Corner, Corners};
use crate::params::CornerPathParams;
use crate::rect::RectSpec;

/// Number of decimal places kept in emitted coordinates.
pub const PRECISION_DECIMALS: u32 = 2;

const PRECISION_SCALE: f64 = 100.0;

/// Round `value` to [`PRECISION_DECIMALS`] places, half away from zero.
///
/// Negative zero comes back as positive zero.
///
/// # Example
///
/// ```
/// use squircle_path::round_to_precision;
///
/// assert_eq!(round_to_precision(1.23456), 1.23);
/// assert_eq!(round_to_precision(-0.001), 0.0);
/// ```
#[inline]
pub fn round_to_precision(value: f64) -> f64 {
    let rounded = (value * PRECISION_SCALE).round() / PRECISION_SCALE;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// One drawing command.
///
/// Coordinates are already rounded to [`PRECISION_DECIMALS`] places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PathCommand {
    /// Absolute move, used once for the start point.
    MoveTo {
        /// Absolute x.
        x: f64,
        /// Absolute y.
        y: f64,
    },
    /// Absolute straight line.
    LineTo {
        /// Absolute x.
        x: f64,
        /// Absolute y.
        y: f64,
    },
    /// Relative cubic Bézier.
    CubicBy {
        /// First control point, relative to the current point.
        dx1: f64,
        /// First control point, relative to the current point.
        dy1: f64,
        /// Second control point, relative to the current point.
        dx2: f64,
        /// Second control point, relative to the current point.
        dy2: f64,
        /// End point, relative to the current point.
        dx: f64,
        /// End point, relative to the current point.
        dy: f64,
    },
    /// Relative circular arc with no rotation and the small-arc flag unset.
    ArcBy {
        /// Radius on both axes.
        radius: f64,
        /// `true` for clockwise sweep.
        sweep: bool,
        /// End point, relative to the current point.
        dx: f64,
        /// End point, relative to the current point.
        dy: f64,
    },
    /// Close the outline.
    Close,
}

impl PathCommand {
    fn move_to(x: f64, y: f64) -> Self {
        PathCommand::MoveTo {
            x: round_to_precision(x),
            y: round_to_precision(y),
        }
    }

    fn line_to(x: f64, y: f64) -> Self {
        PathCommand::LineTo {
            x: round_to_precision(x),
            y: round_to_precision(y),
        }
    }

    fn cubic_by(c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) -> Self {
        PathCommand::CubicBy {
            dx1: round_to_precision(c1.0),
            dy1: round_to_precision(c1.1),
            dx2: round_to_precision(c2.0),
            dy2: round_to_precision(c2.1),
            dx: round_to_precision(end.0),
            dy: round_to_precision(end.1),
        }
    }

    fn arc_by(radius: f64, end: (f64, f64)) -> Self {
        PathCommand::ArcBy {
            radius: round_to_precision(radius),
            sweep: true,
            dx: round_to_precision(end.0),
            dy: round_to_precision(end.1),
        }
    }

    /// The SVG command letter.
    pub const fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo { .. } => 'M',
            PathCommand::LineTo { .. } => 'L',
            PathCommand::CubicBy { .. } => 'c',
            PathCommand::ArcBy { .. } => 'a',
            PathCommand::Close => 'Z',
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter();
        match *self {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                write!(f, "{letter} {} {}", Num(x), Num(y))
            }
            PathCommand::CubicBy {
                dx1,
                dy1,
                dx2,
                dy2,
                dx,
                dy,
            } => write!(
                f,
                "{letter} {} {} {} {} {} {}",
                Num(dx1),
                Num(dy1),
                Num(dx2),
                Num(dy2),
                Num(dx),
                Num(dy)
            ),
            PathCommand::ArcBy {
                radius,
                sweep,
                dx,
                dy,
            } => write!(
                f,
                "{letter} {r} {r} 0 0 {} {} {}",
                u8::from(sweep),
                Num(dx),
                Num(dy),
                r = Num(radius)
            ),
            PathCommand::Close => write!(f, "{letter}"),
        }
    }
}

/// Shortest decimal form of an already-rounded coordinate.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", round_to_precision(self.0))
    }
}

/// A closed smoothed-corner rectangle outline.
///
/// `Display` produces SVG path data, e.g. `M 91.2 0 c 12 0 18 0 ... Z`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SquirclePath {
    commands: Vec<PathCommand>,
}

impl SquirclePath {
    /// The commands in emission order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if there are no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize as SVG path data.
    pub fn to_svg_path_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SquirclePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut commands = self.commands.iter();
        if let Some(first) = commands.next() {
            write!(f, "{first}")?;
        }
        for command in commands {
            write!(f, " {command}")?;
        }
        Ok(())
    }
}

type Point = (f64, f64);

fn rounded((x, y): Point) -> Point {
    (round_to_precision(x), round_to_precision(y))
}

/// Direction of travel when entering `corner` clockwise.
fn heading(corner: Corner) -> Point {
    match corner {
        Corner::TopRight => (1.0, 0.0),
        Corner::BottomRight => (0.0, 1.0),
        Corner::BottomLeft => (-1.0, 0.0),
        Corner::TopLeft => (0.0, -1.0),
    }
}

/// Direction of travel when leaving `corner` clockwise.
fn turn(corner: Corner) -> Point {
    match corner {
        Corner::TopRight => (0.0, 1.0),
        Corner::BottomRight => (-1.0, 0.0),
        Corner::BottomLeft => (0.0, -1.0),
        Corner::TopLeft => (1.0, 0.0),
    }
}

/// `from` moved `along` units in the heading direction and `inward` units in
/// the turn direction.
fn offset(corner: Corner, from: Point, along: f64, inward: f64) -> Point {
    let (hx, hy) = heading(corner);
    let (tx, ty) = turn(corner);
    (from.0 + hx * along + tx * inward, from.1 + hy * along + ty * inward)
}

/// Point where `corner`'s curve begins.
fn curve_start(corner: Corner, rect: RectSpec, params: &CornerPathParams) -> Point {
    offset(corner, corner.vertex(rect), -params.p, 0.0)
}

/// Point where `corner`'s curve ends, on the edge leaving it.
fn curve_end(corner: Corner, rect: RectSpec, params: &CornerPathParams) -> Point {
    offset(corner, corner.vertex(rect), 0.0, params.p)
}

/// The current point as written, i.e. after rounding.
#[derive(Debug, Clone, Copy)]
struct Pen(Point);

impl Pen {
    fn at(point: Point) -> Self {
        Pen(rounded(point))
    }

    /// Offset from the pen to `target` once `target` is rounded.
    fn delta_to(self, target: Point) -> Point {
        let Pen((px, py)) = self;
        let (x, y) = rounded(target);
        (x - px, y - py)
    }
}

/// Emit the `c a c` run of a rounded corner whose curve begins at `start`.
fn push_corner(
    commands: &mut Vec<PathCommand>,
    corner: Corner,
    rect: RectSpec,
    start: Point,
    params: &CornerPathParams,
) {
    let CornerPathParams {
        a,
        b,
        c,
        d,
        arc_section_length,
        corner_radius,
        ..
    } = *params;

    let pen = Pen::at(start);
    let arc_start = offset(corner, start, params.bezier_extent(), d);
    commands.push(PathCommand::cubic_by(
        pen.delta_to(offset(corner, start, a, 0.0)),
        pen.delta_to(offset(corner, start, a + b, 0.0)),
        pen.delta_to(arc_start),
    ));

    let pen = Pen::at(arc_start);
    let arc_end = offset(corner, arc_start, arc_section_length, arc_section_length);
    commands.push(PathCommand::arc_by(corner_radius, pen.delta_to(arc_end)));

    let pen = Pen::at(arc_end);
    commands.push(PathCommand::cubic_by(
        pen.delta_to(offset(corner, arc_end, d, c)),
        pen.delta_to(offset(corner, arc_end, d, b + c)),
        pen.delta_to(curve_end(corner, rect, params)),
    ));
}

/// Assemble the closed outline of `rect` from its four corners' parameters.
///
/// The result has one `M`, one `L` per corner after the first, three commands
/// per rounded corner, and a final `Z`.
pub fn assemble(rect: RectSpec, params: &Corners<CornerPathParams>) -> SquirclePath {
    let mut commands = Vec::with_capacity(17);

    for (i, corner) in Corner::CLOCKWISE_FROM_TOP_RIGHT.into_iter().enumerate() {
        let corner_params = params.get(corner);
        let start = curve_start(corner, rect, corner_params);
        let (x, y) = start;
        if i == 0 {
            commands.push(PathCommand::move_to(x, y));
        } else {
            commands.push(PathCommand::line_to(x, y));
        }
        if !corner_params.is_straight() {
            push_corner(&mut commands, corner, rect, start, corner_params);
        }
    }

    commands.push(PathCommand::Close);
    SquirclePath { commands }
}
