//! Corner and side identities of an axis-aligned rectangle.
//!
//! Coordinates are y-down: the top edge is `y = 0` and the bottom edge is
//! `y = height`.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::rect::RectSpec;

/// One of the four corners of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    /// Corner at `(0, 0)`.
    TopLeft,
    /// Corner at `(width, 0)`.
    TopRight,
    /// Corner at `(width, height)`.
    BottomRight,
    /// Corner at `(0, height)`.
    BottomLeft,
}

impl Corner {
    /// All corners, clockwise from top-left.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// The order in which corners are walked when a path is emitted.
    pub const CLOCKWISE_FROM_TOP_RIGHT: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ];

    /// The two corners sharing an edge with this one, paired with that edge.
    pub const fn adjacents(self) -> [(Corner, Side); 2] {
        match self {
            Corner::TopLeft => [(Corner::TopRight, Side::Top), (Corner::BottomLeft, Side::Left)],
            Corner::TopRight => [(Corner::TopLeft, Side::Top), (Corner::BottomRight, Side::Right)],
            Corner::BottomRight => [
                (Corner::BottomLeft, Side::Bottom),
                (Corner::TopRight, Side::Right),
            ],
            Corner::BottomLeft => [
                (Corner::BottomRight, Side::Bottom),
                (Corner::TopLeft, Side::Left),
            ],
        }
    }

    /// The corner's point on the rectangle.
    pub fn vertex(self, rect: RectSpec) -> (f64, f64) {
        match self {
            Corner::TopLeft => (0.0, 0.0),
            Corner::TopRight => (rect.width(), 0.0),
            Corner::BottomRight => (rect.width(), rect.height()),
            Corner::BottomLeft => (0.0, rect.height()),
        }
    }

    /// Snake-case name used in errors, logs and reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomRight => "bottom_right",
            Corner::BottomLeft => "bottom_left",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four edges of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Edge from top-left to top-right.
    Top,
    /// Edge from top-right to bottom-right.
    Right,
    /// Edge from bottom-right to bottom-left.
    Bottom,
    /// Edge from bottom-left to top-left.
    Left,
}

impl Side {
    /// Returns `true` for the top and bottom edges.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Length of this edge on `rect`.
    pub fn length(self, rect: RectSpec) -> f64 {
        if self.is_horizontal() {
            rect.width()
        } else {
            rect.height()
        }
    }

    /// The two corners at the ends of this edge.
    pub const fn corners(self) -> [Corner; 2] {
        match self {
            Side::Top => [Corner::TopLeft, Corner::TopRight],
            Side::Right => [Corner::TopRight, Corner::BottomRight],
            Side::Bottom => [Corner::BottomRight, Corner::BottomLeft],
            Side::Left => [Corner::BottomLeft, Corner::TopLeft],
        }
    }
}

/// One value per corner.
///
/// A fixed four-slot container addressed by [`Corner`] instead of by index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Corners<T> {
    /// Value for the top-left corner.
    pub top_left: T,
    /// Value for the top-right corner.
    pub top_right: T,
    /// Value for the bottom-right corner.
    pub bottom_right: T,
    /// Value for the bottom-left corner.
    pub bottom_left: T,
}

impl<T> Corners<T> {
    /// Build a value for each corner from a function of the corner.
    pub fn from_fn(mut f: impl FnMut(Corner) -> T) -> Self {
        Self {
            top_left: f(Corner::TopLeft),
            top_right: f(Corner::TopRight),
            bottom_right: f(Corner::BottomRight),
            bottom_left: f(Corner::BottomLeft),
        }
    }

    /// Borrow the value for `corner`.
    pub fn get(&self, corner: Corner) -> &T {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomRight => &self.bottom_right,
            Corner::BottomLeft => &self.bottom_left,
        }
    }

    /// Mutably borrow the value for `corner`.
    pub fn get_mut(&mut self, corner: Corner) -> &mut T {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomRight => &mut self.bottom_right,
            Corner::BottomLeft => &mut self.bottom_left,
        }
    }

    /// Apply `f` to every value.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Corners<U> {
        Corners {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
        }
    }

    /// Iterate `(corner, value)` pairs in [`Corner::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, &T)> {
        Corner::ALL.into_iter().map(move |corner| (corner, self.get(corner)))
    }
}

impl<T: Clone> Corners<T> {
    /// The same value on every corner.
    pub fn splat(value: T) -> Self {
        Self {
            top_left: value.clone(),
            top_right: value.clone(),
            bottom_right: value.clone(),
            bottom_left: value,
        }
    }
}
