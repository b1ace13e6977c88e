//! Parse emitted path data and follow the pen.
//!
//! Tests use this to check geometric properties against the exact string a
//! host would receive: that the outline closes, which points it visits, and
//! which commands appear around a corner.
//!
//! Only the grammar the generator emits is understood: `M`/`L` with absolute
//! coordinates, relative `c` and `a`, and `Z`.

use std::fmt;

/// Error produced while parsing path data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathParseError {
    /// A command letter outside the supported grammar.
    #[error("unsupported command {letter:?} at token {index}")]
    UnsupportedCommand {
        /// The offending letter.
        letter: String,
        /// Token position.
        index: usize,
    },
    /// A number token that does not parse.
    #[error("invalid number {token:?} at token {index}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// Token position.
        index: usize,
    },
    /// The data ended in the middle of a command.
    #[error("command {letter} needs {expected} arguments")]
    MissingArguments {
        /// The incomplete command.
        letter: char,
        /// Number of arguments it takes.
        expected: usize,
    },
    /// The data does not start with `M`.
    #[error("path data must start with M")]
    MissingMoveTo,
}

/// One parsed command with its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// `M x y`
    MoveTo(f64, f64),
    /// `L x y`
    LineTo(f64, f64),
    /// `c dx1 dy1 dx2 dy2 dx dy`
    CubicBy([f64; 6]),
    /// `a rx ry rotation large_arc sweep dx dy`
    ArcBy([f64; 7]),
    /// `Z`
    Close,
}

impl Segment {
    /// The command letter.
    pub fn letter(&self) -> char {
        match self {
            Segment::MoveTo(..) => 'M',
            Segment::LineTo(..) => 'L',
            Segment::CubicBy(_) => 'c',
            Segment::ArcBy(_) => 'a',
            Segment::Close => 'Z',
        }
    }

    /// Pen position after this segment, starting from `from`.
    pub fn end_point(&self, from: (f64, f64)) -> (f64, f64) {
        match *self {
            Segment::MoveTo(x, y) | Segment::LineTo(x, y) => (x, y),
            Segment::CubicBy([.., dx, dy]) => (from.0 + dx, from.1 + dy),
            Segment::ArcBy([.., dx, dy]) => (from.0 + dx, from.1 + dy),
            Segment::Close => from,
        }
    }
}

/// Split path data into segments.
///
/// # Errors
///
/// Returns [`PathParseError`] for anything outside the generator's grammar.
pub fn parse_path_data(data: &str) -> Result<Vec<Segment>, PathParseError> {
    let tokens: Vec<&str> = data.split_whitespace().collect();
    let mut segments = Vec::new();
    let mut index = 0;

    while let Some(&token) = tokens.get(index) {
        let letter = match token {
            "M" => 'M',
            "L" => 'L',
            "c" => 'c',
            "a" => 'a',
            "Z" => 'Z',
            other => {
                return Err(PathParseError::UnsupportedCommand {
                    letter: other.to_owned(),
                    index,
                });
            }
        };
        let arity = match letter {
            'M' | 'L' => 2,
            'c' => 6,
            'a' => 7,
            _ => 0,
        };

        let mut args = Vec::with_capacity(arity);
        for offset in 1..=arity {
            let position = index + offset;
            let token = tokens
                .get(position)
                .ok_or(PathParseError::MissingArguments { letter, expected: arity })?;
            let value = token.parse::<f64>().map_err(|_| PathParseError::InvalidNumber {
                token: (*token).to_owned(),
                index: position,
            })?;
            args.push(value);
        }

        let segment = match (letter, args.as_slice()) {
            ('M', &[x, y]) => Segment::MoveTo(x, y),
            ('L', &[x, y]) => Segment::LineTo(x, y),
            ('c', &[a, b, c, d, e, f]) => Segment::CubicBy([a, b, c, d, e, f]),
            ('a', &[a, b, c, d, e, f, g]) => Segment::ArcBy([a, b, c, d, e, f, g]),
            _ => Segment::Close,
        };

        if segments.is_empty() && !matches!(segment, Segment::MoveTo(..)) {
            return Err(PathParseError::MissingMoveTo);
        }
        segments.push(segment);
        index += arity + 1;
    }

    if segments.is_empty() {
        return Err(PathParseError::MissingMoveTo);
    }
    Ok(segments)
}

/// A parsed outline with the pen position after every segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTrace {
    segments: Vec<Segment>,
    points: Vec<(f64, f64)>,
}

impl PathTrace {
    /// Parse `data` and follow the pen through it.
    ///
    /// # Errors
    ///
    /// Returns [`PathParseError`] if `data` does not parse.
    pub fn from_path_data(data: &str) -> Result<Self, PathParseError> {
        let segments = parse_path_data(data)?;
        let mut points = Vec::with_capacity(segments.len());
        let mut pen = (0.0, 0.0);
        for segment in &segments {
            pen = segment.end_point(pen);
            points.push(pen);
        }
        Ok(Self { segments, points })
    }

    /// The parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Pen position after each segment.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The `M` point.
    pub fn start(&self) -> (f64, f64) {
        self.points.first().copied().unwrap_or_default()
    }

    /// Pen position before the closing `Z`.
    pub fn end(&self) -> (f64, f64) {
        self.points.last().copied().unwrap_or_default()
    }

    /// Offset `Z` travels, from the last pen position back to the `M` point.
    pub fn closing_gap(&self) -> (f64, f64) {
        let (sx, sy) = self.start();
        let (ex, ey) = self.end();
        (sx - ex, sy - ey)
    }

    /// Returns `true` if the outline ends with `Z` and `Z` draws a horizontal
    /// or vertical edge back to the start, so no diagonal seam is left open.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        let (dx, dy) = self.closing_gap();
        matches!(self.segments.last(), Some(Segment::Close))
            && (dx.abs() <= tolerance || dy.abs() <= tolerance)
    }

    /// Command letters in order, e.g. `"McacL...Z"`.
    pub fn letters(&self) -> String {
        self.segments.iter().map(Segment::letter).collect()
    }

    /// Number of segments using `letter`.
    pub fn count(&self, letter: char) -> usize {
        self.segments.iter().filter(|s| s.letter() == letter).count()
    }

    /// Returns `true` if some `L` lands on `point`.
    pub fn has_line_to(&self, point: (f64, f64), tolerance: f64) -> bool {
        self.segments
            .iter()
            .zip(&self.points)
            .any(|(segment, &end)| matches!(segment, Segment::LineTo(..)) && distance(end, point) <= tolerance)
    }

    /// Returns `true` if the pen ever lands on `point`.
    pub fn visits(&self, point: (f64, f64), tolerance: f64) -> bool {
        self.points.iter().any(|&p| distance(p, point) <= tolerance)
    }

    /// Smallest box containing every pen position, as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.points.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), &(x, y)| (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)),
        )
    }
}

impl fmt::Display for PathTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (segment, (x, y)) in self.segments.iter().zip(&self.points) {
            writeln!(f, "{} -> ({x}, {y})", segment.letter())?;
        }
        Ok(())
    }
}

/// Euclidean distance.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}
