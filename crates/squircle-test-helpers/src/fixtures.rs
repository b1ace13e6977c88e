//! Named rectangle scenarios shared by property, snapshot and benchmark code.
//!
//! Fixtures are plain numbers so this crate stays independent of the crate
//! under test.

/// One generation input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeFixture {
    /// Short identifier, usable as a snapshot name.
    pub name: &'static str,
    /// Rectangle width.
    pub width: f64,
    /// Rectangle height.
    pub height: f64,
    /// Radii in `[top_left, top_right, bottom_right, bottom_left]` order.
    pub radii: [f64; 4],
    /// Corner smoothing.
    pub smoothing: f64,
    /// Budget policy.
    pub preserve_smoothing: bool,
}

impl ShapeFixture {
    /// A fixture with the same radius on every corner.
    pub const fn uniform(name: &'static str, width: f64, height: f64, radius: f64, smoothing: f64) -> Self {
        Self {
            name,
            width,
            height,
            radii: [radius; 4],
            smoothing,
            preserve_smoothing: false,
        }
    }

    /// The same fixture under the preserve-smoothing policy.
    pub const fn preserving(mut self, name: &'static str) -> Self {
        self.name = name;
        self.preserve_smoothing = true;
        self
    }

    /// Replace the radii.
    pub const fn with_radii(mut self, radii: [f64; 4]) -> Self {
        self.radii = radii;
        self
    }

    /// Top-left radius.
    pub const fn top_left(&self) -> f64 {
        self.radii[0]
    }

    /// Top-right radius.
    pub const fn top_right(&self) -> f64 {
        self.radii[1]
    }

    /// Bottom-right radius.
    pub const fn bottom_right(&self) -> f64 {
        self.radii[2]
    }

    /// Bottom-left radius.
    pub const fn bottom_left(&self) -> f64 {
        self.radii[3]
    }
}

/// Card-sized rectangle with room to spare on every corner.
pub const CARD: ShapeFixture = ShapeFixture::uniform("card", 120.0, 80.0, 16.0, 0.8);

/// Radius and smoothing far larger than the rectangle allows.
pub const STARVED: ShapeFixture = ShapeFixture::uniform("starved", 120.0, 80.0, 40.0, 1.0);

/// [`STARVED`] with smoothing preserved.
pub const STARVED_PRESERVED: ShapeFixture = STARVED.preserving("starved_preserved");

/// iOS app icon proportions.
pub const APP_ICON: ShapeFixture = ShapeFixture::uniform("app_icon", 100.0, 100.0, 22.37, 0.6);

/// A plain circular-fillet button.
pub const PILL: ShapeFixture = ShapeFixture::uniform("pill", 200.0, 40.0, 20.0, 0.0);

/// Only the top corners rounded, as on a sheet or tab.
pub const TAB: ShapeFixture = ShapeFixture::uniform("tab", 160.0, 48.0, 0.0, 0.6).with_radii([12.0, 12.0, 0.0, 0.0]);

/// A single rounded corner next to sharp neighbours.
pub const SPEECH_BUBBLE: ShapeFixture =
    ShapeFixture::uniform("speech_bubble", 100.0, 400.0, 0.0, 0.6).with_radii([0.0, 80.0, 0.0, 0.0]);

/// Four different radii.
pub const MIXED: ShapeFixture =
    ShapeFixture::uniform("mixed", 300.0, 200.0, 0.0, 0.5).with_radii([8.0, 24.0, 48.0, 0.0]);

/// All fixtures above.
pub fn shape_fixtures() -> Vec<ShapeFixture> {
    vec![
        CARD,
        STARVED,
        STARVED_PRESERVED,
        APP_ICON,
        PILL,
        TAB,
        SPEECH_BUBBLE,
        MIXED,
    ]
}
