//! Command implementations for squirclectl

pub mod params;
pub mod path;
pub mod svg;

use std::path::Path;

use clap::Args;
use squircle_path::SquircleOptions;

use crate::config;
use crate::error::CliError;

/// Shape flags shared by every generating command.
///
/// Each flag that is given replaces the same field from `--config`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ShapeArgs {
    /// Rectangle width
    #[arg(long)]
    pub width: Option<f64>,

    /// Rectangle height
    #[arg(long)]
    pub height: Option<f64>,

    /// Radius for every corner without a more specific override
    #[arg(short, long, alias = "corner-radius")]
    pub radius: Option<f64>,

    /// Radius for both top corners
    #[arg(long)]
    pub top: Option<f64>,

    /// Radius for both right corners
    #[arg(long)]
    pub right: Option<f64>,

    /// Radius for both bottom corners
    #[arg(long)]
    pub bottom: Option<f64>,

    /// Radius for both left corners
    #[arg(long)]
    pub left: Option<f64>,

    /// Top-left corner radius
    #[arg(long)]
    pub top_left: Option<f64>,

    /// Top-right corner radius
    #[arg(long)]
    pub top_right: Option<f64>,

    /// Bottom-right corner radius
    #[arg(long)]
    pub bottom_right: Option<f64>,

    /// Bottom-left corner radius
    #[arg(long)]
    pub bottom_left: Option<f64>,

    /// Corner smoothing, clamped into [0, 1]
    #[arg(short, long, allow_hyphen_values = true)]
    pub smoothing: Option<f64>,

    /// Keep full smoothing when the radius has to shrink
    #[arg(long)]
    pub preserve_smoothing: bool,
}

impl ShapeArgs {
    /// Overlay the given flags on `options`.
    pub fn apply_to(&self, mut options: SquircleOptions) -> SquircleOptions {
        let radii = &mut options.radii;
        for (flag, field) in [
            (self.radius, &mut radii.base),
            (self.top, &mut radii.top),
            (self.right, &mut radii.right),
            (self.bottom, &mut radii.bottom),
            (self.left, &mut radii.left),
            (self.top_left, &mut radii.top_left),
            (self.top_right, &mut radii.top_right),
            (self.bottom_right, &mut radii.bottom_right),
            (self.bottom_left, &mut radii.bottom_left),
        ] {
            if flag.is_some() {
                *field = flag;
            }
        }

        if self.width.is_some() {
            options.width = self.width;
        }
        if self.height.is_some() {
            options.height = self.height;
        }
        if let Some(smoothing) = self.smoothing {
            options.corner_smoothing = smoothing.into();
        }
        if self.preserve_smoothing {
            options.preserve_smoothing = true;
        }
        options
    }
}

/// Build the effective options from an optional config file and the flags.
pub fn resolve_options(config_path: Option<&Path>, args: &ShapeArgs) -> Result<SquircleOptions, CliError> {
    let base = match config_path {
        Some(path) => config::load_options(path)?,
        None => SquircleOptions::default(),
    };
    Ok(args.apply_to(base))
}
