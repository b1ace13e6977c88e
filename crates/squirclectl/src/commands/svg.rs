//! `squirclectl svg`: print a standalone SVG document

use std::path::Path;

use anyhow::Result;
use squircle_path::{RectSpec, SquirclePath, round_to_precision};

use crate::commands::{ShapeArgs, resolve_options};
use crate::error::CliError;
use crate::output;

/// Execute the svg command
pub fn execute(args: &ShapeArgs, fill: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let fill = validate_fill(fill)?;
    let options = resolve_options(config, args)?;
    let rect = options.rect().map_err(CliError::from)?;
    let path = options.to_path().map_err(CliError::from)?;
    output::print_svg(&render_document(rect, &path, fill), json)
}

/// Fill colors end up inside an attribute, so markup characters are refused.
fn validate_fill(fill: &str) -> Result<&str, CliError> {
    let fill = fill.trim();
    if fill.is_empty() || fill.contains(['"', '\'', '<', '>', '&']) {
        return Err(CliError::InvalidArgument(format!("unusable fill color {fill:?}")));
    }
    Ok(fill)
}

/// Wrap path data in an `<svg>` element sized to the rectangle.
pub fn render_document(rect: RectSpec, path: &SquirclePath, fill: &str) -> String {
    let width = round_to_precision(rect.width());
    let height = round_to_precision(rect.height());
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n  <path d=\"{path}\" fill=\"{fill}\"/>\n</svg>"
    )
}
