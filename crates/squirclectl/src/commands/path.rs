//! `squirclectl path`: print the SVG path data

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::commands::{ShapeArgs, resolve_options};
use crate::error::CliError;
use crate::output;

/// Execute the path command
pub fn execute(args: &ShapeArgs, config: Option<&Path>, json: bool) -> Result<()> {
    let options = resolve_options(config, args)?;
    let path = options.to_path().map_err(CliError::from)?;
    debug!(commands = path.len(), "Generated path");
    output::print_path(&options, &path, json)
}
