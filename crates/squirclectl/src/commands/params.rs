//! `squirclectl params`: print the per-corner curve parameters

use std::path::Path;

use anyhow::Result;

use crate::commands::{ShapeArgs, resolve_options};
use crate::error::CliError;
use crate::output;

/// Execute the params command
pub fn execute(args: &ShapeArgs, config: Option<&Path>, json: bool) -> Result<()> {
    let options = resolve_options(config, args)?;
    let params = options.corner_params().map_err(CliError::from)?;
    output::print_params(&params, json)
}
