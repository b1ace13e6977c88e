//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::Colorize;
use serde_json::json;
use squircle_path::{Corner, CornerPathParams, Corners, SquircleOptions, SquirclePath};

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {error}", "Error:".red().bold());

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(e) => e.kind(),
        None => "error",
    }
}

/// Print the generated path
pub fn print_path(options: &SquircleOptions, path: &SquirclePath, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "width": options.width,
            "height": options.height,
            "path": path.to_svg_path_data(),
            "commands": path.commands(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{path}");
    }
    Ok(())
}

/// Print per-corner parameters as a table or JSON
pub fn print_params(params: &Corners<CornerPathParams>, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "corners": params,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:<13} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>7}",
            "corner", "radius", "smoothing", "p", "a", "b", "c", "d", "arc", "arc°"
        )
        .bold()
    );
    for corner in Corner::ALL {
        print_params_row(corner, params.get(corner));
    }
    Ok(())
}

fn print_params_row(corner: Corner, p: &CornerPathParams) {
    let name = format!("{:<13}", corner.as_str());
    let name = if p.is_straight() { name.dimmed() } else { name.cyan() };
    println!(
        "{} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>7.2}",
        name,
        p.corner_radius,
        p.smoothing,
        p.p,
        p.a,
        p.b,
        p.c,
        p.d,
        p.arc_section_length,
        p.arc_measure_degrees
    );
}

/// Print an SVG document
pub fn print_svg(document: &str, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "svg": document,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{document}");
    }
    Ok(())
}
