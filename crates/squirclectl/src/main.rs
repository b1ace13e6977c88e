//! squirclectl - smoothed-corner rectangle outlines from the command line
//!
//! Prints SVG path data, per-corner curve parameters, or a standalone SVG
//! document for a rectangle with squircle corners.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod config;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::ShapeArgs;

#[derive(Parser)]
#[command(name = "squirclectl")]
#[command(about = "Generate smoothed-corner (squircle) rectangle outlines")]
#[command(version)]
#[command(long_about = "
squirclectl generates the outline of a rectangle whose corners blend into the
edges with a continuous-curvature transition, as SVG path data.

Shapes come from flags, from a JSON or YAML file given with --config, or both;
a flag always replaces the same field from the file.
Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Shape config file (JSON when the extension is .json, YAML otherwise)
    #[arg(short, long, global = true, env = "SQUIRCLECTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SVG path data for a shape
    Path(ShapeArgs),

    /// Print the curve parameters computed for each corner
    Params(ShapeArgs),

    /// Print a standalone SVG document containing the shape
    Svg {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Fill color for the path
        #[arg(long, default_value = "black")]
        fill: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("squirclectl={log_level},squircle_path={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute_command(&cli) {
        if cli.json {
            output::print_error_json(&e);
        } else {
            output::print_error_human(&e);
        }
        std::process::exit(error::exit_code(&e));
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Path(shape) => commands::path::execute(shape, config, cli.json),
        Commands::Params(shape) => commands::params::execute(shape, config, cli.json),
        Commands::Svg { shape, fill } => commands::svg::execute(shape, fill, config, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    // --- Global flag parsing ---

    #[test]
    fn parse_path_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["squirclectl", "path"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert!(matches!(&cli.command, Commands::Path(shape) if *shape == ShapeArgs::default()));
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_before_and_after_subcommand() -> TestResult {
        let before = Cli::try_parse_from(["squirclectl", "--json", "path"])?;
        assert!(before.json);
        let after = Cli::try_parse_from(["squirclectl", "params", "--json"])?;
        assert!(after.json);
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        for (args, expected) in [
            (vec!["squirclectl", "path"], 0),
            (vec!["squirclectl", "-v", "path"], 1),
            (vec!["squirclectl", "-vv", "path"], 2),
            (vec!["squirclectl", "path", "-vvv"], 3),
        ] {
            let cli = Cli::try_parse_from(args)?;
            assert_eq!(cli.verbose, expected);
        }
        Ok(())
    }

    #[test]
    fn parse_config_flag() -> TestResult {
        let cli = Cli::try_parse_from(["squirclectl", "svg", "--config", "shape.yaml"])?;
        assert_eq!(cli.config, Some(PathBuf::from("shape.yaml")));
        Ok(())
    }

    // --- Shape flags ---

    #[test]
    fn parse_shape_flags() -> TestResult {
        let cli = Cli::try_parse_from([
            "squirclectl",
            "path",
            "--width",
            "120",
            "--height",
            "80",
            "-r",
            "16",
            "--top-left",
            "4",
            "--bottom",
            "0",
            "--smoothing",
            "0.8",
            "--preserve-smoothing",
        ])?;
        match &cli.command {
            Commands::Path(shape) => {
                assert_eq!(shape.width, Some(120.0));
                assert_eq!(shape.height, Some(80.0));
                assert_eq!(shape.radius, Some(16.0));
                assert_eq!(shape.top_left, Some(4.0));
                assert_eq!(shape.bottom, Some(0.0));
                assert_eq!(shape.smoothing, Some(0.8));
                assert!(shape.preserve_smoothing);
            }
            _ => return Err("expected Path command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_negative_smoothing_value() -> TestResult {
        let cli = Cli::try_parse_from(["squirclectl", "params", "--smoothing", "-2"])?;
        match &cli.command {
            Commands::Params(shape) => assert_eq!(shape.smoothing, Some(-2.0)),
            _ => return Err("expected Params command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_svg_fill() -> TestResult {
        let cli = Cli::try_parse_from(["squirclectl", "svg", "--width", "10", "--fill", "#09f"])?;
        match &cli.command {
            Commands::Svg { shape, fill } => {
                assert_eq!(shape.width, Some(10.0));
                assert_eq!(fill, "#09f");
            }
            _ => return Err("expected Svg command".into()),
        }

        let cli = Cli::try_parse_from(["squirclectl", "svg"])?;
        assert!(matches!(&cli.command, Commands::Svg { fill, .. } if fill == "black"));
        Ok(())
    }

    #[test]
    fn parse_completion_bash() -> TestResult {
        let cli = Cli::try_parse_from(["squirclectl", "completion", "bash"])?;
        assert!(matches!(cli.command, Commands::Completion { .. }));
        Ok(())
    }

    // --- Rejection / error cases ---

    #[test]
    fn reject_bad_invocations() {
        for args in [
            vec!["squirclectl"],
            vec!["squirclectl", "nonexistent"],
            vec!["squirclectl", "path", "--width", "wide"],
            vec!["squirclectl", "path", "--radius"],
            vec!["squirclectl", "completion"],
            vec!["squirclectl", "completion", "cmd.exe"],
        ] {
            let result = Cli::try_parse_from(args.clone());
            assert!(matches!(result, Err(_)), "{args:?} should be rejected");
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
