//! Error types for squirclectl

use std::path::PathBuf;

use squircle_path::GeometryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Geometry(_) => 2,
            CliError::ConfigRead { .. } | CliError::JsonError(_) | CliError::YamlError(_) => 4,
            CliError::InvalidArgument(_) => 1,
        }
    }

    /// Short machine-readable name used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Geometry(_) => "geometry",
            CliError::ConfigRead { .. } => "config_read",
            CliError::JsonError(_) => "json",
            CliError::YamlError(_) => "yaml",
            CliError::InvalidArgument(_) => "invalid_argument",
        }
    }
}

/// Map any command failure to a process exit code.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<CliError>() {
        Some(e) => e.exit_code(),
        None if error.downcast_ref::<GeometryError>().is_some() => 2,
        None => 1,
    }
}
