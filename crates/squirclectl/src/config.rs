//! Loading shape options from JSON or YAML files

use std::fs;
use std::path::Path;

use squircle_path::SquircleOptions;
use tracing::debug;

use crate::error::CliError;

/// Config file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse options from file contents.
pub fn parse_options(content: &str, format: ConfigFormat) -> Result<SquircleOptions, CliError> {
    let options = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(options)
}

/// Read options from `path`.
pub fn load_options(path: &Path) -> Result<SquircleOptions, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let format = ConfigFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Loading shape config");
    parse_options(&content, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use squircle_path::Smoothing;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("card.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("card.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("card.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("card.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("card")), ConfigFormat::Yaml);
    }

    #[test]
    fn parses_json_options() -> TestResult {
        let options = parse_options(
            r#"{"width": 120, "height": 80, "corner_radius": 16, "corner_smoothing": 0.8}"#,
            ConfigFormat::Json,
        )?;
        assert_eq!(options.width, Some(120.0));
        assert_eq!(options.height, Some(80.0));
        assert_eq!(options.radii.base, Some(16.0));
        assert_eq!(options.corner_smoothing, Smoothing::new(0.8));
        Ok(())
    }

    #[test]
    fn parses_yaml_options() -> TestResult {
        let options = parse_options(
            "width: 160\nheight: 48\ntop: 12\ncorner_smoothing: 0.6\npreserve_smoothing: true\n",
            ConfigFormat::Yaml,
        )?;
        assert_eq!(options.radii.top, Some(12.0));
        assert!(options.preserve_smoothing);
        Ok(())
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let err = parse_options("{width: ", ConfigFormat::Json);
        assert!(matches!(err, Err(CliError::JsonError(_))));

        let err = parse_options("width: [1, 2", ConfigFormat::Yaml);
        assert!(matches!(err, Err(CliError::YamlError(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_options(Path::new("/nonexistent/squircle.yaml"));
        assert!(matches!(err, Err(CliError::ConfigRead { .. })));
    }
}
