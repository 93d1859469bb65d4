mod schema;
mod validation;

pub use schema::{Config, DriverRecord, TeamRecord, RATING_DEFAULT, RATING_MAX, RATING_MIN};
pub use validation::validate_config;

use crate::error::{PredictorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the config directory.
pub const CONFIG_FILE_NAME: &str = "f1_config.json";

/// Get the config directory path (e.g. ~/.config/grand-prixdictor/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("grand-prixdictor"))
}

/// Resolve which config file to read.
///
/// An explicit path always wins. Otherwise `./f1_config.json` is used when it
/// exists, falling back to `f1_config.json` inside the config directory.
pub fn resolve_config_path(path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = path {
        return path;
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }

    get_config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|p| p.exists())
        .unwrap_or(local)
}

/// Load the team/driver configuration.
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, see [`resolve_config_path`].
///
/// # Errors
///
/// Returns [`PredictorError::ConfigLoad`] if:
/// - The config file does not exist or cannot be read
/// - The content cannot be parsed (including missing or non-array `teams`/`drivers`)
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = resolve_config_path(path);
    tracing::info!("Loading config from {}", config_path.display());

    if !config_path.exists() {
        return Err(load_error(&config_path, "file not found"));
    }

    let content = fs::read_to_string(&config_path)
        .map_err(|e| load_error(&config_path, format!("failed to read file: {}", e)))?;

    parse_config(&config_path, &content)
}

/// Parse config text, choosing YAML or JSON from the file extension.
pub fn parse_config(path: &Path, content: &str) -> Result<Config> {
    if is_yaml(path) {
        serde_saphyr::from_str(content)
            .map_err(|e| load_error(path, format!("invalid YAML: {}", e)))
    } else {
        serde_json::from_str(content).map_err(|e| load_error(path, format!("invalid JSON: {}", e)))
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

fn load_error(path: &Path, message: impl Into<String>) -> PredictorError {
    PredictorError::ConfigLoad {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/some/where/custom.json");
        assert_eq!(resolve_config_path(Some(path.clone())), path);
    }

    #[test]
    fn test_parse_json_by_default() {
        let content = r#"{ "teams": [], "drivers": [] }"#;
        let config = parse_config(Path::new("grid.conf"), content).unwrap();
        assert!(config.teams.is_empty());
    }

    #[test]
    fn test_parse_yaml_by_extension() {
        let content = "teams: []\ndrivers: []\n";
        assert!(parse_config(Path::new("grid.YML"), content).is_ok());
        assert!(parse_config(Path::new("grid.json"), content).is_err());
    }

    #[test]
    fn test_missing_file_is_config_load_error() {
        let err = load_config(Some(PathBuf::from("/definitely/not/here.json"))).unwrap_err();
        match err {
            PredictorError::ConfigLoad { message, .. } => assert_eq!(message, "file not found"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_shape_is_config_load_error() {
        let err = parse_config(Path::new("f1.json"), r#"{ "teams": 3, "drivers": [] }"#)
            .unwrap_err();
        assert!(matches!(err, PredictorError::ConfigLoad { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }
}
