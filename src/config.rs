/// Application settings
///
/// Defaults match the layout the dashboard ships with. A JSON settings
/// file can override them, and command-line flags override both.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Command-line flags
#[derive(Parser, Debug, Default)]
#[command(name = "mining-zones")]
#[command(about = "Browse satellite imagery and risk profiles of Indian mining zones")]
pub struct Args {
    /// Settings file (JSON); defaults to <config dir>/mining-zones/settings.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding one image folder per zone
    #[arg(long)]
    pub image_root: Option<PathBuf>,

    /// Zone features CSV
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Image shown on the home screen
    #[arg(long)]
    pub home_cover: Option<PathBuf>,

    /// Prefix of zone folder names
    #[arg(long)]
    pub folder_prefix: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub image_root: PathBuf,
    pub dataset_path: PathBuf,
    pub home_cover: PathBuf,
    pub folder_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from("data"),
            dataset_path: PathBuf::from("zone_features.csv"),
            home_cover: PathBuf::from("satellite_cover.png"),
            folder_prefix: "data_".to_string(),
        }
    }
}

impl Settings {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Default location of the settings file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mining-zones").join("settings.json"))
    }

    /// Read a settings file; a missing file yields the defaults
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("⚙️  Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Resolve settings from the file named by `args` (or the default
    /// location), then apply the command-line overrides
    pub fn resolve(args: Args) -> Result<Self, ConfigError> {
        let mut settings = match args.config.clone().or_else(Self::default_path) {
            Some(path) => Self::load_file(&path)?,
            None => Self::default(),
        };
        settings.apply_overrides(args);
        Ok(settings)
    }

    fn apply_overrides(&mut self, args: Args) {
        if let Some(root) = args.image_root {
            self.image_root = root;
        }
        if let Some(dataset) = args.dataset {
            self.dataset_path = dataset;
        }
        if let Some(cover) = args.home_cover {
            self.home_cover = cover;
        }
        if let Some(prefix) = args.folder_prefix {
            self.folder_prefix = prefix;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_file(Path::new("/nonexistent/settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "image_root": "/srv/imagery" }"#).unwrap();

        let settings = Settings::load_file(&path).unwrap();
        assert_eq!(settings.image_root, PathBuf::from("/srv/imagery"));
        assert_eq!(settings.folder_prefix, "data_");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(Settings::load_file(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let from_file = Settings {
            dataset_path: PathBuf::from("file.csv"),
            image_root: PathBuf::from("file_images"),
            ..Settings::default()
        };
        std::fs::write(&path, from_file.to_json().unwrap()).unwrap();

        let args = Args::parse_from([
            "mining-zones",
            "--config",
            path.to_str().unwrap(),
            "--dataset",
            "cli.csv",
        ]);
        let settings = Settings::resolve(args).unwrap();

        assert_eq!(settings.dataset_path, PathBuf::from("cli.csv"));
        assert_eq!(settings.image_root, PathBuf::from("file_images"));
    }
}
