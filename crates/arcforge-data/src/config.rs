//! `arcforge.toml` settings.
//!
//! ```toml
//! [data]
//! items_dir = "static/items"
//!
//! [display]
//! image_dir = "static/images"
//! image_extension = "png"
//! language = "en"
//! ```
//!
//! Every key is optional. A missing file yields the defaults.

use arcforge_core::display::DisplayConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::loader::DataLoadError;

/// File name looked up when no explicit config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "arcforge.toml";

/// Where item records are read from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub items_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            items_dir: PathBuf::from("static/items"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

impl Config {
    pub fn from_toml_str(content: &str, file: &Path) -> Result<Self, DataLoadError> {
        toml::from_str(content).map_err(|e| DataLoadError::Parse {
            file: file.to_path_buf(),
            detail: e.to_string(),
        })
    }

    /// Read the config at `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, path)
    }

    /// Read the config at `path`, or return the defaults if there is no
    /// file there.
    pub fn load_or_default(path: &Path) -> Result<Self, DataLoadError> {
        if path.is_file() {
            let config = Self::load(path)?;
            tracing::debug!(path = %path.display(), "Loaded config file");
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config = Config::from_toml_str("", Path::new("arcforge.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data.items_dir, PathBuf::from("static/items"));
        assert_eq!(config.display.image_dir, "static/images");
        assert_eq!(config.display.image_extension, "png");
        assert_eq!(config.display.language, "en");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
[data]
items_dir = "data/items"

[display]
language = "fr"
"#,
            Path::new("arcforge.toml"),
        )
        .unwrap();
        assert_eq!(config.data.items_dir, PathBuf::from("data/items"));
        assert_eq!(config.display.language, "fr");
        assert_eq!(config.display.image_extension, "png");
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let result = Config::from_toml_str("[data\nitems_dir = 3", Path::new("bad.toml"));
        assert!(matches!(result, Err(DataLoadError::Parse { .. })));
    }

    #[test]
    fn missing_file_yields_default() {
        let path = std::env::temp_dir().join("arcforge_config_test_missing.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
        assert!(matches!(Config::load(&path), Err(DataLoadError::Io(_))));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "arcforge_config_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[display]\nimage_dir = \"assets\"\n").unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.display.image_dir, "assets");
        let _ = std::fs::remove_file(&path);
    }
}
