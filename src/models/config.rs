use dmc_quantize::{EncodeError, SymbolAlphabet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::MAX_PREVIEW_CELL_SIZE;

/// Config file read when `CONFIG_FILE` is not set
pub const DEFAULT_CONFIG_FILE: &str = "stitchgrid.yaml";

/// Application configuration loaded from stitchgrid.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Palette CSV file
    pub palette_file: PathBuf,

    /// Directory that receives generated patterns
    pub results_dir: PathBuf,

    /// Custom symbol alphabet (defaults to A-Z)
    pub alphabet: Option<String>,

    /// Palette column holding the thread label (defaults to Floss/DMC/Label)
    pub label_column: Option<String>,

    /// Preview image settings
    pub preview: PreviewConfig,
}

/// Settings for the PNG preview
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Edge length of one stitch in pixels
    pub cell_size: u32,

    /// Which color each stitch is painted with
    pub colors: ColorSource,
}

/// Color used to paint a stitch in previews and sheets
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorSource {
    /// The source pixel color
    Real,
    /// The matched thread color
    #[default]
    Dmc,
}

impl std::str::FromStr for ColorSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "real" => Ok(ColorSource::Real),
            "dmc" | "palette" => Ok(ColorSource::Dmc),
            other => Err(format!("unknown color source '{other}' (expected real or dmc)")),
        }
    }
}

fn default_cell_size() -> u32 {
    12
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            colors: ColorSource::default(),
        }
    }
}

impl PreviewConfig {
    /// Replace a zero or oversized cell size with the default
    fn clamp_cell_size(&mut self) {
        if self.cell_size == 0 || self.cell_size > MAX_PREVIEW_CELL_SIZE {
            tracing::warn!(
                cell_size = self.cell_size,
                max = MAX_PREVIEW_CELL_SIZE,
                "Invalid preview cell size, using default"
            );
            self.cell_size = default_cell_size();
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette_file: PathBuf::from("Sprites/DMC.csv"),
            results_dir: PathBuf::from("Results"),
            alphabet: None,
            label_column: None,
            preview: PreviewConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration the way the CLI does: `CONFIG_FILE` (or
    /// stitchgrid.yaml), then `PALETTE_FILE` / `RESULTS_DIR` overrides.
    pub fn load() -> Self {
        let path = std::env::var("CONFIG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = Self::load_from_path(&path);
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration from a YAML file, falling back to defaults
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(mut config) => {
                    config.preview.clamp_cell_size();
                    tracing::info!(
                        path = %path.display(),
                        palette = %config.palette_file.display(),
                        results = %config.results_dir.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply `PALETTE_FILE` and `RESULTS_DIR` using the given lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(palette) = lookup("PALETTE_FILE").filter(|v| !v.is_empty()) {
            self.palette_file = PathBuf::from(palette);
        }
        if let Some(results) = lookup("RESULTS_DIR").filter(|v| !v.is_empty()) {
            self.results_dir = PathBuf::from(results);
        }
    }

    /// Resolve the configured symbol alphabet
    pub fn symbol_alphabet(&self) -> Result<SymbolAlphabet, EncodeError> {
        match self.alphabet.as_deref() {
            Some(symbols) => SymbolAlphabet::new(symbols),
            None => Ok(SymbolAlphabet::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.palette_file, PathBuf::from("Sprites/DMC.csv"));
        assert_eq!(config.results_dir, PathBuf::from("Results"));
        assert!(config.alphabet.is_none());
        assert!(config.label_column.is_none());
        assert_eq!(config.preview.cell_size, 12);
        assert_eq!(config.preview.colors, ColorSource::Dmc);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
palette_file: threads/anchor.csv
results_dir: out
alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
label_column: Anchor
preview:
  cell_size: 20
  colors: real
"#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.palette_file, PathBuf::from("threads/anchor.csv"));
        assert_eq!(config.results_dir, PathBuf::from("out"));
        assert_eq!(config.label_column.as_deref(), Some("Anchor"));
        assert_eq!(config.preview.cell_size, 20);
        assert_eq!(config.preview.colors, ColorSource::Real);
        assert_eq!(config.symbol_alphabet().unwrap().capacity(), 36);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("results_dir: patterns\n").unwrap();

        assert_eq!(config.results_dir, PathBuf::from("patterns"));
        assert_eq!(config.palette_file, PathBuf::from("Sprites/DMC.csv"));
        assert_eq!(config.preview, PreviewConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [("PALETTE_FILE", "/tmp/dmc.csv"), ("RESULTS_DIR", "")]
            .into_iter()
            .collect();

        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.palette_file, PathBuf::from("/tmp/dmc.csv"));
        // Empty values are ignored
        assert_eq!(config.results_dir, PathBuf::from("Results"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load_from_path(Path::new("/nonexistent/stitchgrid.yaml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stitchgrid.yaml");
        std::fs::write(&path, "preview: 42\n").unwrap();

        assert_eq!(AppConfig::load_from_path(&path), AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stitchgrid.yaml");
        std::fs::write(&path, "alphabet: XO\n").unwrap();

        let config = AppConfig::load_from_path(&path);
        assert_eq!(config.alphabet.as_deref(), Some("XO"));
    }

    #[test]
    fn test_oversized_cell_size_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stitchgrid.yaml");
        std::fs::write(&path, "preview:\n  cell_size: 4294967295\n  colors: real\n").unwrap();

        let config = AppConfig::load_from_path(&path);
        assert_eq!(config.preview.cell_size, 12);
        assert_eq!(config.preview.colors, ColorSource::Real);
    }

    #[test]
    fn test_invalid_alphabet() {
        let config = AppConfig {
            alphabet: Some("AA".to_string()),
            ..Default::default()
        };
        assert!(config.symbol_alphabet().is_err());
    }

    #[test]
    fn test_color_source_from_str() {
        assert_eq!("REAL".parse::<ColorSource>().unwrap(), ColorSource::Real);
        assert_eq!("palette".parse::<ColorSource>().unwrap(), ColorSource::Dmc);
        assert!("sepia".parse::<ColorSource>().is_err());
    }
}
