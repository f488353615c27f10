// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and restores the extraction configuration as JSON.
//
// The effective configuration (file + command-line overrides) is
// written next to the emitted data, so every dataset directory records
// the filter policy and purposes it was built with:
//
//   data/
//     lez-all_txts_L_surface_segmentation.input
//     ...
//     extract_config.json

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::extract_use_case::ExtractConfig;

/// File name of the saved configuration
pub const CONFIG_FILE: &str = "extract_config.json";

pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save the configuration to `<dir>/extract_config.json`.
    pub fn save_config(&self, cfg: &ExtractConfig) -> Result<PathBuf> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved extraction config to '{}'", path.display());
        Ok(path)
    }

    /// Load a configuration file. Missing fields take their defaults.
    pub fn load_config(path: &Path) -> Result<ExtractConfig> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("out")).unwrap();

        let cfg = ExtractConfig {
            write_master: true,
            purposes: vec!["pos".into()],
            ..ExtractConfig::default()
        };

        let path = store.save_config(&cfg).unwrap();
        assert_eq!(ConfigStore::load_config(&path).unwrap(), cfg);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{ "purposes": ["gls"], "filter": { "require_glosses": false } }"#).unwrap();

        let cfg = ConfigStore::load_config(&path).unwrap();
        assert_eq!(cfg.purposes, vec!["gls"]);
        assert!(!cfg.filter.require_glosses);
        assert!(cfg.filter.require_segmented);
        assert_eq!(cfg.out_dir, ExtractConfig::default().out_dir);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(ConfigStore::load_config(&path).is_err());
    }
}
