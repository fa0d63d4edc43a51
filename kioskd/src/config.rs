use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_ZOOM: f64 = 1.0;

/// The persisted user-settable record. Every field carries a serde default
/// so a partial or hand-edited config file still loads; unknown keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub show_cursor: bool,
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            url: String::new(),
            zoom: DEFAULT_ZOOM,
            show_cursor: false,
        }
    }
}

/// Whole-file JSON persistence for the configuration. Reads never fail to
/// the caller (defaults on any problem) and writes only log on failure; a
/// broken disk must not take the kiosk down.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Well-known config location (`<config dir>/kioskd/config.json`),
    /// falling back to the working directory when no config dir resolves.
    pub fn default_location() -> Self {
        let path = dirs::config_dir()
            .map(|dir| dir.join("kioskd").join("config.json"))
            .unwrap_or_else(|| PathBuf::from("kioskd_config.json"));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Configuration {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {:?}, using defaults: {}", self.path, e);
                    Configuration::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Configuration::default(),
            Err(e) => {
                tracing::warn!("Failed to read {:?}, using defaults: {}", self.path, e);
                Configuration::default()
            }
        }
    }

    pub fn save(&self, config: &Configuration) {
        if let Err(e) = self.try_save(config) {
            tracing::warn!("Failed to save config to {:?}: {}", self.path, e);
        }
    }

    fn try_save(&self, config: &Configuration) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ConfigStore {
        let path = std::env::temp_dir().join(format!(
            "kioskd-test-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        ConfigStore::new(path)
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.load(), Configuration::default());
    }

    #[test]
    fn test_load_backfills_missing_fields() {
        let config: Configuration =
            serde_json::from_str(r#"{"url": "http://example.com"}"#).unwrap();
        assert_eq!(config.url, "http://example.com");
        assert_eq!(config.zoom, 1.0);
        assert!(!config.show_cursor);
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let config: Configuration =
            serde_json::from_str(r#"{"url": "a", "zoom": 1.5, "show_cursor": true, "theme": "dark"}"#)
                .unwrap();
        assert_eq!(config.url, "a");
        assert_eq!(config.zoom, 1.5);
        assert!(config.show_cursor);
    }

    #[test]
    fn test_load_parse_failure_returns_defaults() {
        let store = temp_store("garbage");
        fs::write(store.path(), "not json at all").unwrap();
        assert_eq!(store.load(), Configuration::default());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_save_load_roundtrip_is_idempotent() {
        let store = temp_store("roundtrip");
        let config = Configuration {
            url: "https://grafana.local/d/abc".to_string(),
            zoom: 1.5,
            show_cursor: true,
        };
        store.save(&config);
        let loaded = store.load();
        assert_eq!(loaded, config);

        store.save(&loaded);
        assert_eq!(store.load(), loaded);
        let _ = fs::remove_file(store.path());
    }
}
