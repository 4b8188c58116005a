//! User settings stored as settings.json in the app data directory

use crate::constants::{CATALOG_URL, DEFAULT_CACHE_QUOTA};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Catalog source
    pub catalog_url: Option<String>,
    pub cache_quota_bytes: usize,

    // Status bar
    pub show_timing: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            catalog_url: None,
            cache_quota_bytes: DEFAULT_CACHE_QUOTA,
            show_timing: true,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn catalog_url_or_default(&self) -> String {
        self.catalog_url
            .clone()
            .unwrap_or_else(|| CATALOG_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.cache_quota_bytes, DEFAULT_CACHE_QUOTA);
        assert!(settings.show_timing);
        assert_eq!(settings.catalog_url_or_default(), CATALOG_URL);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "catalog_url": "http://localhost:8000/catalog.txt" }"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path());
        assert_eq!(
            settings.catalog_url_or_default(),
            "http://localhost:8000/catalog.txt"
        );
        assert_eq!(settings.cache_quota_bytes, DEFAULT_CACHE_QUOTA);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.catalog_url.is_none());
    }

    #[test]
    fn saved_geometry_is_restored() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(800.0),
            window_h: Some(600.0),
            show_timing: false,
            ..Settings::default()
        };
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_w, Some(800.0));
        assert_eq!(loaded.window_h, Some(600.0));
        assert!(!loaded.show_timing);
    }
}
