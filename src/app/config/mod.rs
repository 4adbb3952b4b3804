// SPDX-License-Identifier: MPL-2.0
//! User preferences, stored as `settings.toml` in the config directory.
//!
//! # Sections
//!
//! - `[general]` - theme selection
//! - `[server]` - proxy base URL and request timeout
//! - `[gallery]` - page sizes, grid columns, load-more smoothing delay
//! - `[lightbox]` - prefetch depth and fullsize cache budget
//!
//! `load()` never fails: a missing file yields defaults silently, an
//! unreadable or unparseable one yields defaults plus a warning message the
//! shell surfaces once. Explicit-path variants exist for tests.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeChoice>,
}

/// Proxy connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the album proxy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(
        default = "defaults::default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: defaults::default_timeout_secs(),
        }
    }
}

/// Gallery windowing and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Page size override. When unset, the size is chosen from the startup
    /// window width (narrow layouts page in smaller steps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<usize>,

    /// Thumbnail columns in the grid.
    #[serde(
        default = "defaults::default_grid_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_columns: Option<usize>,

    /// Smoothing delay applied before a load-more lands, in milliseconds.
    #[serde(
        default = "defaults::default_load_more_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub load_more_delay_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            items_per_page: None,
            grid_columns: defaults::default_grid_columns(),
            load_more_delay_ms: defaults::default_load_more_delay_ms(),
        }
    }
}

/// Lightbox prefetch settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Upcoming images fetched speculatively.
    #[serde(
        default = "defaults::default_prefetch_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefetch_count: Option<usize>,

    /// Fullsize cache budget in megabytes.
    #[serde(
        default = "defaults::default_cache_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_mb: Option<u32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            prefetch_count: defaults::default_prefetch_count(),
            cache_mb: defaults::default_cache_mb(),
        }
    }
}

/// The complete preference file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,
}

impl Config {
    /// Effective proxy base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.server.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Effective per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.server
                .timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Page size for a session starting at the given window width. Decided
    /// once at session start, never re-evaluated on resize.
    #[must_use]
    pub fn items_per_page_for_width(&self, width: f32) -> usize {
        if let Some(explicit) = self.gallery.items_per_page {
            return explicit.max(1);
        }
        if width < NARROW_WIDTH_THRESHOLD {
            DEFAULT_NARROW_ITEMS_PER_PAGE
        } else {
            DEFAULT_ITEMS_PER_PAGE
        }
    }

    #[must_use]
    pub fn grid_columns(&self) -> usize {
        self.gallery.grid_columns.unwrap_or(DEFAULT_GRID_COLUMNS).max(1)
    }

    #[must_use]
    pub fn load_more_delay(&self) -> Duration {
        Duration::from_millis(
            self.gallery
                .load_more_delay_ms
                .unwrap_or(DEFAULT_LOAD_MORE_DELAY_MS),
        )
    }

    #[must_use]
    pub fn prefetch_count(&self) -> usize {
        self.lightbox.prefetch_count.unwrap_or(DEFAULT_PREFETCH_COUNT)
    }

    #[must_use]
    pub fn cache_bytes(&self) -> usize {
        self.lightbox.cache_mb.unwrap_or(DEFAULT_CACHE_MB) as usize * 1024 * 1024
    }
}

/// Loads the config from the resolved config directory.
///
/// Returns the config plus an optional warning when the file existed but
/// could not be used; the caller decides how to surface it.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => (
            Config::default(),
            Some(format!("Ignoring unreadable settings file: {error}")),
        ),
    }
}

/// Loads the config from an explicit path. Fails on missing or malformed
/// files; used by tests and by `load()` above.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Saves the config to the resolved config directory, creating it if needed.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = config_file_path() else {
        return Err(crate::error::Error::Config(
            "no config directory available".to_string(),
        ));
    };
    save_to_path(config, &path)
}

/// Saves the config to an explicit path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(config)?;
    fs::write(path, serialized)?;
    Ok(())
}

fn config_file_path() -> Option<PathBuf> {
    paths::config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.grid_columns(), DEFAULT_GRID_COLUMNS);
        assert_eq!(config.load_more_delay(), Duration::from_millis(300));
        assert_eq!(config.prefetch_count(), 3);
        assert_eq!(config.cache_bytes(), 64 * 1024 * 1024);
    }

    #[test]
    fn page_size_depends_on_startup_width() {
        let config = Config::default();
        assert_eq!(config.items_per_page_for_width(800.0), DEFAULT_NARROW_ITEMS_PER_PAGE);
        assert_eq!(config.items_per_page_for_width(1280.0), DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn explicit_page_size_wins_over_width_policy() {
        let mut config = Config::default();
        config.gallery.items_per_page = Some(50);
        assert_eq!(config.items_per_page_for_width(640.0), 50);
        assert_eq!(config.items_per_page_for_width(1920.0), 50);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("settings.toml");

        let mut config = Config::default();
        config.server.base_url = Some("http://photos.local:9000".to_string());
        config.gallery.items_per_page = Some(120);
        config.general.theme = Some(ThemeChoice::Light);

        save_to_path(&config, &path).expect("save config");
        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(config, loaded);
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "").expect("write file");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn malformed_file_is_an_error_from_explicit_path() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not toml at all [[[").expect("write file");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[gallery]\nitems_per_page = 42\n").expect("write file");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.gallery.items_per_page, Some(42));
        assert_eq!(loaded.base_url(), DEFAULT_BASE_URL);
    }
}
