mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::CritterError;
use defaults::*;

/// Top-level Critter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub critter: CritterConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// General runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritterConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CritterConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Where the site lives and how its pages find their manifests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Local directory or `http(s)://` base URL of the published site.
    #[serde(default = "default_site_root")]
    pub root: String,
    /// Directory (relative to the site root) holding essay pages.
    #[serde(default = "default_essays_dir")]
    pub essays_dir: String,
    /// Manifest path as seen from the essay list page.
    #[serde(default = "default_list_manifest")]
    pub list_manifest: String,
    /// Manifest path as seen from an individual essay page.
    #[serde(default = "default_detail_manifest")]
    pub detail_manifest: String,
    /// Text an essay page shows in its date slot until the manifest fills it in.
    #[serde(default)]
    pub date_fallback: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_site_root(),
            essays_dir: default_essays_dir(),
            list_manifest: default_list_manifest(),
            detail_manifest: default_detail_manifest(),
            date_fallback: String::new(),
        }
    }
}

impl SiteConfig {
    /// Whether the site root points at a remote server rather than a directory.
    pub fn is_remote(&self) -> bool {
        self.root.starts_with("http://") || self.root.starts_with("https://")
    }
}

/// Preference storage config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, CritterError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| CritterError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CritterError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
