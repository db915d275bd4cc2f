use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigPaths;

/// Client settings (settings.json)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_page_size: Option<u32>,
}

impl AppSettings {
    /// Get the default settings path
    pub fn default_path() -> PathBuf {
        ConfigPaths::new().settings
    }

    /// Load settings; a missing or corrupt file yields the defaults
    pub fn load(path: &PathBuf) -> Self {
        std::fs::read(path)
            .ok()
            .and_then(|data| serde_json::from_slice(&data).ok())
            .unwrap_or_default()
    }

    pub fn save_to(&self, path: &PathBuf) -> anyhow::Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Invalid path"))?;
        std::fs::create_dir_all(dir)?;
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Save to the default settings path
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::default_path())
    }

    // Accessors with defaults

    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or("https://api.lacquer.app")
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(15)
    }

    pub fn feed_page_size(&self) -> u32 {
        self.feed_page_size.unwrap_or(30)
    }

    // Setters that set Option values

    pub fn set_api_base_url(&mut self, val: &str) {
        self.api_base_url = Some(val.to_string());
    }

    pub fn set_request_timeout_secs(&mut self, val: u64) {
        self.request_timeout_secs = Some(val);
    }

    pub fn set_feed_page_size(&mut self, val: u32) {
        self.feed_page_size = Some(val);
    }
}
