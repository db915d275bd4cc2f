use std::path::PathBuf;

/// Configuration paths for the Lacquer client
pub struct ConfigPaths {
    pub settings: PathBuf,
    pub cache_dir: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));

        Self {
            settings: config_dir.join("lacquer/settings.json"),
            cache_dir: config_dir.join("lacquer/cache"),
        }
    }

    /// Get the lacquer config directory
    pub fn config_dir(&self) -> PathBuf {
        self.settings
            .parent()
            .unwrap_or(&PathBuf::from("."))
            .to_path_buf()
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}
