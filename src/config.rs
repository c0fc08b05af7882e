use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default backend address when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable that overrides the configured base address
pub const BASE_URL_ENV: &str = "DURGA_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend, e.g. "http://localhost:5000"
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load config from the default location, falling back to defaults when
    /// no file exists. The DURGA_API_URL environment variable wins over both.
    pub fn load() -> Result<Self> {
        let mut config = match Self::get_config_path() {
            Ok(path) => Self::load_from(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.base_url = url;
        }

        Ok(config)
    }

    /// Load config from a specific file; defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Save config to a specific file, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("durga-client").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_config_serialization() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.base_url, parsed.base_url);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let parsed: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ClientConfig {
            base_url: "http://localhost:6000".to_string(),
        };
        config.save_to(&path).unwrap();

        let parsed = ClientConfig::load_from(&path).unwrap();
        assert_eq!(parsed.base_url, "http://localhost:6000");
    }

    #[test]
    fn test_load_from_missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let parsed = ClientConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(parsed.base_url, DEFAULT_BASE_URL);
    }

    // The only test in the crate that touches DURGA_API_URL; the var is
    // cleared before asserting so a failure cannot leak it to other tests.
    #[test]
    fn test_env_var_overrides_configured_url() {
        std::env::set_var(BASE_URL_ENV, "http://localhost:7000");
        let loaded = ClientConfig::load();
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(loaded.unwrap().base_url, "http://localhost:7000");
    }
}
