use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// API key may also live in the credential store or OMDB_API_KEY;
    /// this field is a convenience for throwaway setups.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interactive mode refuses to start below this many columns.
    #[serde(default = "default_min_terminal_width")]
    pub min_terminal_width: u16,
    /// Query pre-filled when an interactive session starts.
    #[serde(default = "default_query")]
    pub default_query: String,
}

fn default_base_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_min_terminal_width() -> u16 {
    80
}

fn default_query() -> String {
    "inception".to_string()
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            min_terminal_width: default_min_terminal_width(),
            default_query: default_query(),
        }
    }
}

impl Config {
    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.omdb.base_url, "https://www.omdbapi.com/");
        assert_eq!(config.omdb.api_key, None);
        assert_eq!(config.ui.min_terminal_width, 80);
        assert_eq!(config.ui.default_query, "inception");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[omdb]").unwrap();
        writeln!(file, "api_key = \"abc123\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.omdb.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.omdb.base_url, "https://www.omdbapi.com/");
        assert_eq!(config.ui.min_terminal_width, 80);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.omdb.api_key = Some("abc123".to_string());
        config.ui.min_terminal_width = 100;
        config.save(&path).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.omdb.api_key.as_deref(), Some("abc123"));
        assert_eq!(reloaded.ui.min_terminal_width, 100);
    }
}
