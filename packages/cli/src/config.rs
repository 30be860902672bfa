use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "sigforge.config.json";

/// Sigforge configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON file holding saved signatures
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Where `render` writes HTML files
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Longest side of resized avatar photos, in pixels
    #[serde(default = "default_avatar_max_size")]
    pub avatar_max_size: u32,

    /// Template used by `new` when no details are given
    #[serde(default = "default_template")]
    pub default_template: String,
}

fn default_store_path() -> String {
    "signatures.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_avatar_max_size() -> u32 {
    sigforge_avatar::DEFAULT_MAX_SIZE
}

fn default_template() -> String {
    "corporate-classic".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_store_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.store_path)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            out_dir: default_out_dir(),
            avatar_max_size: default_avatar_max_size(),
            default_template: default_template(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "storePath": "data/sigs.json",
            "outDir": "out",
            "avatarMaxSize": 96,
            "defaultTemplate": "minimalist"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.store_path, "data/sigs.json");
        assert_eq!(config.out_dir, "out");
        assert_eq!(config.avatar_max_size, 96);
        assert_eq!(config.default_template, "minimalist");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"outDir": "public"}"#).unwrap();
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.store_path, "signatures.json");
        assert_eq!(config.avatar_max_size, 150);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store_path, "signatures.json");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.default_template, "corporate-classic");
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_paths_are_relative_to_cwd() {
        let config = Config::default();
        assert_eq!(
            config.get_store_path("/work"),
            PathBuf::from("/work/signatures.json")
        );
        assert_eq!(config.get_out_dir("/work"), PathBuf::from("/work/dist"));
    }
}
