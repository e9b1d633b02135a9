//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Orgdex configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format
    pub default_format: Option<String>,

    /// Path to the favorites file
    pub favorites: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/orgdex/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(format) = std::env::var("ORGDEX_FORMAT") {
            config.default_format = Some(format);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "orgdex")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.favorites.is_some() {
            self.favorites = other.favorites;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config {
            default_format: Some("tsv".to_string()),
            favorites: None,
        };
        base.merge(Config {
            default_format: Some("json".to_string()),
            favorites: Some(PathBuf::from("/tmp/favs.json")),
        });
        assert_eq!(base.default_format.as_deref(), Some("json"));
        assert_eq!(
            base.favorites.as_deref(),
            Some(std::path::Path::new("/tmp/favs.json"))
        );
    }

    #[test]
    fn test_merge_keeps_base_when_other_is_empty() {
        let mut base = Config {
            default_format: Some("md".to_string()),
            favorites: None,
        };
        base.merge(Config::default());
        assert_eq!(base.default_format.as_deref(), Some("md"));
    }
}
