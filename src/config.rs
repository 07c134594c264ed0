use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::content::LanguageCode;

/// Persisted preferences: the language pair and the UI theme. Read once at
/// startup (a snapshot); written whole on explicit change, last write wins.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_native_language")]
    pub native_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_native_language() -> String {
    "en".to_string()
}
fn default_target_language() -> String {
    "tr".to_string()
}
fn default_theme() -> String {
    "classic".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            native_language: default_native_language(),
            target_language: default_target_language(),
            theme: default_theme(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quizling")
            .join("config.toml")
    }

    pub fn native(&self) -> LanguageCode {
        LanguageCode::from_code(&self.native_language).unwrap_or(LanguageCode::En)
    }

    pub fn target(&self) -> LanguageCode {
        LanguageCode::from_code(&self.target_language).unwrap_or(LanguageCode::Tr)
    }

    /// Reset unrecognized language codes to the defaults. Call after
    /// deserialization to handle hand-edited or stale config files.
    pub fn normalize(&mut self) {
        if LanguageCode::from_code(&self.native_language).is_none() {
            self.native_language = default_native_language();
        }
        if LanguageCode::from_code(&self.target_language).is_none() {
            self.target_language = default_target_language();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_round_trips_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.native_language = "fr".to_string();
        config.target_language = "ja".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.native_language, "fr");
        assert_eq!(loaded.target_language, "ja");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.native_language, "en");
        assert_eq!(config.target_language, "tr");
    }

    #[test]
    fn test_load_garbage_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.native_language, "en");
        assert_eq!(config.target_language, "tr");
        assert_eq!(config.theme, "classic");
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_fields() {
        let config: Config = toml::from_str(r#"native_language = "de""#).unwrap();
        assert_eq!(config.native_language, "de");
        assert_eq!(config.target_language, "tr");
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut config = Config::default();
        config.native_language = "ja".to_string();
        config.target_language = "pt".to_string();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.native_language, "ja");
        assert_eq!(deserialized.target_language, "pt");
    }

    #[test]
    fn test_normalize_keeps_valid_codes() {
        let mut config = Config::default();
        config.native_language = "ru".to_string();
        config.target_language = "fa".to_string();
        config.normalize();
        assert_eq!(config.native_language, "ru");
        assert_eq!(config.target_language, "fa");
    }

    #[test]
    fn test_normalize_resets_unknown_codes() {
        let mut config = Config::default();
        config.native_language = "klingon".to_string();
        config.target_language = String::new();
        config.normalize();
        assert_eq!(config.native_language, "en");
        assert_eq!(config.target_language, "tr");
    }

    #[test]
    fn test_typed_accessors_fall_back_to_defaults() {
        let mut config = Config::default();
        config.native_language = "bogus".to_string();
        config.target_language = "bogus".to_string();
        assert_eq!(config.native(), LanguageCode::En);
        assert_eq!(config.target(), LanguageCode::Tr);
    }
}
