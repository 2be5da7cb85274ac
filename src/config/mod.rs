mod theme;

pub use theme::Theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{Result, SettingsError};

const CONFIG_DIR: &str = "safety-config";
const SETTINGS_FILE: &str = "settings.toml";
const THEME_FILE: &str = "theme.toml";
const LOG_FILE: &str = "safety-config.log";

pub const DEFAULT_API_URL: &str = "https://pyup.io/api";

/// Where the Safety DB vulnerability data comes from. Exactly one source
/// is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SafetyDbMode {
    /// No vulnerability checking at all.
    Disabled,
    /// The database snapshot shipped with the scanner.
    Bundled,
    /// The hosted PyUP API (requires an API key).
    Api,
    /// A self-hosted database URL.
    Custom,
}

impl SafetyDbMode {
    pub const ALL: &'static [SafetyDbMode] = &[
        SafetyDbMode::Disabled,
        SafetyDbMode::Bundled,
        SafetyDbMode::Api,
        SafetyDbMode::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyDbMode::Disabled => "disabled",
            SafetyDbMode::Bundled => "bundled",
            SafetyDbMode::Api => "api",
            SafetyDbMode::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SafetyDbMode::Disabled => "Disabled",
            SafetyDbMode::Bundled => "Bundled database",
            SafetyDbMode::Api => "PyUP API",
            SafetyDbMode::Custom => "Custom URL",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SafetyDbMode::Disabled => "Do not check packages against Safety DB",
            SafetyDbMode::Bundled => "Use the database snapshot shipped with the scanner",
            SafetyDbMode::Api => "Query the PyUP API with your API key",
            SafetyDbMode::Custom => "Fetch the database from a self-hosted URL",
        }
    }
}

impl Default for SafetyDbMode {
    fn default() -> Self {
        SafetyDbMode::Bundled
    }
}

// A settings file written by an older version (or edited by hand) may hold
// a mode string we do not recognize. That degrades to Bundled rather than
// failing the whole load; the warning keeps the rewrite visible in the log.
impl From<String> for SafetyDbMode {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "disabled" => SafetyDbMode::Disabled,
            "bundled" => SafetyDbMode::Bundled,
            "api" => SafetyDbMode::Api,
            "custom" => SafetyDbMode::Custom,
            other => {
                tracing::warn!("Unrecognized safety_db_mode {:?}, falling back to bundled", other);
                SafetyDbMode::Bundled
            }
        }
    }
}

/// The persisted scanner security settings this tool edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    pub pyup_api_key: String,
    pub pyup_api_url: String,
    pub pyup_custom_url: String,
    pub safety_db_mode: SafetyDbMode,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            pyup_api_key: String::new(),
            pyup_api_url: DEFAULT_API_URL.to_string(),
            pyup_custom_url: String::new(),
            safety_db_mode: SafetyDbMode::Bundled,
        }
    }
}

pub struct ConfigManager {
    config_dir: PathBuf,
    settings: SecuritySettings,
    theme: Theme,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_dir = Self::default_config_dir()?;
        Ok(Self::with_dir(config_dir))
    }

    /// Build a manager rooted at an explicit directory (CLI override, tests).
    pub fn with_dir(config_dir: PathBuf) -> Self {
        let settings = Self::load_settings(&config_dir);
        let theme = Self::load_theme(&config_dir);

        Self {
            config_dir,
            settings,
            theme,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn settings(&self) -> &SecuritySettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SecuritySettings {
        &mut self.settings
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.config_dir.join(LOG_FILE)
    }

    pub fn save_settings(&self) -> Result<()> {
        self.ensure_config_dir()?;
        let path = self.settings_path();
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(&path, content)
            .map_err(|e| SettingsError::Config(format!("Failed to write settings: {}", e)))?;
        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn reload_settings(&mut self) {
        self.settings = Self::load_settings(&self.config_dir);
    }

    /// Strict variant for one-shot reads: errors instead of defaulting when
    /// the file is absent.
    pub fn load_settings_required(&self) -> Result<SecuritySettings> {
        let path = self.settings_path();
        if !path.exists() {
            return Err(SettingsError::ConfigNotFound { path });
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| SettingsError::Config(format!("Failed to read settings: {}", e)))?;
        toml::from_str(&content)
            .map_err(|e| SettingsError::Config(format!("Failed to parse settings: {}", e)))
    }

    fn default_config_dir() -> Result<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR))
            .ok_or_else(|| SettingsError::Config("Could not determine config directory".to_string()))
    }

    fn load_settings(config_dir: &Path) -> SecuritySettings {
        let path = config_dir.join(SETTINGS_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_theme(config_dir: &Path) -> Theme {
        let path = config_dir.join(THEME_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_toml_file<T: for<'de> Deserialize<'de>>(path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn ensure_config_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)
                .map_err(|e| SettingsError::Config(format!("Failed to create config dir: {}", e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_settings() {
        let settings = SecuritySettings::default();
        assert_eq!(settings.pyup_api_key, "");
        assert_eq!(settings.pyup_api_url, DEFAULT_API_URL);
        assert_eq!(settings.pyup_custom_url, "");
        assert_eq!(settings.safety_db_mode, SafetyDbMode::Bundled);
    }

    #[test]
    fn test_settings_serialization_round_trip() {
        let mut settings = SecuritySettings::default();
        settings.pyup_api_key = "abc123".to_string();
        settings.safety_db_mode = SafetyDbMode::Api;

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: SecuritySettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        let settings = SecuritySettings {
            safety_db_mode: SafetyDbMode::Custom,
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        assert!(toml_str.contains("safety_db_mode = \"custom\""));
    }

    #[test]
    fn test_unknown_mode_falls_back_to_bundled() {
        let parsed: SecuritySettings =
            toml::from_str("safety_db_mode = \"cloud\"").unwrap();
        assert_eq!(parsed.safety_db_mode, SafetyDbMode::Bundled);
    }

    #[test]
    fn test_mode_parsing_is_case_insensitive() {
        let parsed: SecuritySettings =
            toml::from_str("safety_db_mode = \"Disabled\"").unwrap();
        assert_eq!(parsed.safety_db_mode, SafetyDbMode::Disabled);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().join("nonexistent"));
        assert_eq!(*manager.settings(), SecuritySettings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ConfigManager::with_dir(dir.path().to_path_buf());

        manager.settings_mut().pyup_api_key = "key-1".to_string();
        manager.settings_mut().safety_db_mode = SafetyDbMode::Api;
        manager.save_settings().unwrap();

        let reloaded = ConfigManager::with_dir(dir.path().to_path_buf());
        assert_eq!(reloaded.settings().pyup_api_key, "key-1");
        assert_eq!(reloaded.settings().safety_db_mode, SafetyDbMode::Api);
    }

    #[test]
    fn test_load_settings_required_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().to_path_buf());
        assert!(matches!(
            manager.load_settings_required(),
            Err(SettingsError::ConfigNotFound { .. })
        ));
    }
}
