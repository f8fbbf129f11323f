use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::export::ExportFormat;
use crate::platform::Platform;
use crate::snapshot::DesignTokens;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Token tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    pub general: GeneralConfig,
    pub export: ExportConfig,
    /// Palette overrides keyed by color role.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub css_prefix: String,
}

impl TokenConfig {
    pub fn from_toml(s: &str) -> Result<Self, TokenError> {
        toml::from_str(s).map_err(|e| TokenError::Config(e.to_string()))
    }

    /// Load config: user file if it exists, otherwise built-in defaults.
    pub fn load() -> Result<Self, TokenError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            Self::from_toml(DEFAULT_CONFIG)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, TokenError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TokenError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            overrides = config.colors.len(),
            "loaded token config"
        );
        Ok(config)
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), TokenError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), TokenError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TokenError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "tempo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Platform to resolve for: explicit choice, then config, then the
    /// compilation target.
    pub fn platform(&self, explicit: Option<Platform>) -> Platform {
        explicit.or(self.general.platform).unwrap_or_else(|| {
            let current = Platform::current();
            tracing::debug!(%current, "no platform configured, using build target");
            current
        })
    }

    /// Resolve tokens with this config's color overrides.
    pub fn tokens(&self, platform: Platform) -> Result<DesignTokens, TokenError> {
        DesignTokens::with_overrides(platform, &self.colors)
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorRole;

    #[test]
    fn test_default_config_parses() {
        let config = TokenConfig::default();
        assert_eq!(config.export.format, ExportFormat::Json);
        assert_eq!(config.export.css_prefix, "tempo");
        assert!(config.colors.is_empty());
        assert_eq!(config.general.platform, None);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = TokenConfig::default();
        config.general.platform = Some(Platform::Ios);
        config.colors.insert("accent".into(), "#00AAFF".into());
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized = TokenConfig::from_toml(&serialized).unwrap();
        assert_eq!(deserialized.general.platform, Some(Platform::Ios));
        assert_eq!(deserialized.colors["accent"], "#00AAFF");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tempo").join("config.toml");
        let mut config = TokenConfig::default();
        config.export.format = ExportFormat::Css;
        config.colors.insert("warning".into(), "#ffcc00".into());
        config.save_to(&path).unwrap();

        let loaded = TokenConfig::load_from(&path).unwrap();
        assert_eq!(loaded.export.format, ExportFormat::Css);
        let tokens = loaded.tokens(Platform::Android).unwrap();
        assert_eq!(tokens.color(ColorRole::Warning), "#FFCC00");
        assert_eq!(tokens.color(ColorRole::WarningTint), "#FFCC0026");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TokenConfig::load_from(&dir.path().join("nope.toml"));
        assert!(matches!(err, Err(TokenError::Config(_))));
    }

    #[test]
    fn test_bad_platform_rejected() {
        let toml = r#"
            [general]
            platform = "symbian"

            [export]
            format = "json"
            css_prefix = ""
        "#;
        assert!(matches!(TokenConfig::from_toml(toml), Err(TokenError::Config(_))));
    }

    #[test]
    fn test_platform_precedence() {
        let mut config = TokenConfig::default();
        assert_eq!(config.platform(None), Platform::current());
        config.general.platform = Some(Platform::Web);
        assert_eq!(config.platform(None), Platform::Web);
        assert_eq!(config.platform(Some(Platform::Ios)), Platform::Ios);
    }
}
