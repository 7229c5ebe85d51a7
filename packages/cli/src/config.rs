use ikasnova_common::Locale;
use ikasnova_export::PageLayout;
use ikasnova_provider::gemini::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
use ikasnova_provider::GeminiSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_NAME: &str = "ikasnova.config.json";

/// Checked when the configured key variable is unset
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Ikasnova configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Generative model name
    pub model: String,

    /// Root URL of the generative API
    pub base_url: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Language new sessions start in
    pub default_locale: Locale,

    /// Where exports are written, relative to the working directory
    pub out_dir: String,

    pub page_layout: PageLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: 120,
            default_locale: Locale::Es,
            out_dir: "exports".to_string(),
            page_layout: PageLayout::default(),
        }
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the export directory
    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    /// Provider settings, with the key read through `lookup`
    pub fn gemini_settings_with(&self, lookup: impl Fn(&str) -> Option<String>) -> GeminiSettings {
        let api_key = lookup(&self.api_key_env)
            .filter(|k| !k.is_empty())
            .or_else(|| lookup(FALLBACK_API_KEY_ENV).filter(|k| !k.is_empty()));

        GeminiSettings {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key,
            api_key_env: self.api_key_env.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Provider settings with the key read from the process environment
    pub fn gemini_settings(&self) -> GeminiSettings {
        self.gemini_settings_with(|name| std::env::var(name).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "model": "gemini-2.5-pro",
            "defaultLocale": "eu",
            "outDir": "dist",
            "pageLayout": { "width": 72, "linesPerPage": 50 }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.default_locale, Locale::Eu);
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.page_layout.width, 72);
        assert_eq!(config.page_layout.lines_per_page, 50);
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.default_locale, Locale::Es);
        assert_eq!(config.out_dir, "exports");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_api_key_fallback() {
        let config = Config::default();

        let settings = config.gemini_settings_with(|name| match name {
            "API_KEY" => Some("fallback".to_string()),
            _ => None,
        });
        assert_eq!(settings.api_key.as_deref(), Some("fallback"));

        let settings = config.gemini_settings_with(|name| match name {
            "GEMINI_API_KEY" => Some("primary".to_string()),
            "API_KEY" => Some("fallback".to_string()),
            _ => None,
        });
        assert_eq!(settings.api_key.as_deref(), Some("primary"));

        let settings = config.gemini_settings_with(|_| None);
        assert!(settings.api_key.is_none());
        assert_eq!(settings.api_key_env, "GEMINI_API_KEY");
    }
}
