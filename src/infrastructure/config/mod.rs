use crate::domain::shared::Locale;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub base_url: String,
    /// Forwarded as-is; the backend may hold its own key
    pub api_key: String,
    pub locale: Locale,
    pub output_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid VOICE_STUDIO_URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("VOICE_STUDIO_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if let Err(e) = reqwest::Url::parse(&base_url) {
            return Err(ConfigError::InvalidUrl {
                url: base_url,
                reason: e.to_string(),
            });
        }

        let config = Config {
            base_url,
            api_key: lookup("VOICE_STUDIO_API_KEY")
                .map(|key| key.trim().to_string())
                .unwrap_or_default(),
            locale: match lookup("VOICE_STUDIO_LOCALE")
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "zh" => Locale::Zh,
                _ => Locale::En,
            },
            output_dir: lookup("VOICE_STUDIO_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            log_format: match lookup("LOG_FORMAT").unwrap_or_default().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }
}
