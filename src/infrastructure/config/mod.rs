use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";
pub const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    // YouTube Data API
    pub youtube_api_key: String,
    pub youtube_api_base_url: String,
    pub upstream_timeout_secs: Option<u64>,
    // Frontend
    pub index_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            youtube_api_key: env::var("YOUTUBE_API_KEY")
                .unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),
            youtube_api_base_url: env::var("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_BASE_URL.to_string()),
            upstream_timeout_secs: match env::var("UPSTREAM_TIMEOUT_SECS") {
                Ok(value) => Some(value.parse()?),
                Err(_) => None,
            },
            index_path: env::var("INDEX_PATH")
                .unwrap_or_else(|_| "public/index.html".to_string())
                .into(),
        };

        Ok(config)
    }

    /// True when no real API key was provided; every upstream call will be rejected.
    pub fn uses_placeholder_api_key(&self) -> bool {
        self.youtube_api_key == PLACEHOLDER_API_KEY
    }
}
