use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Content sources
    pub news_api_key: String,
    pub news_api_base_url: String,
    pub tmdb_api_key: String,
    pub tmdb_api_base_url: String,
    pub social_api_base_url: Option<String>,
    pub request_timeout_secs: u64,
    pub source_cache_ttl_secs: u64,
    // Feed
    pub items_per_page: u32,
    pub category_keywords_path: Option<String>,
    // HTTP
    pub cors_allowed_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_TMDB_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Shortest key accepted as a real credential
const MIN_API_KEY_LEN: usize = 11;

/// Whether `key` looks like a real credential rather than an empty or
/// `your_..._here` placeholder value
pub fn is_api_key_configured(key: &str) -> bool {
    let key = key.trim();
    let placeholder = key.starts_with("your_") && key.ends_with("_here");
    !key.is_empty() && !placeholder && key.len() >= MIN_API_KEY_LEN
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            news_api_key: env::var("NEWS_API_KEY").unwrap_or_default(),
            news_api_base_url: env::var("NEWS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_API_BASE_URL.to_string()),
            tmdb_api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            tmdb_api_base_url: env::var("TMDB_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TMDB_API_BASE_URL.to_string()),
            social_api_base_url: optional_var("SOCIAL_API_BASE_URL"),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            source_cache_ttl_secs: env::var("SOURCE_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            items_per_page: env::var("ITEMS_PER_PAGE")
                .unwrap_or_else(|_| "20".to_string())
                .parse()?,
            category_keywords_path: optional_var("CATEGORY_KEYWORDS_PATH"),
            cors_allowed_origin: optional_var("CORS_ALLOWED_ORIGIN"),
        };

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn source_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.source_cache_ttl_secs)
    }
}
