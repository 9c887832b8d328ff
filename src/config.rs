use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com";
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.youtube.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Default key; a key sent with a request takes precedence.
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub youtube_base_url: String,
    pub fetch_timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `env::var` in production.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let groq_api_key = lookup("GROQ_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .map_err(|e| AppError::ConfigError(format!("Invalid fetch timeout: {}", e)))?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        let groq_api_url = lookup("GROQ_API_URL").unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string());
        let youtube_base_url = lookup("YOUTUBE_BASE_URL").unwrap_or_else(|| DEFAULT_YOUTUBE_BASE_URL.to_string());
        let user_agent = lookup("FETCH_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            groq_api_key,
            groq_api_url: groq_api_url.trim_end_matches('/').to_string(),
            youtube_base_url: youtube_base_url.trim_end_matches('/').to_string(),
            fetch_timeout: Duration::from_secs(fetch_timeout),
            user_agent,
        })
    }

    pub fn api_key_loaded(&self) -> bool {
        self.groq_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            groq_api_key: None,
            groq_api_url: DEFAULT_GROQ_API_URL.to_string(),
            youtube_base_url: DEFAULT_YOUTUBE_BASE_URL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
