use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://ziyonet.uz";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        host: get_env_or_default("HOST", "127.0.0.1"),
        port: get_parsed_or_default("PORT", 3000),
        upstream_base_url: get_env_or_default("UPSTREAM_BASE_URL", DEFAULT_UPSTREAM_BASE_URL),
        fetch_timeout: Duration::from_secs(get_parsed_or_default("FETCH_TIMEOUT_SECS", 15)),
        attribution: get_optional_env("ATTRIBUTION"),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Scheme and host of the book-search site, without a trailing path.
    pub upstream_base_url: String,
    pub fetch_timeout: Duration,
    /// Identity echoed back in error bodies when set.
    pub attribution: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            fetch_timeout: Duration::from_secs(15),
            attribution: None,
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_parsed_or_default<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("Invalid value for environment variable {key}: {raw}")),
        Err(_) => default,
    }
}
