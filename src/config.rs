// src/config.rs
use reqwest::Url;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    content_api_url: Url,
    allowed_origins: Vec<String>,
    notice_dismiss_after: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_content_api_url() -> String {
    "http://localhost:3000".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_notice_dismiss_ms() -> u64 {
    4000
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary source of values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        if listen_addr.trim().is_empty() {
            return Err(ConfigError::Missing("LISTEN_ADDR"));
        }

        let raw_url = lookup("CONTENT_API_BASE_URL").unwrap_or_else(default_content_api_url);
        let content_api_url = Url::parse(raw_url.trim()).map_err(|err| {
            ConfigError::Invalid(format!("CONTENT_API_BASE_URL {raw_url:?}: {err}"))
        })?;
        if !matches!(content_api_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(
                "CONTENT_API_BASE_URL must use http or https".into(),
            ));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let notice_dismiss_ms = match lookup("NOTICE_DISMISS_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid("NOTICE_DISMISS_MS must be a whole number of milliseconds".into())
            })?,
            None => default_notice_dismiss_ms(),
        };

        Ok(Self {
            listen_addr,
            content_api_url,
            allowed_origins,
            notice_dismiss_after: Duration::from_millis(notice_dismiss_ms),
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn content_api_url(&self) -> &Url {
        &self.content_api_url
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn notice_dismiss_after(&self) -> Duration {
        self.notice_dismiss_after
    }
}
