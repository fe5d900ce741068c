use std::time::Duration;

use url::Url;

use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOGIN_PATH: &str = "/api/auth/login";
pub const DEFAULT_REGISTER_CLIENT_PATH: &str = "/api/auth/register/client";

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub login_path: String,
    pub register_client_path: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(ApiConfig {
            base_url: Url::parse(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            register_client_path: DEFAULT_REGISTER_CLIENT_PATH.to_string(),
        })
    }

    /// Reads `HAPPY_PAWS_API_URL`, `HAPPY_PAWS_API_TIMEOUT_SECS`,
    /// `HAPPY_PAWS_LOGIN_PATH` and `HAPPY_PAWS_REGISTER_CLIENT_PATH`, falling
    /// back to the defaults for anything unset or empty.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_url = var("HAPPY_PAWS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = ApiConfig::new(&base_url)?;

        if let Some(timeout) = var("HAPPY_PAWS_API_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %timeout, "ignoring invalid HAPPY_PAWS_API_TIMEOUT_SECS"),
            }
        }
        if let Some(path) = var("HAPPY_PAWS_LOGIN_PATH") {
            config.login_path = path;
        }
        if let Some(path) = var("HAPPY_PAWS_REGISTER_CLIENT_PATH") {
            config.register_client_path = path;
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn with_register_client_path(mut self, path: impl Into<String>) -> Self {
        self.register_client_path = path.into();
        self
    }

    /// Absolute URL of `path`, kept below any path prefix of the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        Ok(base.join(path.trim_start_matches('/'))?)
    }
}
