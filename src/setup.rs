// src/setup.rs

use std::sync::Arc;

use api_client::{ApiClient, ApiConfig, ApiError, HttpAuthService};
use services::{AuthSession, Authenticator};
use tracing_subscriber::EnvFilter;

pub(super) fn set_up_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

pub(super) fn set_up_authenticator() -> Result<Authenticator, ApiError> {
    let config = ApiConfig::from_env()?;
    tracing::info!(api_url = %config.base_url, "API configured");
    let client = ApiClient::new(config)?;
    Ok(Authenticator::new(
        Arc::new(HttpAuthService::new(client)),
        AuthSession::new(),
    ))
}
