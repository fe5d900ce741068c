pub mod auth;
pub mod client;
pub mod config;
pub mod error;

pub use auth::HttpAuthService;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
