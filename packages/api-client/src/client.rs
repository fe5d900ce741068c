use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use services::Token;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Shape of the backend's error bodies.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// JSON-over-HTTP access to the backend, optionally carrying a bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
    token: Option<Token>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create client: {}", e)))?;
        Ok(ApiClient {
            config,
            http,
            token: None,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// A client that sends `token` with every request.
    pub fn authorize(&self, token: Token) -> Self {
        ApiClient {
            token: Some(token),
            ..self.clone()
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.token.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?;
        self.send(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.config.endpoint(path)?;
        let mut request = self.http.request(method, url);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, token.bearer());
        }
        Ok(request)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request_id = Uuid::new_v4();
        let request = request
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(request_id = %request_id, method = %method, url = %url, "sending request");

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(request_id = %request_id, url = %url, error = %e, "request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            tracing::warn!(
                request_id = %request_id,
                url = %url,
                status = status.as_u16(),
                "request rejected"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(request_id = %request_id, status = status.as_u16(), "request succeeded");
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// The backend's `message` when the body carries one, else the body text,
/// else the status reason.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let fallback = status.canonical_reason().unwrap_or("Request failed").to_string();
    match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.message,
            Err(_) if !text.trim().is_empty() => text,
            Err(_) => fallback,
        },
        Err(_) => fallback,
    }
}
