use services::AuthError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The configured base URL or an endpoint path does not form a URL.
    InvalidUrl(String),
    /// No response: connection refused, timeout, TLS failure.
    Transport(String),
    /// The backend answered with a non-success status.
    Status { status: u16, message: String },
    /// The response body is not what the endpoint promises.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(message) => write!(f, "invalid url: {}", message),
            ApiError::Transport(message) => write!(f, "request failed: {}", message),
            ApiError::Status { status, message } => write!(f, "{} ({})", message, status),
            ApiError::Decode(message) => write!(f, "invalid response body: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::InvalidUrl(e.to_string())
    }
}

impl From<ApiError> for AuthError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status { status, message } => AuthError::Rejected { status, message },
            ApiError::Decode(message) => AuthError::InvalidResponse(message),
            ApiError::InvalidUrl(message) | ApiError::Transport(message) => {
                AuthError::Transport(message)
            }
        }
    }
}
