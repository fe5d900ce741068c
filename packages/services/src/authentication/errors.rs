use std::fmt;

/// Why the backend did not authenticate or register the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The backend answered with an error status.
    Rejected { status: u16, message: String },
    /// The request never got an answer.
    Transport(String),
    /// The backend answered with something that is not a session.
    InvalidResponse(String),
}

impl AuthError {
    /// Text fit for a user-facing notification.
    pub fn message(&self) -> &str {
        match self {
            AuthError::Rejected { message, .. } => message,
            AuthError::Transport(message) => message,
            AuthError::InvalidResponse(message) => message,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Rejected { status, message } => write!(f, "{} ({})", message, status),
            AuthError::Transport(message) => write!(f, "request failed: {}", message),
            AuthError::InvalidResponse(message) => write!(f, "invalid response: {}", message),
        }
    }
}

impl std::error::Error for AuthError {}
