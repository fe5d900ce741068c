use std::sync::Arc;

use models::{AuthenticatedUser, Client};
use services::{AuthError, AuthSession, Authenticator, MockAuthService};

pub fn authenticator_with(service: MockAuthService) -> Authenticator {
    Authenticator::new(Arc::new(service), AuthSession::new())
}

pub fn authenticated_user(email: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        token: format!("token-for-{}", email),
        user: Client {
            id: "42".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pop".to_string(),
            email: email.to_string(),
            phone_number: "0712345678".to_string(),
        },
    }
}

pub fn rejected(status: u16, message: &str) -> AuthError {
    AuthError::Rejected {
        status,
        message: message.to_string(),
    }
}
