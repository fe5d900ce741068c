use async_trait::async_trait;
use mockall::automock;
use models::{AuthenticatedUser, ClientRegistration, Credentials};

use super::errors::AuthError;

/// The remote calls behind the log-in and registration forms.
#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn log_in(&self, credentials: Credentials) -> Result<AuthenticatedUser, AuthError>;

    async fn register_client(
        &self,
        registration: ClientRegistration,
    ) -> Result<AuthenticatedUser, AuthError>;
}
