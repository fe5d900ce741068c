use std::sync::Arc;

use models::{Client, ClientRegistration, Credentials};

use super::auth_service::AuthService;
use super::errors::AuthError;
use super::session::AuthSession;

/// Runs log-in and registration through an [`AuthService`] and records the
/// resulting user in the shared [`AuthSession`].
#[derive(Clone)]
pub struct Authenticator {
    service: Arc<dyn AuthService>,
    session: AuthSession,
}

impl Authenticator {
    pub fn new(service: Arc<dyn AuthService>, session: AuthSession) -> Self {
        Authenticator { service, session }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub async fn log_in(&self, credentials: Credentials) -> Result<Client, AuthError> {
        match self.service.log_in(credentials).await {
            Ok(authenticated) => {
                let user = authenticated.user.clone();
                self.session.set_user(authenticated);
                tracing::info!(user_id = %user.id, "login success");
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                Err(e)
            }
        }
    }

    pub async fn register_client(&self, registration: ClientRegistration) -> Result<Client, AuthError> {
        match self.service.register_client(registration).await {
            Ok(authenticated) => {
                let user = authenticated.user.clone();
                self.session.set_user(authenticated);
                tracing::info!(user_id = %user.id, "registration success");
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration failed");
                Err(e)
            }
        }
    }

    pub fn log_out(&self) {
        self.session.log_out();
    }
}
