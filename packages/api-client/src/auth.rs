use async_trait::async_trait;
use models::{AuthenticatedUser, ClientRegistration, Credentials};
use services::{AuthError, AuthService};

use crate::client::ApiClient;

/// [`AuthService`] backed by the Happy Paws REST API.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
}

impl HttpAuthService {
    pub fn new(client: ApiClient) -> Self {
        HttpAuthService { client }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn log_in(&self, credentials: Credentials) -> Result<AuthenticatedUser, AuthError> {
        let path = &self.client.config().login_path;
        Ok(self.client.post(path, &credentials).await?)
    }

    async fn register_client(
        &self,
        registration: ClientRegistration,
    ) -> Result<AuthenticatedUser, AuthError> {
        let path = &self.client.config().register_client_path;
        Ok(self.client.post(path, &registration).await?)
    }
}
