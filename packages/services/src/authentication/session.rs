use std::sync::Arc;

use models::{AuthenticatedUser, Client};
use tokio::sync::watch;

use super::token::Token;

/// Process-wide record of who is logged in. Clones share the same record;
/// observers can [`subscribe`](Self::subscribe) to log-in and log-out.
#[derive(Debug, Clone)]
pub struct AuthSession {
    current: Arc<watch::Sender<Option<AuthenticatedUser>>>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        AuthSession {
            current: Arc::new(current),
        }
    }

    pub fn set_user(&self, user: AuthenticatedUser) {
        tracing::info!(user_id = %user.user.id, "session started");
        self.current.send_replace(Some(user));
    }

    pub fn log_out(&self) {
        if self.current.send_replace(None).is_some() {
            tracing::info!("session ended");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn user(&self) -> Option<Client> {
        self.current.borrow().as_ref().map(|session| session.user.clone())
    }

    pub fn token(&self) -> Option<Token> {
        self.current
            .borrow()
            .as_ref()
            .map(|session| Token::new(session.token.as_str()))
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<AuthenticatedUser>> {
        self.current.subscribe()
    }
}
