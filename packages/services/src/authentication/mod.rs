pub mod auth_service;
pub mod authenticator;
pub mod errors;
pub mod session;
pub mod token;

pub use auth_service::*;
pub use authenticator::*;
pub use errors::AuthError;
pub use session::AuthSession;
pub use token::Token;
