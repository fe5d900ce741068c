pub mod client;
pub mod credentials;
pub mod registration;

pub use client::{AuthenticatedUser, Client};
pub use credentials::Credentials;
pub use registration::ClientRegistration;
