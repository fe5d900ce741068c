pub mod fields;
pub mod form_screen;
pub mod login;
pub mod notification;
pub mod register_client;

pub use fields::{FieldSpec, FieldView};
pub use form_screen::FormScreen;
pub use login::LoginScreen;
pub use notification::{Notification, NotificationStatus};
pub use register_client::RegisterClientScreen;

#[cfg(test)]
pub mod test_helpers;
