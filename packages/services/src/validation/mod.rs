pub mod email;
pub mod field_validators;
pub mod messages;
pub mod rules;

pub use email::is_valid_email;
pub use field_validators::FieldValidator;
pub use messages::{NOT_AN_EMAIL, PASSWORDS_DO_NOT_MATCH, REQUIRED_FIELD};
pub use rules::ValidationRule;
