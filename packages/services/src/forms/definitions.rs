use models::{ClientRegistration, Credentials};

use super::values::FormValues;
use crate::validation::{FieldValidator, ValidationRule};

pub mod fields {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const REPEAT_PASSWORD: &str = "repeatPassword";
}

pub fn login_form() -> FieldValidator {
    FieldValidator::new()
        .field(fields::EMAIL, ValidationRule::email())
        .field(fields::PASSWORD, ValidationRule::required())
}

pub fn register_client_form() -> FieldValidator {
    FieldValidator::new()
        .field(fields::FIRST_NAME, ValidationRule::required())
        .field(fields::LAST_NAME, ValidationRule::required())
        .field(fields::PHONE_NUMBER, ValidationRule::required())
        .field(fields::EMAIL, ValidationRule::email())
        .field(fields::PASSWORD, ValidationRule::required())
        .field(fields::REPEAT_PASSWORD, ValidationRule::matches(fields::PASSWORD))
}

pub fn credentials_from(values: &FormValues) -> Credentials {
    Credentials::new(values.get(fields::EMAIL), values.get(fields::PASSWORD))
}

pub fn client_registration_from(values: &FormValues) -> ClientRegistration {
    ClientRegistration {
        first_name: values.get(fields::FIRST_NAME).to_string(),
        last_name: values.get(fields::LAST_NAME).to_string(),
        phone_number: values.get(fields::PHONE_NUMBER).to_string(),
        email: values.get(fields::EMAIL).to_string(),
        password: values.get(fields::PASSWORD).to_string(),
    }
}
