use models::Client;
use services::{
    client_registration_from, fields, register_client_form, AuthError, Authenticator, FormError,
    SubmissionOutcome,
};

use crate::fields::{FieldSpec, FieldView};
use crate::form_screen::FormScreen;
use crate::notification::Notification;

pub const REGISTER_CLIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(fields::FIRST_NAME, "First Name"),
    FieldSpec::text(fields::LAST_NAME, "Last Name"),
    FieldSpec::text(fields::PHONE_NUMBER, "Phone Number"),
    FieldSpec::text(fields::EMAIL, "Email"),
    FieldSpec::secret(fields::PASSWORD, "Password"),
    FieldSpec::secret(fields::REPEAT_PASSWORD, "Repeat Password"),
];

/// "Register as a client".
pub struct RegisterClientScreen {
    form: FormScreen,
    authenticator: Authenticator,
}

impl RegisterClientScreen {
    pub fn new(authenticator: Authenticator) -> Self {
        RegisterClientScreen {
            form: FormScreen::new("register_client", REGISTER_CLIENT_FIELDS, register_client_form()),
            authenticator,
        }
    }

    pub fn form(&self) -> &FormScreen {
        &self.form
    }

    pub fn on_change(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.form.on_change(key, value)
    }

    pub fn fields(&self) -> Vec<FieldView> {
        self.form.fields()
    }

    pub fn is_loading(&self) -> bool {
        self.form.is_loading()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.form.notification()
    }

    pub async fn submit(&mut self) -> SubmissionOutcome<Client, AuthError> {
        let authenticator = self.authenticator.clone();
        self.form
            .submit(|values| async move {
                authenticator
                    .register_client(client_registration_from(&values))
                    .await
            })
            .await
    }
}
