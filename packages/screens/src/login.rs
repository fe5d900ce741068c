use models::Client;
use services::{
    credentials_from, fields, login_form, AuthError, Authenticator, FormError, SubmissionOutcome,
};

use crate::fields::{FieldSpec, FieldView};
use crate::form_screen::FormScreen;
use crate::notification::Notification;

pub const LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(fields::EMAIL, "Email"),
    FieldSpec::secret(fields::PASSWORD, "Password"),
];

pub struct LoginScreen {
    form: FormScreen,
    authenticator: Authenticator,
}

impl LoginScreen {
    pub fn new(authenticator: Authenticator) -> Self {
        LoginScreen {
            form: FormScreen::new("login", LOGIN_FIELDS, login_form()),
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

    /// Validates and, when everything passes, logs in. On success the
    /// session holds the user.
    pub async fn submit(&mut self) -> SubmissionOutcome<Client, AuthError> {
        let authenticator = self.authenticator.clone();
        self.form
            .submit(|values| async move { authenticator.log_in(credentials_from(&values)).await })
            .await
    }
}
