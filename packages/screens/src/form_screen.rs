use std::future::Future;

use services::{
    AuthError, FieldValidator, FormError, FormStateStore, FormValues, SubmissionController,
    SubmissionOutcome,
};

use crate::fields::{FieldSpec, FieldView};
use crate::notification::Notification;

/// One form on screen: its inputs, their state, the submit button's loading
/// flag and the error notification of the last submit.
#[derive(Debug)]
pub struct FormScreen {
    fields: &'static [FieldSpec],
    store: FormStateStore,
    controller: SubmissionController,
    notification: Option<Notification>,
}

impl FormScreen {
    pub fn new(name: &'static str, fields: &'static [FieldSpec], validator: FieldValidator) -> Self {
        FormScreen {
            fields,
            store: FormStateStore::new(validator),
            controller: SubmissionController::new(name),
            notification: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.controller.form()
    }

    /// The user typed into `key`.
    pub fn on_change(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.store.handle_change(key, value)
    }

    pub fn field(&self, key: &str) -> Option<FieldView> {
        self.fields
            .iter()
            .find(|spec| spec.key == key)
            .map(|spec| self.view(spec))
    }

    /// Every input, in display order.
    pub fn fields(&self) -> Vec<FieldView> {
        self.fields.iter().map(|spec| self.view(spec)).collect()
    }

    fn view(&self, spec: &FieldSpec) -> FieldView {
        FieldView {
            key: spec.key,
            label: spec.label,
            value: self.store.value(spec.key).to_string(),
            error: self.store.error(spec.key).to_string(),
            secret: spec.secret,
        }
    }

    /// True while a submit is in flight; the submit button should be
    /// disabled meanwhile.
    pub fn is_loading(&self) -> bool {
        self.controller.is_in_flight()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn store(&self) -> &FormStateStore {
        &self.store
    }

    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    /// Submits through the controller. A failed operation becomes an error
    /// notification; field errors only ever come from validation.
    pub async fn submit<F, Fut, T>(&mut self, operation: F) -> SubmissionOutcome<T, AuthError>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<T, AuthError>>,
    {
        tracing::debug!(form = self.name(), "submit requested");
        self.notification = None;
        let outcome = self.controller.submit(&mut self.store, operation).await;
        if let SubmissionOutcome::Failed(e) = &outcome {
            self.notification = Some(Notification::error(e.message()));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::LOGIN_FIELDS;
    use crate::test_helpers::rejected;
    use services::{fields, login_form};

    #[tokio::test]
    async fn test_dismiss_notification() {
        let mut screen = FormScreen::new("login", LOGIN_FIELDS, login_form());
        screen.on_change(fields::EMAIL, "a@b.com").unwrap();
        screen.on_change(fields::PASSWORD, "secret").unwrap();

        let outcome: SubmissionOutcome<(), AuthError> = screen
            .submit(|_| async { Err(rejected(500, "Server unavailable")) })
            .await;
        assert!(outcome.reached_operation());
        assert_eq!(
            screen.notification().map(|n| n.description.as_str()),
            Some("Server unavailable")
        );

        screen.dismiss_notification();

        assert!(screen.notification().is_none());
        assert_eq!(screen.store().value(fields::EMAIL), "a@b.com");
    }
}
