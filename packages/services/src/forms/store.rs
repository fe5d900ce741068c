use std::sync::Arc;

use super::state::{FormError, FormEvent, FormState};
use super::values::{FormErrors, FormValues};
use crate::validation::FieldValidator;

/// Values and errors of one live form instance, plus the rules that check
/// them. Every change swaps in a new [`FormState`] snapshot.
#[derive(Debug, Clone)]
pub struct FormStateStore {
    validator: Arc<FieldValidator>,
    initial: FormValues,
    state: FormState,
}

impl FormStateStore {
    pub fn new(validator: FieldValidator) -> Self {
        let state = FormState::empty(&validator);
        FormStateStore {
            initial: (**state.values()).clone(),
            validator: Arc::new(validator),
            state,
        }
    }

    /// A store whose fields start from `initial` (and return to it on
    /// [`reset`](Self::reset)).
    pub fn with_initial_values(validator: FieldValidator, initial: FormValues) -> Result<Self, FormError> {
        let state = FormState::with_values(&validator, &initial)?;
        Ok(FormStateStore {
            initial: (**state.values()).clone(),
            validator: Arc::new(validator),
            state,
        })
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Snapshot of the current values.
    pub fn values(&self) -> Arc<FormValues> {
        Arc::clone(self.state.values())
    }

    /// Snapshot of the current errors.
    pub fn errors(&self) -> Arc<FormErrors> {
        Arc::clone(self.state.errors())
    }

    pub fn value(&self, key: &str) -> &str {
        self.state.values().get(key)
    }

    pub fn error(&self, key: &str) -> &str {
        self.state.errors().get(key)
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Result<(), FormError> {
        self.state = self.state.reduce(&self.validator, event)?;
        Ok(())
    }

    /// Replaces one value without touching its error.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        if !self.validator.contains(key) {
            return Err(FormError::UnknownField(key.to_string()));
        }
        let values = self.state.values().with_field(key, value);
        self.state = FormState::from_parts(Arc::new(values), Arc::clone(self.state.errors()));
        Ok(())
    }

    pub fn set_field_error(&mut self, key: &str, message: impl Into<String>) -> Result<(), FormError> {
        self.dispatch(FormEvent::FieldErrorSet {
            key: key.to_string(),
            message: message.into(),
        })
    }

    /// Re-checks one field against the current values and stores the result.
    /// Returns the new message.
    pub fn validate_field(&mut self, key: &str) -> Result<&str, FormError> {
        if !self.validator.contains(key) {
            return Err(FormError::UnknownField(key.to_string()));
        }
        let message = self.validator.validate(key, self.state.values());
        tracing::debug!(field = key, valid = message.is_empty(), "field validated");
        self.set_field_error(key, message)?;
        Ok(self.error(key))
    }

    /// A field change event from the input layer: the new value, then live
    /// validation of that field.
    pub fn handle_change(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.set_field(key, value)?;
        self.validate_field(key)?;
        Ok(())
    }

    /// Checks every field against the current values. Nothing is stored;
    /// see [`replace_errors`](Self::replace_errors).
    pub fn validate_all(&self) -> FormErrors {
        self.validator.validate_all(self.state.values())
    }

    pub fn replace_errors(&mut self, errors: FormErrors) -> Result<(), FormError> {
        self.dispatch(FormEvent::ErrorsReplaced(errors))
    }

    // `errors` comes from `validate_all`, so its keys are the form's keys.
    pub(crate) fn commit_errors(&mut self, errors: FormErrors) {
        self.state = FormState::from_parts(Arc::clone(self.state.values()), Arc::new(errors));
    }

    pub fn reset(&mut self) {
        self.state = FormState::from_parts(
            Arc::new(self.initial.clone()),
            Arc::new(self.validator.empty_errors()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::login_validator;
    use crate::validation::{NOT_AN_EMAIL, REQUIRED_FIELD};

    #[test]
    fn test_set_field_produces_new_snapshot() {
        let mut store = FormStateStore::new(login_validator());
        let before = store.values();

        store.set_field("email", "a@b.com").unwrap();

        assert_eq!(before.get("email"), "");
        assert_eq!(store.value("email"), "a@b.com");
        assert!(!Arc::ptr_eq(&before, &store.values()));
        // set_field alone does not validate.
        assert_eq!(store.error("email"), "");
    }

    #[test]
    fn test_set_field_error_keeps_values_snapshot() {
        let mut store = FormStateStore::new(login_validator());
        let values = store.values();

        store.set_field_error("password", "too weak").unwrap();

        assert!(Arc::ptr_eq(&values, &store.values()));
        assert_eq!(store.error("password"), "too weak");
    }

    #[test]
    fn test_handle_change_validates_live() {
        let mut store = FormStateStore::new(login_validator());

        store.handle_change("email", "not-an-email").unwrap();
        assert_eq!(store.error("email"), NOT_AN_EMAIL);

        store.handle_change("email", "a@b.co").unwrap();
        assert_eq!(store.error("email"), "");

        store.handle_change("email", "").unwrap();
        assert_eq!(store.error("email"), REQUIRED_FIELD);
        assert_eq!(store.error("password"), "");
    }

    #[test]
    fn test_validate_all_ignores_live_errors() {
        let mut store = FormStateStore::new(login_validator());
        store.set_field_error("email", "stale").unwrap();
        store.set_field("email", "a@b.com").unwrap();
        store.set_field("password", "secret").unwrap();

        let errors = store.validate_all();
        assert!(errors.is_valid());
        // validate_all does not write back.
        assert_eq!(store.error("email"), "stale");
    }

    #[test]
    fn test_validate_all_on_fresh_form() {
        let store = FormStateStore::new(login_validator());
        let errors = store.validate_all();
        assert_eq!(errors.get("email"), REQUIRED_FIELD);
        assert_eq!(errors.get("password"), REQUIRED_FIELD);
    }

    #[test]
    fn test_unknown_keys() {
        let mut store = FormStateStore::new(login_validator());
        assert!(store.set_field("phone", "1").is_err());
        assert!(store.set_field_error("phone", "x").is_err());
        assert!(store.validate_field("phone").is_err());
    }

    #[test]
    fn test_replace_errors_from_outside() {
        let mut store = FormStateStore::new(login_validator());
        let errors: FormErrors = [("email", "Email already in use")].into_iter().collect();

        store.replace_errors(errors).unwrap();

        assert_eq!(store.error("email"), "Email already in use");
        assert_eq!(store.error("password"), "");
        assert_eq!(store.state().errors().len(), 2);
    }

    #[test]
    fn test_reset_to_initial_values() {
        let initial: FormValues = [("email", "a@b.com")].into_iter().collect();
        let mut store = FormStateStore::with_initial_values(login_validator(), initial).unwrap();
        store.handle_change("email", "").unwrap();

        store.reset();

        assert_eq!(store.value("email"), "a@b.com");
        assert!(store.errors().is_valid());
    }
}
