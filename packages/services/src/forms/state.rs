use std::fmt;
use std::sync::Arc;

use super::values::{FormErrors, FormValues};
use crate::validation::FieldValidator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The form does not define a field with this key.
    UnknownField(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownField(key) => write!(f, "form has no field named `{}`", key),
        }
    }
}

impl std::error::Error for FormError {}

/// Something that happened to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user changed a field. Updates the value and re-validates that
    /// field only.
    FieldChanged { key: String, value: String },
    /// Overrides the message of one field.
    FieldErrorSet { key: String, message: String },
    /// Replaces every message at once, as after a submit.
    ErrorsReplaced(FormErrors),
    /// Back to the given values with no errors.
    Reset(FormValues),
}

/// An immutable snapshot of a form. Transitions build a new snapshot and
/// share whichever half did not change, so `Arc::ptr_eq` on `values()` or
/// `errors()` tells an observer whether that half moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: Arc<FormValues>,
    errors: Arc<FormErrors>,
}

impl FormState {
    /// Empty values and no errors for every field the validator declares.
    pub fn empty(validator: &FieldValidator) -> Self {
        FormState {
            values: Arc::new(validator.empty_values()),
            errors: Arc::new(validator.empty_errors()),
        }
    }

    /// Starts from `initial`; declared fields missing from it start empty.
    pub fn with_values(validator: &FieldValidator, initial: &FormValues) -> Result<Self, FormError> {
        if let Some((key, _)) = initial.iter().find(|(key, _)| !validator.contains(key)) {
            return Err(FormError::UnknownField(key.to_string()));
        }
        let values = validator
            .keys()
            .map(|key| (key, initial.get(key)))
            .collect();
        Ok(FormState {
            values: Arc::new(values),
            errors: Arc::new(validator.empty_errors()),
        })
    }

    pub(crate) fn from_parts(values: Arc<FormValues>, errors: Arc<FormErrors>) -> Self {
        FormState { values, errors }
    }

    pub fn values(&self) -> &Arc<FormValues> {
        &self.values
    }

    pub fn errors(&self) -> &Arc<FormErrors> {
        &self.errors
    }

    /// Pure transition: the state after `event`. `self` is left as it was.
    pub fn reduce(&self, validator: &FieldValidator, event: FormEvent) -> Result<FormState, FormError> {
        match event {
            FormEvent::FieldChanged { key, value } => {
                ensure_field(validator, &key)?;
                let values = self.values.with_field(key.as_str(), value);
                let message = validator.validate(&key, &values);
                Ok(FormState {
                    values: Arc::new(values),
                    errors: Arc::new(self.errors.with_error(key, message)),
                })
            }
            FormEvent::FieldErrorSet { key, message } => {
                ensure_field(validator, &key)?;
                Ok(FormState {
                    values: Arc::clone(&self.values),
                    errors: Arc::new(self.errors.with_error(key, message)),
                })
            }
            FormEvent::ErrorsReplaced(errors) => {
                if let Some((key, _)) = errors.iter().find(|(key, _)| !validator.contains(key)) {
                    return Err(FormError::UnknownField(key.to_string()));
                }
                let errors = validator
                    .keys()
                    .map(|key| (key, errors.get(key)))
                    .collect();
                Ok(FormState {
                    values: Arc::clone(&self.values),
                    errors: Arc::new(errors),
                })
            }
            FormEvent::Reset(initial) => FormState::with_values(validator, &initial),
        }
    }
}

fn ensure_field(validator: &FieldValidator, key: &str) -> Result<(), FormError> {
    if validator.contains(key) {
        Ok(())
    } else {
        Err(FormError::UnknownField(key.to_string()))
    }
}
