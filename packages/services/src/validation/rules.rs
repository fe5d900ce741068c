use std::fmt;
use std::sync::Arc;

use super::email::is_valid_email;
use super::messages::{NOT_AN_EMAIL, PASSWORDS_DO_NOT_MATCH, REQUIRED_FIELD};
use crate::forms::FormValues;

type Check = dyn Fn(&FormValues, &str) -> String + Send + Sync;

/// A pure check of one field, given every value of the form so rules can
/// look at other fields. Returns the error message, or an empty string when
/// the value is acceptable.
#[derive(Clone)]
pub struct ValidationRule {
    name: &'static str,
    check: Arc<Check>,
}

impl ValidationRule {
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&FormValues, &str) -> String + Send + Sync + 'static,
    {
        ValidationRule {
            name,
            check: Arc::new(check),
        }
    }

    /// Fails on an empty value. Whitespace counts as a value.
    pub fn required() -> Self {
        ValidationRule::new("required", |values, key| {
            if values.get(key).is_empty() {
                REQUIRED_FIELD.to_string()
            } else {
                String::new()
            }
        })
    }

    /// Required, then shaped like an email address.
    pub fn email() -> Self {
        ValidationRule::required().and_then(ValidationRule::new("email", |values, key| {
            if is_valid_email(values.get(key)) {
                String::new()
            } else {
                NOT_AN_EMAIL.to_string()
            }
        }))
    }

    /// Required, then equal to the value of `other`.
    pub fn matches(other: &'static str) -> Self {
        ValidationRule::required().and_then(ValidationRule::new("matches", move |values, key| {
            if values.get(key) == values.get(other) {
                String::new()
            } else {
                PASSWORDS_DO_NOT_MATCH.to_string()
            }
        }))
    }

    /// Runs `self`, and `next` only when `self` passed. The first error wins.
    pub fn and_then(self, next: ValidationRule) -> Self {
        let name = next.name;
        ValidationRule::new(name, move |values, key| {
            let error = self.apply(values, key);
            if error.is_empty() {
                next.apply(values, key)
            } else {
                error
            }
        })
    }

    pub fn apply(&self, values: &FormValues, key: &str) -> String {
        (self.check)(values, key)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidationRule").field(&self.name).finish()
    }
}
