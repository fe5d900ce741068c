use super::rules::ValidationRule;
use crate::forms::{FormErrors, FormValues};

/// The rule table of one form: every field key the form defines, in
/// declaration order, with the rule that checks it.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    fields: Vec<(String, ValidationRule)>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Declaring the same key twice replaces its rule.
    pub fn field(mut self, key: impl Into<String>, rule: ValidationRule) -> Self {
        let key = key.into();
        match self.fields.iter().position(|(existing, _)| *existing == key) {
            Some(index) => self.fields[index].1 = rule,
            None => self.fields.push((key, rule)),
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(existing, _)| existing == key)
    }

    pub fn rule(&self, key: &str) -> Option<&ValidationRule> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, rule)| rule)
    }

    /// Error message for `key` given the whole form, empty when valid.
    /// A key without a rule is always valid.
    pub fn validate(&self, key: &str, values: &FormValues) -> String {
        self.rule(key)
            .map(|rule| rule.apply(values, key))
            .unwrap_or_default()
    }

    /// Validates every declared field.
    pub fn validate_all(&self, values: &FormValues) -> FormErrors {
        self.fields
            .iter()
            .map(|(key, rule)| (key.clone(), rule.apply(values, key)))
            .collect()
    }

    /// Empty values for every declared field.
    pub fn empty_values(&self) -> FormValues {
        self.keys().map(|key| (key, "")).collect()
    }

    /// No errors for every declared field.
    pub fn empty_errors(&self) -> FormErrors {
        self.keys().map(|key| (key, "")).collect()
    }
}
