use std::collections::HashMap;

use serde::Serialize;

/// Current raw value of every field of a form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    /// Raw value of `key`; a key the form does not hold reads as empty.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copy of these values with `key` set to `value`.
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.0.insert(key.into(), value.into());
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormValues(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Error message of every field of a form. An empty message means the field
/// is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(HashMap<String, String>);

impl FormErrors {
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn with_error(&self, key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.0.insert(key.into(), message.into());
        next
    }

    /// True when no field carries a message.
    pub fn is_valid(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Fields that carry a message, with the message.
    pub fn failing(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, message)| !message.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All non-empty messages as `field: message`, sorted by field name and
    /// joined with ", ".
    pub fn to_string_list(&self) -> String {
        let mut failing: Vec<(&str, &str)> = self.failing().collect();
        failing.sort_unstable();
        failing
            .into_iter()
            .map(|(key, message)| format!("{}: {}", key, message))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormErrors(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
