use std::sync::LazyLock;

use regex::Regex;

// local-part "@" domain, with at least one dot inside the domain.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Checks that `value` looks like an email address. Only the shape is
/// checked; deliverability is the backend's concern.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}
