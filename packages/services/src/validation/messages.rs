/// Shown for any field left empty.
pub const REQUIRED_FIELD: &str = "This field is required!";

/// Shown for an email field whose value is not shaped like an address.
pub const NOT_AN_EMAIL: &str = "This is not an email!";

/// Shown when a confirmation field differs from the field it repeats.
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match!";
