/// Static description of one input on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    /// Rendered masked, like a password.
    pub secret: bool,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        FieldSpec {
            key,
            label,
            secret: false,
        }
    }

    pub const fn secret(key: &'static str, label: &'static str) -> Self {
        FieldSpec {
            key,
            label,
            secret: true,
        }
    }
}

/// What an input shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Empty when the field is valid.
    pub error: String,
    pub secret: bool,
}

impl FieldView {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
