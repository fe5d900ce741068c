#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Error,
}

/// A transient message shown on top of a screen, e.g. when the backend
/// refuses a log-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub status: NotificationStatus,
    pub description: String,
}

impl Notification {
    pub fn error(description: impl Into<String>) -> Self {
        Notification {
            title: "ERROR".to_string(),
            status: NotificationStatus::Error,
            description: description.into(),
        }
    }
}
