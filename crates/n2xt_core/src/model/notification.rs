//! Transient notification model.
//!
//! # Invariants
//! - Every shown notification gets a fresh `NotificationId`.
//! - `kind` defaults to `Info`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one displayed notification instance.
pub type NotificationId = Uuid;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Neutral message.
    #[default]
    Info,
    /// Completed user action.
    Success,
    /// Failed user action.
    Error,
    /// Degraded but recoverable state.
    Warning,
}

impl NotificationKind {
    /// Stable lowercase name, also used as the CSS modifier suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Icon class rendered next to the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "fa-info-circle",
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Warning => "fa-exclamation-triangle",
        }
    }

    /// Parses a kind name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            _ => None,
        }
    }
}

/// One notification instance as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    /// Creates a notification with a generated identity.
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Notification, NotificationKind};

    #[test]
    fn kind_defaults_to_info() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }

    #[test]
    fn parse_accepts_known_names() {
        assert_eq!(
            NotificationKind::parse(" Success "),
            Some(NotificationKind::Success)
        );
        assert_eq!(NotificationKind::parse("warn"), Some(NotificationKind::Warning));
        assert_eq!(NotificationKind::parse("fatal"), None);
    }

    #[test]
    fn each_instance_gets_new_id() {
        let first = Notification::new("a", NotificationKind::Info);
        let second = Notification::new("a", NotificationKind::Info);
        assert_ne!(first.id, second.id);
    }
}
