//! # Notifications
//!
//! Transient user-facing messages. The store only produces them; showing
//! and dismissing them belongs to the presentation layer.

use std::fmt;

/// Message shown when a slot write is rejected.
pub const SAVE_FAILED_MESSAGE: &str = "Could not save data. Storage might be full.";

/// Notification severity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class suffix used by the storefront (`wallet-notification <tag>`).
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A transient on-screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// The notification raised for a failed save.
    pub fn save_failed() -> Self {
        Self::error(SAVE_FAILED_MESSAGE)
    }
}
