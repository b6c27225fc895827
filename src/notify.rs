//! Notification severities, the notifier seam and an in-memory toast surface.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{notification_display_ms, NOTIFICATION_EXIT_MS};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    pub fn css_class(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// User-visible, non-fatal messages. Display and dismissal timing belong to
/// the implementor.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
}

/// Toasts shown for a fixed time, then slid out and removed.
#[derive(Debug, Clone)]
pub struct Toasts {
    next_id: u64,
    visible: Vec<Toast>,
    display: Duration,
    exit: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::milliseconds(notification_display_ms()))
    }
}

impl Toasts {
    pub fn new(display: Duration) -> Self {
        Self {
            next_id: 1,
            visible: Vec::new(),
            display,
            exit: Duration::milliseconds(NOTIFICATION_EXIT_MS),
        }
    }

    pub fn push(&mut self, message: &str, severity: Severity, at: DateTime<Utc>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.visible.push(Toast {
            id,
            message: message.to_string(),
            severity,
            shown_at: at,
        });
        id
    }

    pub fn visible(&self) -> &[Toast] {
        &self.visible
    }

    /// True while the toast plays its exit animation.
    pub fn is_leaving(&self, id: u64, at: DateTime<Utc>) -> bool {
        self.visible
            .iter()
            .find(|t| t.id == id)
            .map(|t| at >= t.shown_at + self.display)
            .unwrap_or(false)
    }

    /// Removes toasts whose display and exit time have both elapsed and
    /// returns them.
    pub fn tick(&mut self, at: DateTime<Utc>) -> Vec<Toast> {
        let lifetime = self.display + self.exit;
        let (expired, kept) = self
            .visible
            .drain(..)
            .partition(|t| at >= t.shown_at + lifetime);
        self.visible = kept;
        expired
    }

    /// Removes a toast early. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.visible.len();
        self.visible.retain(|t| t.id != id);
        self.visible.len() != before
    }
}
