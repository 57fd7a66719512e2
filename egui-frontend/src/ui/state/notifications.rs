//! # Notification State Module
//!
//! Transient, auto-dismissing toast notifications.
//!
//! ## Responsibilities:
//! - Stack of notifications with a severity level, newest last
//! - Auto-dismiss 5 seconds after creation, manual dismiss any time
//!
//! No de-duplication and no ordering guarantee beyond push order; rapid
//! pushes simply stack visually.

use std::time::{Duration, Instant};

/// How long a notification stays on screen before it dismisses itself.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Severity of a notification, defaulting to `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

/// The on-screen notification stack.
#[derive(Debug, Default)]
pub struct NotificationState {
    notifications: Vec<Notification>,
}

impl NotificationState {
    pub fn push(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.push_at(message, level, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, level: NotificationLevel, now: Instant) {
        let message = message.into();
        log::info!("Notification ({:?}): {}", level, message);
        self.notifications.push(Notification {
            message,
            level,
            created_at: now,
        });
    }

    /// Drop every notification older than [`NOTIFICATION_TTL`].
    pub fn prune(&mut self, now: Instant) {
        self.notifications
            .retain(|n| now.duration_since(n.created_at) < NOTIFICATION_TTL);
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.notifications.len() {
            self.notifications.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_expire_after_five_seconds() {
        let created = Instant::now();
        let mut state = NotificationState::default();
        state.push_at("Booking saved", NotificationLevel::Success, created);

        state.prune(created + Duration::from_secs(4));
        assert_eq!(state.len(), 1);

        state.prune(created + Duration::from_secs(6));
        assert!(state.is_empty());
    }

    #[test]
    fn test_notifications_stack_in_push_order() {
        let created = Instant::now();
        let mut state = NotificationState::default();
        state.push_at("first", NotificationLevel::Info, created);
        state.push_at("second", NotificationLevel::Danger, created);

        let messages: Vec<&str> = state.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_manual_dismiss_removes_only_target() {
        let created = Instant::now();
        let mut state = NotificationState::default();
        state.push_at("keep", NotificationLevel::Info, created);
        state.push_at("drop", NotificationLevel::Warning, created);

        state.dismiss(1);
        assert_eq!(state.len(), 1);
        assert_eq!(state.iter().next().unwrap().message, "keep");

        // Out-of-range dismiss is a no-op.
        state.dismiss(5);
        assert_eq!(state.len(), 1);
    }
}
