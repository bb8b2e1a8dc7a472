//! Short-lived toast notifications shared by the editor, map, and agent modules.
//!
//! Anything pushed here is also written to the log, so the log file mirrors
//! what the user saw on screen.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::constants::{MAX_NOTIFICATIONS, NOTIFICATION_DURATION_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: NotificationLevel,
    pub message: String,
    /// Seconds left before the toast disappears
    pub remaining: f32,
}

#[derive(Resource, Default, Debug)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
}

impl Notifications {
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            NotificationLevel::Warning => warn!("{}", message),
            _ => info!("{}", message),
        }

        self.toasts.push_back(Toast {
            level,
            message,
            remaining: NOTIFICATION_DURATION_SECS,
        });
        while self.toasts.len() > MAX_NOTIFICATIONS {
            self.toasts.pop_front();
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, message);
    }

    /// Age all toasts and drop the expired ones
    pub fn tick(&mut self, delta_secs: f32) {
        for toast in self.toasts.iter_mut() {
            toast.remaining -= delta_secs;
        }
        self.toasts.retain(|t| t.remaining > 0.0);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

pub fn expire_notifications(time: Res<Time>, mut notifications: ResMut<Notifications>) {
    if notifications.is_empty() {
        return;
    }
    notifications.tick(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate_in_order() {
        let mut notifications = Notifications::default();
        notifications.success("first");
        notifications.warning("second");

        let messages: Vec<_> = notifications.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(notifications.iter().nth(1).map(|t| t.level), Some(NotificationLevel::Warning));
    }

    #[test]
    fn test_tick_expires_old_toasts() {
        let mut notifications = Notifications::default();
        notifications.info("hello");

        notifications.tick(NOTIFICATION_DURATION_SECS / 2.0);
        assert_eq!(notifications.len(), 1);

        notifications.tick(NOTIFICATION_DURATION_SECS);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut notifications = Notifications::default();
        for i in 0..MAX_NOTIFICATIONS + 2 {
            notifications.info(format!("toast {}", i));
        }

        assert_eq!(notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(
            notifications.iter().next().map(|t| t.message.clone()),
            Some("toast 2".to_string())
        );
    }
}
