//! Notification sink
//!
//! Human-readable outcome messages for the user, one per action.

use colored::Colorize;

/// Outcome of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A message for the user: short title plus a description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Receives notifications
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Prints notifications to the terminal
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => {
                println!("{}", notification.title.green().bold());
                println!("   {}", notification.description);
            }
            NotificationLevel::Error => {
                eprintln!("{}", notification.title.red().bold());
                eprintln!("   {}", notification.description.red());
            }
        }
    }
}

/// Keeps notifications in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
