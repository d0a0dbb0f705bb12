//! Toast notification model.
//!
//! DESIGN
//! ======
//! Notifications are keyed by id so the timed removal and the dismiss button
//! can race freely: whichever runs second finds nothing to remove.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use uuid::Uuid;

/// Layout classes shared by every notification element.
const BASE_CLASS: &str =
    "fixed top-20 right-4 z-50 p-4 rounded-lg shadow-lg text-white max-w-sm transform transition-all duration-300";

/// Off-screen translation used while entering and dismissing.
pub const OFFSCREEN_CLASS: &str = "translate-x-full";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// Parse a kind name; anything unrecognized is `Info`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn background_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-500",
            Self::Error => "bg-red-500",
            Self::Warning => "bg-yellow-500",
            Self::Info => "bg-blue-500",
        }
    }
}

/// Lifecycle phase. Removal is represented by absence from the center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationPhase {
    #[default]
    Entering,
    Visible,
    Dismissing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self { id: Uuid::new_v4(), message: message.into(), kind, phase: NotificationPhase::Entering }
    }

    #[must_use]
    pub fn is_offscreen(&self) -> bool {
        self.phase != NotificationPhase::Visible
    }

    /// Full class attribute for the current phase.
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut class = format!("{BASE_CLASS} {}", self.kind.background_class());
        if self.is_offscreen() {
            class.push(' ');
            class.push_str(OFFSCREEN_CLASS);
        }
        class
    }
}

/// Live notifications in creation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn insert(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.items.push(notification);
        id
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<Uuid> {
        self.items.iter().map(|n| n.id).collect()
    }

    /// Move an entering notification on-screen.
    pub fn reveal(&mut self, id: Uuid) -> bool {
        self.transition(id, NotificationPhase::Entering, NotificationPhase::Visible)
    }

    /// Start the exit transition. Valid from either live phase.
    pub fn begin_dismiss(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if n.phase != NotificationPhase::Dismissing => {
                n.phase = NotificationPhase::Dismissing;
                true
            }
            _ => false,
        }
    }

    /// Remove a notification. Returns `false` when it was already gone.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    fn transition(&mut self, id: Uuid, from: NotificationPhase, to: NotificationPhase) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if n.phase == from => {
                n.phase = to;
                true
            }
            _ => false,
        }
    }
}
