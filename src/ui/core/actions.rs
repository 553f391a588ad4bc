use crate::api::Board;

/// Severity of a transient status-bar notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A transient on-screen notification. Shown in the status bar until the next
/// key press.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Screen transitions
    OpenBoard(Board),
    Back,

    // Card operations. Each one is a single remote call followed by a local
    // UI patch, and only on success.
    CreateCard {
        list_id: String,
        name: String,
    },
    DeleteCard {
        card_id: String,
    },
    MoveCard {
        card_id: String,
        target_list_id: String,
    },
    ViewCardDetails {
        card_id: String,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    Notify(Notification),

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    CardCreation {
        list_id: String,
        list_name: String,
    },
    DeleteConfirmation {
        card_id: String,
        card_name: String,
    },
    CardDetails {
        title: String,
        description: String,
    },
    Help,
    Logs,
}
