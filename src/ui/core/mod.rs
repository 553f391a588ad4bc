//! Core UI functionality for the plankan application.
//!
//! The UI follows a component-based architecture: components implement the
//! [`Component`] trait, user input produces [`Action`] values, and the app
//! shell translates actions into remote calls and local state patches.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Notification, NotificationLevel};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
