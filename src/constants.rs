//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Display fallbacks for nullable remote fields
pub const UNTITLED_LIST: &str = "Untitled List";
pub const UNTITLED_CARD: &str = "Untitled Card";
pub const NO_DESCRIPTION: &str = "No description entered.";

/// List names recognized as the "Done" column when no explicit name is
/// configured. Matched case-insensitively against the full list name.
pub const DONE_LIST_KEYWORDS: &[&str] = &["done", "completed", "tamamlandı", "tamamlanan", "finished"];

// Warning Messages
pub const WARN_NO_CARD_SELECTED: &str = "No card selected.";
pub const WARN_NO_LIST_AVAILABLE: &str = "No list available to add card.";
pub const WARN_NO_DONE_LIST: &str = "Could not find a 'Done' list.";

// Info Messages
pub const INFO_ALREADY_DONE: &str = "Card is already in Done list.";
pub const INFO_CARD_DELETED: &str = "Card deleted.";
pub const INFO_MOVED_TO_DONE: &str = "Moved to Done.";

// Environment variables for credential resolution
pub const ENV_API_URL: &str = "PLANKA_API_URL";
pub const ENV_USERNAME: &str = "PLANKA_USERNAME";
pub const ENV_PASSWORD: &str = "PLANKA_PASSWORD";

// Config generation
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
