//! Remote board API abstraction.
//!
//! This module defines the interface the UI uses to talk to a kanban server,
//! along with the mirrored entity types and error handling. The concrete
//! Planka implementation lives in [`planka`]; tests substitute their own
//! implementations of [`BoardApi`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod planka;

/// Common error types for remote board operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// A project owned by or shared with the authenticated user.
///
/// Entities in this module are read-only mirrors of remote state with a fixed
/// schema; fields the server adds beyond these are ignored on deserialization.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// A kanban board belonging to a project.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    pub project_id: String,
}

/// An ordered lane of cards within a board. The name is nullable on the
/// server and rendered as "Untitled List" when absent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub name: Option<String>,
    pub board_id: String,
}

/// A unit of work. `list_id` is the single source of truth for which list the
/// card belongs to; moving a card means the server reassigning this field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub list_id: String,
}

impl List {
    /// Display name with the untitled fallback applied.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(crate::constants::UNTITLED_LIST)
    }
}

impl Card {
    /// Display name with the untitled fallback applied.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(crate::constants::UNTITLED_CARD)
    }
}

/// Interface every board backend must implement.
///
/// All operations are call/response against the remote server; nothing is
/// cached on this side. The trait is object-safe on purpose: the UI receives
/// an `Arc<dyn BoardApi>` so a fake server can stand in during tests.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Projects accessible to the authenticated user.
    async fn projects(&self) -> Result<Vec<Project>, ApiError>;

    /// Boards of one project, in server order.
    async fn boards(&self, project_id: &str) -> Result<Vec<Board>, ApiError>;

    /// Lists of one board, in server order.
    async fn lists(&self, board_id: &str) -> Result<Vec<List>, ApiError>;

    /// Cards of one list, in server order. Planka only exposes cards through
    /// the board detail route, so the board id is part of the operation.
    async fn cards(&self, board_id: &str, list_id: &str) -> Result<Vec<Card>, ApiError>;

    /// Current name/description of a single card.
    async fn card(&self, card_id: &str) -> Result<Card, ApiError>;

    /// Create a card at the end of a list; the server assigns the id.
    async fn create_card(&self, list_id: &str, name: &str) -> Result<Card, ApiError>;

    /// Delete a card by id.
    async fn delete_card(&self, card_id: &str) -> Result<(), ApiError>;

    /// Reassign a card's owning list. Returns the authoritative post-move
    /// card, which the UI mounts in place of the old one.
    async fn move_card(&self, card_id: &str, list_id: &str) -> Result<Card, ApiError>;
}
