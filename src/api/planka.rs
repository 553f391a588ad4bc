//! Planka backend implementation.
//!
//! Thin reqwest client for the Planka REST API. Authentication happens once
//! in [`PlankaApi::connect`]; every other call is a plain bearer-token
//! request. Board contents come from the board detail route, which ships
//! lists and cards in an `included` envelope.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, Board, BoardApi, Card, List, Project};
use crate::config::Credentials;

/// Planka REST client holding the session token.
pub struct PlankaApi {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

/// Single-item response envelope: `{"item": …}`
#[derive(Deserialize)]
struct ItemResponse<T> {
    item: T,
}

/// Multi-item response envelope: `{"items": […]}`
#[derive(Deserialize)]
struct ItemsResponse<T> {
    items: Vec<T>,
}

/// Project detail response with its boards in the `included` envelope.
#[derive(Deserialize)]
struct ProjectDetail {
    #[serde(default)]
    included: ProjectIncluded,
}

#[derive(Deserialize, Default)]
struct ProjectIncluded {
    #[serde(default)]
    boards: Vec<Board>,
}

/// Board detail response with lists and cards in the `included` envelope.
#[derive(Deserialize)]
struct BoardDetail {
    #[serde(default)]
    included: BoardIncluded,
}

#[derive(Deserialize, Default)]
struct BoardIncluded {
    #[serde(default)]
    lists: Vec<List>,
    #[serde(default)]
    cards: Vec<Card>,
}

/// Error body Planka attaches to non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl PlankaApi {
    /// Authenticate against the server and return a ready client.
    ///
    /// `POST /api/access-tokens` exchanges the username/password for a
    /// session token; a rejected login surfaces as [`ApiError::Auth`].
    pub async fn connect(credentials: &Credentials) -> Result<Self, ApiError> {
        let http = reqwest::Client::new();
        let base_url = credentials.url.trim_end_matches('/').to_string();

        let response = http
            .post(format!("{base_url}/api/access-tokens"))
            .json(&serde_json::json!({
                "emailOrUsername": credentials.username,
                "password": credentials.password,
            }))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED || response.status() == StatusCode::BAD_REQUEST {
            let message = Self::error_message(response).await;
            return Err(ApiError::Auth(message));
        }

        let response = Self::check_status(response).await?;
        let body: ItemResponse<String> = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidData(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token: body.item,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response into the error taxonomy, extracting the
    /// server's message when it sent one.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = Self::error_message(response).await;
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Auth(message)),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(message)),
            _ => Err(ApiError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }

    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        let fallback = status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
        match response.json::<ErrorBody>().await {
            Ok(ErrorBody { message: Some(message) }) => message,
            _ => fallback,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        response.json().await.map_err(|e| ApiError::InvalidData(e.to_string()))
    }

    async fn board_detail(&self, board_id: &str) -> Result<BoardDetail, ApiError> {
        self.get(&format!("/api/boards/{board_id}")).await
    }
}

#[async_trait]
impl BoardApi for PlankaApi {
    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        let body: ItemsResponse<Project> = self.get("/api/projects").await?;
        Ok(body.items)
    }

    async fn boards(&self, project_id: &str) -> Result<Vec<Board>, ApiError> {
        let detail: ProjectDetail = self.get(&format!("/api/projects/{project_id}")).await?;
        Ok(detail.included.boards)
    }

    async fn lists(&self, board_id: &str) -> Result<Vec<List>, ApiError> {
        Ok(self.board_detail(board_id).await?.included.lists)
    }

    async fn cards(&self, board_id: &str, list_id: &str) -> Result<Vec<Card>, ApiError> {
        let detail = self.board_detail(board_id).await?;
        Ok(detail
            .included
            .cards
            .into_iter()
            .filter(|card| card.list_id == list_id)
            .collect())
    }

    async fn card(&self, card_id: &str) -> Result<Card, ApiError> {
        let body: ItemResponse<Card> = self.get(&format!("/api/cards/{card_id}")).await?;
        Ok(body.item)
    }

    async fn create_card(&self, list_id: &str, name: &str) -> Result<Card, ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/api/lists/{list_id}/cards")))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "name": name, "position": 65_535 }))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let body: ItemResponse<Card> = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidData(e.to_string()))?;
        Ok(body.item)
    }

    async fn delete_card(&self, card_id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/cards/{card_id}")))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn move_card(&self, card_id: &str, list_id: &str) -> Result<Card, ApiError> {
        let response = self
            .http
            .patch(self.url(&format!("/api/cards/{card_id}")))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "listId": list_id }))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let body: ItemResponse<Card> = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidData(e.to_string()))?;
        Ok(body.item)
    }
}
