use crate::domain::game::GameStore;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<GameStore>>,
}

impl AppState {
    pub fn new(store: GameStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Envelope used for errors and the health check. Game routes return bare
/// `Game` JSON on success.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// Shape hint included in 422 messages for POST /games.
pub const CREATE_GAME_EXPECTED: &str =
    r#"{"name": string, "genre": string, "price": number, "releaseDate": "YYYY-MM-DD"}"#;
