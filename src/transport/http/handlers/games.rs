use crate::domain::game::{CreateGameRequest, Game};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{ApiResponse, AppState, CREATE_GAME_EXPECTED};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::{debug, info, warn};

#[utoipa::path(
    get,
    path = "/games",
    responses(
        (status = 200, description = "All games in insertion order", body = [Game])
    )
)]
pub async fn list_games_handler(State(state): State<AppState>) -> Json<Vec<Game>> {
    let store = state.store.read().await;
    Json(store.list_all().to_vec())
}

#[utoipa::path(
    get,
    path = "/games/{id}",
    params(
        ("id" = i32, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "Game found", body = Game),
        (status = 400, description = "Id is not an integer", body = ApiResponse),
        (status = 404, description = "No game with this id", body = ApiResponse)
    )
)]
pub async fn get_game_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Game>, ApiError> {
    let Path(id) = id.map_err(|e| {
        warn!(error = %e, "rejected game id");
        ApiError::from(e)
    })?;

    let store = state.store.read().await;
    match store.find_by_id(id) {
        Some(game) => Ok(Json(game.clone())),
        None => {
            debug!(id, "game not found");
            Err(ApiError::NotFound(format!("Game {} not found", id)))
        }
    }
}

#[utoipa::path(
    post,
    path = "/games",
    request_body = CreateGameRequest,
    responses(
        (status = 201, description = "Game created; Location points at /games/{id}", body = Game),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_game_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request.map_err(|e| {
        warn!(error = %e, "rejected create-game body");
        ApiError::invalid_body(e, CREATE_GAME_EXPECTED)
    })?;

    // Id assignment and append happen under one write guard.
    let game = state.store.write().await.create(request)?;
    info!(id = game.id, name = %game.name, "game created");

    let location = format!("/games/{}", game.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(game)))
}
