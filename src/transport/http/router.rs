use crate::domain::game::{CreateGameRequest, Game};
use crate::transport::http::handlers::{games, greeting, health};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        greeting::hello_handler,
        greeting::fechcha_handler,
        health::healthcheck_handler,
        games::list_games_handler,
        games::get_game_handler,
        games::create_game_handler
    ),
    components(schemas(ApiResponse, Game, CreateGameRequest))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::hello_handler))
        .route("/fechcha", get(greeting::fechcha_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/games",
            get(games::list_games_handler).post(games::create_game_handler),
        )
        .route("/games/:id", get(games::get_game_handler))
        .with_state(app_state)
}
