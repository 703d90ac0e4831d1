// src/bin/api_server.rs

use game_catalog_api::infra::logging;
use game_catalog_api::transport;
use game_catalog_api::{AppConfig, GameStore};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = AppConfig::from_env()?;

    // --- Catalog Store Initialization ---
    let store = if config.seed_catalog {
        GameStore::seeded()
    } else {
        GameStore::new()
    };
    info!(games = store.len(), seeded = config.seed_catalog, "catalog store initialized");

    let app_state = transport::http::AppState::new(store);

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let mut app = transport::http::create_router(app_state);
    if config.enable_swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        );
    }
    let app = app.layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "API server listening");
    if config.enable_swagger {
        info!("Swagger UI available at /swagger-ui");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; shutting down");
        return;
    }
    info!("shutdown signal received (Ctrl+C)");
}
