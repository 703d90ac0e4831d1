pub mod domain {
    pub mod game;
}
pub mod infra {
    pub mod config;
    pub mod logging;
}
pub mod transport {
    pub mod http;
}

// Convenience re-exports (keeps call-sites clean)
pub use domain::game::{CreateGameRequest, Game, GameStore, StoreError};
pub use infra::config::AppConfig;
