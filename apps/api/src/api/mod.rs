// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::infrastructure::SharedScoreboard;
use handlers::games;

/// Builds the HTTP router over a shared scoreboard
pub fn router(board: SharedScoreboard) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(games::health_check))
        // Game routes
        .route(
            "/api/games",
            get(games::list_games)
                .post(games::create_game)
                .delete(games::clear_games),
        )
        .route(
            "/api/games/:id",
            get(games::get_game).delete(games::remove_game),
        )
        .route("/api/games/:id/score", put(games::update_score))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(board)
}
