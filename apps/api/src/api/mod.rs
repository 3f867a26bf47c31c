// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{roster, teams};
pub use state::AppState;

/// Builds the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(roster::health_check))
        // Demo roster and welcome action
        .route("/api/roster", get(roster::get_roster))
        .route("/api/welcome", post(roster::welcome))
        // Team routes
        .route("/api/teams", post(teams::create_team).get(teams::list_teams))
        .route("/api/teams/:id", get(teams::get_team).delete(teams::delete_team))
        .route("/api/teams/:id/players", post(teams::add_player))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
