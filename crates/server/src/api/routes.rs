use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{chapters, games, handlers, middleware::metrics_middleware};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/languages", get(handlers::list_languages))
        // Corpus
        .route("/chapters", get(chapters::list_chapters))
        .route("/chapters/{number}", get(chapters::get_chapter))
        .route("/chapters/{number}/verses/{verse}", get(chapters::get_verse))
        .route("/verses/{id}", get(chapters::get_verse_by_id))
        .route("/search", get(chapters::search))
        // Games
        .route("/games", get(games::list_games))
        .route("/games/{mode}", get(games::get_game))
        .route("/games/{mode}/questions", post(games::build_questions))
        .route(
            "/games/{mode}/levels/{level}/questions",
            post(games::build_level_questions),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
