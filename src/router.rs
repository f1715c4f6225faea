use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers::{event_card, health, search, venue_card};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    // ServeDir as the fallback serves the front-end entry document at `/`
    // (index.html resolution) alongside its assets.
    Router::new()
        .route("/get_search_results", get(search))
        .route("/get_card1", get(event_card))
        .route("/get_card2", get(venue_card))
        .route("/health", get(health))
        .fallback_service(ServeDir::new("static"))
        .layer(cors)
        .with_state(state)
}
