use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde_json::json;
use tracing::info;

use crate::error::{Result, TicketfinderError};
use crate::models::{EventCardParams, SearchParams, VenueCardParams};
use crate::normalize::{self, SearchOutcome};
use crate::state::AppState;
use crate::ticketmaster;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "ticketfinder-web",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /get_search_results` — keyword/location/category event search.
/// No match keeps the historical `{"events": 0}` sentinel: the front-end
/// checks the type of `events`, not its truthiness.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse> {
    let data = ticketmaster::search_events(&state, &params).await?;

    match normalize::search_results(&data)? {
        SearchOutcome::Found(events) => {
            info!("search '{}' returned {} events", params.keyword, events.len());
            Ok(Json(json!({ "events": events })))
        }
        SearchOutcome::NoMatch => {
            info!("search '{}' returned no events", params.keyword);
            Ok(Json(json!({ "events": 0 })))
        }
    }
}

/// `GET /get_card1` — single event detail card, wrapped in a
/// single-element array for front-end contract stability.
pub async fn event_card(
    State(state): State<AppState>,
    Query(params): Query<EventCardParams>,
) -> Result<impl IntoResponse> {
    let data = ticketmaster::event_by_id(&state, &params.id).await?;

    match normalize::event_detail(&data)? {
        Some(detail) => Ok(Json(json!({ "card1": [detail] }))),
        None => Err(TicketfinderError::NotFound),
    }
}

/// `GET /get_card2` — venue detail card for the first venue matching the
/// keyword, returned unwrapped.
pub async fn venue_card(
    State(state): State<AppState>,
    Query(params): Query<VenueCardParams>,
) -> Result<impl IntoResponse> {
    let data = ticketmaster::search_venues(&state, &params.keyword).await?;

    match normalize::venue_detail(&data, &state.config.google_maps_api_key)? {
        Some(detail) => Ok(Json(detail)),
        None => Err(TicketfinderError::NotFound),
    }
}
