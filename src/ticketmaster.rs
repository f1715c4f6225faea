//! Outbound client for the Ticketmaster Discovery v2 API.
//!
//! Each function performs a single GET and returns the parsed JSON body.
//! The shared `reqwest::Client` in [`AppState`] carries the request timeout,
//! so a slow vendor surfaces as an upstream fault instead of hanging the
//! handler.

use serde_json::Value;
use tracing::info;

use crate::error::{Result, TicketfinderError};
use crate::models::SearchParams;
use crate::state::AppState;

/// Forwarded geohash precision. The front-end sends a full-precision
/// geohash; truncating to 6 characters widens the search cell on purpose.
const GEOHASH_PRECISION: usize = 6;

pub fn truncate_geohash(geo_hash: &str) -> &str {
    // Geohashes are ASCII, so the boundary check only trips on bad input,
    // which is then forwarded unchanged.
    geo_hash.get(..GEOHASH_PRECISION).unwrap_or(geo_hash)
}

/// Query pairs for the event search, separate from the request so the
/// forwarded values are testable without a network.
pub fn search_query(params: &SearchParams) -> [(&'static str, String); 5] {
    [
        ("keyword", params.keyword.clone()),
        ("segmentID", params.segment_id.clone()),
        ("radius", params.distance.clone()),
        ("unit", "miles".to_string()),
        ("geoPoint", truncate_geohash(&params.geo_hash).to_string()),
    ]
}

pub async fn search_events(state: &AppState, params: &SearchParams) -> Result<Value> {
    let url = format!("{}/events.json", state.config.api_url);
    get_json(state, &url, &search_query(params)).await
}

pub async fn event_by_id(state: &AppState, id: &str) -> Result<Value> {
    let url = format!("{}/events/{}", state.config.api_url, id);
    get_json(state, &url, &[]).await
}

pub async fn search_venues(state: &AppState, keyword: &str) -> Result<Value> {
    let url = format!("{}/venues", state.config.api_url);
    get_json(state, &url, &[("keyword", keyword.to_string())]).await
}

async fn get_json(state: &AppState, url: &str, query: &[(&str, String)]) -> Result<Value> {
    // Log the path only; the full request carries the API key.
    info!("GET {}", url);

    let response = state
        .client
        .get(url)
        .query(&[("apikey", state.config.ticketmaster_api_key.as_str())])
        .query(query)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(TicketfinderError::Upstream {
            status: status.as_u16(),
        });
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(geo_hash: &str) -> SearchParams {
        SearchParams {
            keyword: "phish".to_string(),
            distance: "25".to_string(),
            segment_id: "KZFzniwnSyZfZ7v7nJ".to_string(),
            geo_hash: geo_hash.to_string(),
        }
    }

    #[test]
    fn long_geohash_is_truncated_to_six_characters() {
        assert_eq!(truncate_geohash("c23nb62w20sth"), "c23nb6");
    }

    #[test]
    fn short_geohash_is_forwarded_unchanged() {
        assert_eq!(truncate_geohash("c23"), "c23");
        assert_eq!(truncate_geohash(""), "");
    }

    #[test]
    fn search_query_forwards_truncated_geo_point_in_miles() {
        let query = search_query(&params("c23nb62w20sth"));

        assert!(query.contains(&("geoPoint", "c23nb6".to_string())));
        assert!(query.contains(&("keyword", "phish".to_string())));
        assert!(query.contains(&("segmentID", "KZFzniwnSyZfZ7v7nJ".to_string())));
        assert!(query.contains(&("radius", "25".to_string())));
        assert!(query.contains(&("unit", "miles".to_string())));
    }
}
