use serde::{Deserialize, Serialize};

// Query parameters accepted from the front-end. Axum's `Query` extractor
// rejects a request with 400 when a required parameter is absent.

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub keyword: String,
    pub distance: String,
    #[serde(rename = "segmentID")]
    pub segment_id: String,
    #[serde(rename = "geoHash")]
    pub geo_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventCardParams {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueCardParams {
    pub keyword: String,
}

// Output shapes returned to the front-end. Field names are the wire
// contract the existing UI expects, so they stay as-is rather than
// following Rust naming.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventSummary {
    pub id: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub icon: String,
    pub event: String,
    pub genre: String,
    pub venue: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDetail {
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_team: Option<String>,
    pub url: String,
    pub venue: String,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_ranges: Option<String>,
    pub ticket_status: String,
    pub buy_ticket_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_map: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VenueDetail {
    pub venue: String,
    pub logo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "stateCode", skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub map: String,
}
