//! Reshapes Ticketmaster Discovery payloads into the front-end contract.
//!
//! The vendor nests heavily under `_embedded` and omits fields freely, so
//! every access goes through [`pluck`] (optional) or `require` (absence is
//! an upstream shape fault surfaced as 502).

use serde_json::Value;

use crate::error::{Result, TicketfinderError};
use crate::models::{EventDetail, EventSummary, VenueDetail};

/// Classification levels composing the card genre string, in display order.
const GENRE_LEVELS: [&str; 5] = ["segment", "genre", "subGenre", "type", "subType"];

/// Ticketmaster fills unset classification levels with this literal.
const UNDEFINED: &str = "Undefined";

const NO_LOGO: &str = "nologo";

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Search outcome. The front-end distinguishes "no results" from an empty
/// page by the type of the `events` field, so the no-match case is kept
/// separate instead of collapsing into an empty list.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<EventSummary>),
    NoMatch,
}

/// Walks `path` through objects (by key) and arrays (by index), returning
/// `None` as soon as a step is missing.
pub fn pluck<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn require<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    pluck(value, path).ok_or_else(|| TicketfinderError::MissingField(path.join(".")))
}

fn require_str(value: &Value, path: &[&str]) -> Result<String> {
    require(value, path)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| TicketfinderError::MissingField(path.join(".")))
}

fn pluck_str(value: &Value, path: &[&str]) -> Option<String> {
    pluck(value, path)?.as_str().map(str::to_string)
}

/// Maps a Discovery search payload to the event summary list. A payload
/// without the `_embedded` collection is a defined no-match; an event
/// missing a required field fails the whole batch.
pub fn search_results(data: &Value) -> Result<SearchOutcome> {
    let events = match pluck(data, &["_embedded", "events"]).and_then(Value::as_array) {
        Some(events) => events,
        None => return Ok(SearchOutcome::NoMatch),
    };

    let mut summaries = Vec::with_capacity(events.len());
    for event in events {
        summaries.push(EventSummary {
            id: require_str(event, &["id"])?,
            date: require_str(event, &["dates", "start", "localDate"])?,
            time: pluck_str(event, &["dates", "start", "localTime"]),
            icon: require_str(event, &["images", "0", "url"])?,
            event: require_str(event, &["name"])?,
            genre: require_str(event, &["classifications", "0", "segment", "name"])?,
            venue: require_str(event, &["_embedded", "venues", "0", "name"])?,
        });
    }

    Ok(SearchOutcome::Found(summaries))
}

/// Maps a single-event payload to the detail card. A payload without a
/// top-level `name` is how the vendor signals an unknown id, mapped to
/// `None` rather than a fault.
pub fn event_detail(data: &Value) -> Result<Option<EventDetail>> {
    if pluck(data, &["name"]).is_none() {
        return Ok(None);
    }

    let embedded = require(data, &["_embedded"])?;
    let url = require_str(data, &["url"])?;

    let artist_team = match pluck(embedded, &["attractions"]) {
        Some(_) => Some(require_str(embedded, &["attractions", "0", "name"])?),
        None => None,
    };

    let price_ranges = match pluck(data, &["priceRanges", "0"]) {
        Some(range) => Some(format_price_range(range)?),
        None => None,
    };

    let seat_map = match pluck(data, &["seatmap"]) {
        Some(seatmap) => Some(require_str(seatmap, &["staticUrl"])?),
        None => None,
    };

    Ok(Some(EventDetail {
        title: require_str(data, &["name"])?,
        date: require_str(data, &["dates", "start", "localDate"])?,
        time: pluck_str(data, &["dates", "start", "localTime"]),
        artist_team,
        venue: require_str(embedded, &["venues", "0", "name"])?,
        genre: compose_genre(require(data, &["classifications", "0"])?),
        price_ranges,
        ticket_status: require_str(data, &["dates", "status", "code"])?,
        buy_ticket_at: url.clone(),
        url,
        seat_map,
    }))
}

/// Maps a venue-search payload to the venue card, taking the first match.
/// No `_embedded` collection means no venue matched the keyword.
pub fn venue_detail(data: &Value, maps_api_key: &str) -> Result<Option<VenueDetail>> {
    let venue = match pluck(data, &["_embedded"]) {
        Some(embedded) => require(embedded, &["venues", "0"])?,
        None => return Ok(None),
    };

    let name = require_str(venue, &["name"])?;

    let logo = match pluck(venue, &["images"]) {
        Some(_) => require_str(venue, &["images", "0", "url"])?,
        None => NO_LOGO.to_string(),
    };

    let address = match pluck(venue, &["address"]) {
        Some(address) => Some(require_str(address, &["line1"])?),
        None => None,
    };

    let city = match pluck(venue, &["city"]) {
        Some(city) => Some(require_str(city, &["name"])?),
        None => None,
    };

    Ok(Some(VenueDetail {
        map: map_search_url(maps_api_key, &name),
        venue: name,
        logo,
        address,
        city,
        state_code: pluck_str(venue, &["state", "stateCode"]),
        postal_code: pluck_str(venue, &["postalCode"]),
        url: pluck_str(venue, &["url"]),
    }))
}

/// Joins the classification levels with `" | "`, skipping levels that are
/// absent or carry the vendor's "Undefined" filler.
fn compose_genre(classification: &Value) -> String {
    GENRE_LEVELS
        .iter()
        .filter_map(|level| pluck(classification, &[level, "name"]).and_then(Value::as_str))
        .filter(|name| *name != UNDEFINED)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn format_price_range(range: &Value) -> Result<String> {
    let min = require(range, &["min"])?;
    let max = require(range, &["max"])?;
    let currency = require_str(range, &["currency"])?;
    Ok(format!("{}-{} {}", min, max, currency))
}

/// The map link is the one always-derived field: a Google Maps search URL
/// parameterized by the venue name. Never called server-side.
fn map_search_url(maps_api_key: &str, venue_name: &str) -> String {
    reqwest::Url::parse_with_params(MAPS_SEARCH_URL, &[("api", maps_api_key), ("query", venue_name)])
        .expect("static maps URL is valid")
        .to_string()
}
