use std::env;

use crate::error::{Result, TicketfinderError};

pub const DEFAULT_API_URL: &str = "https://app.ticketmaster.com/discovery/v2";

/// Process-wide configuration, loaded once at startup and shared through
/// [`crate::state::AppState`]. Handlers never read the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ticketmaster Discovery API key, sent as the `apikey` query parameter.
    pub ticketmaster_api_key: String,
    /// Google Maps key embedded in venue map links. Never used for an
    /// outbound call, so an empty value only degrades the generated link.
    pub google_maps_api_key: String,
    /// Base URL of the Discovery API, overridable for tests.
    pub api_url: String,
    pub port: u16,
    /// Timeout applied to every outbound vendor call.
    pub timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let ticketmaster_api_key = env::var("TICKETMASTER_API_KEY").map_err(|_| {
            TicketfinderError::Config("TICKETMASTER_API_KEY must be set".to_string())
        })?;

        let google_maps_api_key = env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default();

        let api_url = env::var("TICKETMASTER_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            ticketmaster_api_key,
            google_maps_api_key,
            api_url,
            port,
            timeout_seconds,
        })
    }
}
