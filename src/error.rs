use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketfinderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TicketfinderError>;

impl IntoResponse for TicketfinderError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            TicketfinderError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            // Vendor-side failures: the detail may carry upstream URLs
            // (including the API key), so it goes to the log, not the client.
            TicketfinderError::Http(_)
            | TicketfinderError::Json(_)
            | TicketfinderError::Upstream { .. }
            | TicketfinderError::MissingField(_) => {
                tracing::warn!("upstream failure: {}", self);
                (StatusCode::BAD_GATEWAY, "upstream failure")
            }
            TicketfinderError::Config(_) => {
                tracing::error!("configuration error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        (status, Json(json!({ "error": body }))).into_response()
    }
}
