pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod router;
pub mod state;
pub mod ticketmaster;
