// main.rs only boots the router and server

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ticketfinder_web::config::Config;
use ticketfinder_web::router::app_router;
use ticketfinder_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ticketfinder_web=debug,info")),
        )
        .init();

    let config = Config::from_env()?;

    // One shared client; the timeout bounds every vendor call.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let app = app_router(AppState::new(client, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("ticketfinder-web listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
