use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}
