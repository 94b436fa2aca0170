use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::{
    api::source::{validate_username, PlayerSource},
    config::ApiSettings,
    models::{ChessCardsError, PlayerProfile, PlayerStats, Result},
};

/// Client for the chess.com published-data API.
pub struct ChessComClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ChessComClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| ChessCardsError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/player/{}", self.base_url, username)
    }

    pub fn stats_url(&self, username: &str) -> String {
        format!("{}/player/{}/stats", self.base_url, username)
    }

    async fn get_json<T: DeserializeOwned>(&self, username: &str, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ChessCardsError::PlayerNotFound(username.to_string()));
        }
        if !status.is_success() {
            return Err(ChessCardsError::ApiStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PlayerSource for ChessComClient {
    async fn fetch_profile(&self, username: &str) -> Result<PlayerProfile> {
        validate_username(username)?;
        let url = self.profile_url(username);
        self.get_json(username, &url).await
    }

    async fn fetch_stats(&self, username: &str) -> Result<PlayerStats> {
        validate_username(username)?;
        let url = self.stats_url(username);
        self.get_json(username, &url).await
    }
}
