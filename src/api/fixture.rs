use async_trait::async_trait;
use std::collections::HashMap;

use crate::{
    api::source::PlayerSource,
    models::{ChessCardsError, GameMode, ModeStats, PlayerProfile, PlayerStats, Result},
};

/// In-memory player data, keyed by lower-cased username. Backs the
/// `--offline` mode.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    players: HashMap<String, (PlayerProfile, PlayerStats)>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, profile: PlayerProfile, stats: PlayerStats) -> Self {
        self.players
            .insert(profile.username.to_lowercase(), (profile, stats));
        self
    }

    /// Shorthand for a player with a single rated mode.
    pub fn with_rated_player(self, username: &str, title: Option<&str>, mode: GameMode, rating: i64) -> Self {
        let profile = PlayerProfile {
            username: username.to_string(),
            avatar: Some(format!("https://images.chesscomfiles.com/uploads/v1/user/{}.png", username.to_lowercase())),
            title: title.map(str::to_string),
            ..Default::default()
        };
        let mut stats = PlayerStats::default();
        stats.set_mode(mode, ModeStats::with_last(rating));
        self.with_player(profile, stats)
    }

    /// Data for the default card list.
    pub fn demo() -> Self {
        Self::new()
            .with_rated_player("DanielRensch", Some("IM"), GameMode::Blitz, 2465)
            .with_rated_player("magnus335", None, GameMode::Blitz, 1530)
            .with_rated_player("Hikaru", Some("GM"), GameMode::Blitz, 3245)
            .with_rated_player("Coltinator5000", None, GameMode::Blitz, 1874)
            .with_rated_player("Ginger_GM", Some("GM"), GameMode::Blitz, 2612)
            .with_rated_player("Bookfair", None, GameMode::Blitz, 1688)
    }

    fn lookup(&self, username: &str) -> Result<&(PlayerProfile, PlayerStats)> {
        self.players
            .get(&username.to_lowercase())
            .ok_or_else(|| ChessCardsError::PlayerNotFound(username.to_string()))
    }
}

#[async_trait]
impl PlayerSource for FixtureSource {
    async fn fetch_profile(&self, username: &str) -> Result<PlayerProfile> {
        self.lookup(username).map(|(profile, _)| profile.clone())
    }

    async fn fetch_stats(&self, username: &str) -> Result<PlayerStats> {
        self.lookup(username).map(|(_, stats)| stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[tokio::test]
    async fn test_demo_covers_default_cards() {
        let source = FixtureSource::demo();
        for spec in Settings::default().cards {
            let profile = source.fetch_profile(&spec.name).await.unwrap();
            assert_eq!(profile.username.to_lowercase(), spec.name.to_lowercase());
            let stats = source.fetch_stats(&spec.name).await.unwrap();
            assert!(stats.last_rating(spec.game).is_some());
        }
    }

    #[tokio::test]
    async fn test_unknown_player() {
        let err = FixtureSource::demo().fetch_profile("nobody_here").await.unwrap_err();
        assert!(matches!(err, ChessCardsError::PlayerNotFound(_)));
    }
}
