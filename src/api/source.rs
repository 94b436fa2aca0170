use async_trait::async_trait;

use crate::models::{ChessCardsError, PlayerProfile, PlayerStats, Result};

/// Read-only lookups a card needs.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    /// Public profile: avatar, title, display username.
    async fn fetch_profile(&self, username: &str) -> Result<PlayerProfile>;

    /// Rating stats for every mode the player has played.
    async fn fetch_stats(&self, username: &str) -> Result<PlayerStats>;
}

/// chess.com usernames are 3 to 25 characters of ASCII letters, digits,
/// `_` and `-`.
pub fn validate_username(username: &str) -> Result<()> {
    let valid_len = (3..=25).contains(&username.len());
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid_len && valid_chars {
        Ok(())
    } else {
        Err(ChessCardsError::InvalidUsername(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("magnus335").is_ok());
        assert!(validate_username("Ginger_GM").is_ok());
        assert!(validate_username("some-player").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("../stats").is_err());
        assert!(validate_username("name with space").is_err());
        assert!(validate_username(&"x".repeat(26)).is_err());
    }
}
