use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChessCardsError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("chess.com returned status {status} for {url}")]
    ApiStatus { url: String, status: u16 },

    #[error("No {mode} rating recorded for {username}")]
    MissingRating { username: String, mode: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, ChessCardsError>;
