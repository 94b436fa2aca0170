use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rated time controls reported by the chess.com stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "chess_blitz")]
    Blitz,
    #[serde(rename = "chess_bullet")]
    Bullet,
    #[serde(rename = "chess_rapid")]
    Rapid,
    #[serde(rename = "chess_daily")]
    Daily,
    #[serde(rename = "chess960_daily")]
    Daily960,
}

impl GameMode {
    /// Key of the mode in the stats document.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Blitz => "chess_blitz",
            GameMode::Bullet => "chess_bullet",
            GameMode::Rapid => "chess_rapid",
            GameMode::Daily => "chess_daily",
            GameMode::Daily960 => "chess960_daily",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Blitz => "Blitz",
            GameMode::Bullet => "Bullet",
            GameMode::Rapid => "Rapid",
            GameMode::Daily => "Daily",
            GameMode::Daily960 => "Daily 960",
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Blitz
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chess_blitz" | "blitz" => Ok(GameMode::Blitz),
            "chess_bullet" | "bullet" => Ok(GameMode::Bullet),
            "chess_rapid" | "rapid" => Ok(GameMode::Rapid),
            "chess_daily" | "daily" => Ok(GameMode::Daily),
            "chess960_daily" | "daily960" => Ok(GameMode::Daily960),
            other => Err(format!("unknown game mode: {}", other)),
        }
    }
}

/// One configured card: whose stats to show and for which mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    pub name: String,
    #[serde(default)]
    pub game: GameMode,
}

impl CardSpec {
    pub fn new(name: impl Into<String>, game: GameMode) -> Self {
        Self {
            name: name.into(),
            game,
        }
    }
}

/// Response of `GET /pub/player/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub followers: Option<u64>,
}

/// Response of `GET /pub/player/{username}/stats`. Modes the player has
/// never played are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub chess_blitz: Option<ModeStats>,
    #[serde(default)]
    pub chess_bullet: Option<ModeStats>,
    #[serde(default)]
    pub chess_rapid: Option<ModeStats>,
    #[serde(default)]
    pub chess_daily: Option<ModeStats>,
    #[serde(default)]
    pub chess960_daily: Option<ModeStats>,
}

impl PlayerStats {
    pub fn mode(&self, mode: GameMode) -> Option<&ModeStats> {
        match mode {
            GameMode::Blitz => self.chess_blitz.as_ref(),
            GameMode::Bullet => self.chess_bullet.as_ref(),
            GameMode::Rapid => self.chess_rapid.as_ref(),
            GameMode::Daily => self.chess_daily.as_ref(),
            GameMode::Daily960 => self.chess960_daily.as_ref(),
        }
    }

    /// Latest rating for a mode.
    pub fn last_rating(&self, mode: GameMode) -> Option<i64> {
        self.mode(mode)
            .and_then(|stats| stats.last.as_ref())
            .map(|snapshot| snapshot.rating)
    }

    pub fn set_mode(&mut self, mode: GameMode, stats: ModeStats) {
        let slot = match mode {
            GameMode::Blitz => &mut self.chess_blitz,
            GameMode::Bullet => &mut self.chess_bullet,
            GameMode::Rapid => &mut self.chess_rapid,
            GameMode::Daily => &mut self.chess_daily,
            GameMode::Daily960 => &mut self.chess960_daily,
        };
        *slot = Some(stats);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeStats {
    #[serde(default)]
    pub last: Option<RatingSnapshot>,
    #[serde(default)]
    pub best: Option<RatingSnapshot>,
    #[serde(default)]
    pub record: Option<Record>,
}

impl ModeStats {
    pub fn with_last(rating: i64) -> Self {
        Self {
            last: Some(RatingSnapshot {
                rating,
                date: None,
                rd: None,
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub rating: i64,
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(default)]
    pub rd: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub win: u32,
    #[serde(default)]
    pub loss: u32,
    #[serde(default)]
    pub draw: u32,
}
