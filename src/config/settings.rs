use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::models::{CardSpec, GameMode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub card: CardSettings,
    pub animation: AnimationSettings,
    #[serde(default)]
    pub cards: Vec<CardSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSettings {
    /// Multiplier applied to card spacing in the reveal layout.
    pub size: f64,
    pub delta_min: u32,
    pub delta_max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub tick_rate_ms: u64,
    pub tension: f64,
    pub friction: f64,
    pub mass: f64,
    pub precision: f64,
    /// Delay after a reveal toggle before every card turns back to its front.
    pub front_reset_ms: u64,
}

impl AnimationSettings {
    pub fn front_reset_delay(&self) -> Duration {
        Duration::from_millis(self.front_reset_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Chess Cards".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            api: ApiSettings {
                base_url: "https://api.chess.com/pub".to_string(),
                timeout_seconds: 10,
                user_agent: format!("chess-cards/{}", env!("CARGO_PKG_VERSION")),
            },
            card: CardSettings {
                size: 1.0,
                delta_min: 100,
                delta_max: 250,
            },
            // react-spring's "stiff" preset
            animation: AnimationSettings {
                tick_rate_ms: 33,
                tension: 210.0,
                friction: 20.0,
                mass: 1.0,
                precision: 0.01,
                front_reset_ms: 400,
            },
            cards: default_cards(),
        }
    }
}

fn default_cards() -> Vec<CardSpec> {
    [
        "DanielRensch",
        "magnus335",
        "Hikaru",
        "Coltinator5000",
        "Ginger_GM",
        "Bookfair",
    ]
    .into_iter()
    .map(|name| CardSpec::new(name, GameMode::Blitz))
    .collect()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::layered("CHESS_CARDS")
    }

    fn layered(env_prefix: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Self::base())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
            .build()?;

        s.try_deserialize().map(Self::with_default_cards)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Self::base())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize().map(Self::with_default_cards)
    }

    // Layered sources merge arrays element by element, so the default card
    // list stays out of the base layer and is filled in afterwards.
    fn base() -> Self {
        Self {
            cards: Vec::new(),
            ..Self::default()
        }
    }

    fn with_default_cards(mut self) -> Self {
        if self.cards.is_empty() {
            self.cards = default_cards();
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cards.is_empty() {
            return Err("At least one card must be configured".to_string());
        }

        if let Some(card) = self.cards.iter().find(|card| card.name.trim().is_empty()) {
            return Err(format!("Card for {:?} has an empty player name", card.game.as_str()));
        }

        if self.card.delta_min > self.card.delta_max {
            return Err(format!(
                "Rating delta range is inverted: {} > {}",
                self.card.delta_min, self.card.delta_max
            ));
        }

        if self.card.size <= 0.0 {
            return Err("Card size must be positive".to_string());
        }

        let anim = &self.animation;
        if anim.tick_rate_ms == 0 {
            return Err("Animation tick rate must be at least 1ms".to_string());
        }
        if anim.tension <= 0.0 || anim.friction <= 0.0 || anim.mass <= 0.0 || anim.precision <= 0.0 {
            return Err("Spring tension, friction, mass and precision must be positive".to_string());
        }

        Ok(())
    }
}
