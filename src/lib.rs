pub mod animation;
pub mod api;
pub mod cards;
pub mod config;
pub mod models;
pub mod styling;
pub mod tui;

pub use api::{ChessComClient, FixtureSource, PlayerSource};
pub use cards::{CardController, Dashboard, RevealAggregator};
pub use config::Settings;
pub use models::{CardDisplayState, CardSpec, ChessCardsError, GameMode, Result, Tier};
