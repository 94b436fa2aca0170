use serde::{Deserialize, Serialize};

use crate::cards::StreakHistory;
use crate::models::{CardSpec, GameMode, PlayerProfile, Tier, DEFAULT_RATING};

/// Everything a card renders. Fields keep their defaults until the
/// matching lookup succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDisplayState {
    /// Username the card was configured with.
    pub requested_name: String,
    pub game: GameMode,
    pub avatar: String,
    /// Username as returned by the profile lookup.
    pub username: String,
    /// Lower-cased title abbreviation, empty for untitled players.
    pub title: String,
    pub location: Option<String>,
    pub rating: u32,
    /// Synthetic hot-streak gain shown as `+N`.
    pub plus: u32,
    pub front: bool,
    pub history: Option<StreakHistory>,
}

impl CardDisplayState {
    pub fn new(spec: &CardSpec) -> Self {
        Self {
            requested_name: spec.name.clone(),
            game: spec.game,
            avatar: String::new(),
            username: String::new(),
            title: String::new(),
            location: None,
            rating: DEFAULT_RATING,
            plus: 0,
            front: true,
            history: None,
        }
    }

    pub fn apply_profile(&mut self, profile: &PlayerProfile, plus: u32) {
        self.avatar = profile.avatar.clone().unwrap_or_default();
        self.username = profile.username.clone();
        self.title = profile
            .title
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        self.location = profile.location.clone();
        self.plus = plus;
    }

    /// Stores a rating reported by the API, clamping negatives to 0.
    pub fn apply_rating(&mut self, rating: i64) {
        self.rating = rating.clamp(0, u32::MAX as i64) as u32;
    }

    pub fn tier(&self) -> Tier {
        Tier::from_rating(self.rating as i64)
    }

    pub fn tier_label(&self) -> &'static str {
        self.tier().label()
    }

    /// Name line as shown on the card front, e.g. `GM Hikaru`.
    pub fn display_name(&self) -> String {
        let name = if self.username.is_empty() {
            &self.requested_name
        } else {
            &self.username
        };
        if self.title.is_empty() {
            name.clone()
        } else {
            format!("{} {}", self.title.to_uppercase(), name)
        }
    }

    pub fn is_loaded(&self) -> bool {
        !self.username.is_empty()
    }
}
