use rand::Rng;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    api::PlayerSource,
    cards::board::CardSink,
    config::CardSettings,
    models::{CardSpec, ChessCardsError},
};

/// What a controller managed to load for its card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardOutcome {
    pub profile_loaded: bool,
    pub rating_loaded: bool,
}

/// Loads one card: profile first, then rating stats.
#[derive(Debug, Clone)]
pub struct CardController {
    index: usize,
    spec: CardSpec,
    delta_min: u32,
    delta_max: u32,
}

impl CardController {
    pub fn new(index: usize, spec: CardSpec, settings: &CardSettings) -> Self {
        Self {
            index,
            spec,
            delta_min: settings.delta_min.min(settings.delta_max),
            delta_max: settings.delta_max.max(settings.delta_min),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn spec(&self) -> &CardSpec {
        &self.spec
    }

    fn roll_delta(&self) -> u32 {
        rand::thread_rng().gen_range(self.delta_min..=self.delta_max)
    }

    /// Runs both lookups. Failures are logged and leave the card's fields
    /// at their defaults; only a successful profile lookup marks the card
    /// ready.
    pub async fn run<S: CardSink>(&self, source: &dyn PlayerSource, sink: &Mutex<S>) -> CardOutcome {
        let name = self.spec.name.as_str();
        let mut outcome = CardOutcome::default();

        match source.fetch_profile(name).await {
            Ok(profile) => {
                let plus = self.roll_delta();
                sink.lock().await.apply_profile(self.index, &profile, plus);
                outcome.profile_loaded = true;
                info!("Loaded profile for {}", profile.username);
            }
            Err(e) => warn!("Failed to load profile for {}: {}", name, e),
        }

        let rating = source.fetch_stats(name).await.and_then(|stats| {
            stats.last_rating(self.spec.game).ok_or_else(|| ChessCardsError::MissingRating {
                username: name.to_string(),
                mode: self.spec.game.as_str().to_string(),
            })
        });

        match rating {
            Ok(rating) => {
                sink.lock().await.apply_rating(self.index, rating);
                outcome.rating_loaded = true;
                info!("Loaded {} rating {} for {}", self.spec.game.label(), rating, name);
            }
            Err(e) => warn!("Failed to load rating for {}: {}", name, e),
        }

        outcome
    }
}

/// Loads every card concurrently into one sink.
pub async fn load_all<S: CardSink>(
    source: &dyn PlayerSource,
    specs: &[CardSpec],
    settings: &CardSettings,
    sink: &Mutex<S>,
) -> Vec<CardOutcome> {
    let controllers: Vec<CardController> = specs
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, spec)| CardController::new(index, spec, settings))
        .collect();

    futures::future::join_all(controllers.iter().map(|controller| controller.run(source, sink))).await
}
