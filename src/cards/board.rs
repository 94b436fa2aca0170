use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::warn;

use crate::{
    cards::{aggregator::RevealAggregator, history::StreakHistory},
    models::{CardDisplayState, CardSpec, PlayerProfile},
};

/// Receives lookup results from card controllers.
pub trait CardSink: Send {
    fn apply_profile(&mut self, index: usize, profile: &PlayerProfile, plus: u32);
    fn apply_rating(&mut self, index: usize, rating: i64);
}

/// All card states plus the readiness gate.
#[derive(Debug, Clone)]
pub struct Dashboard {
    cards: Vec<CardDisplayState>,
    aggregator: RevealAggregator,
}

impl Dashboard {
    pub fn new(specs: &[CardSpec]) -> Self {
        Self {
            cards: specs.iter().map(CardDisplayState::new).collect(),
            aggregator: RevealAggregator::new(specs.len()),
        }
    }

    pub fn cards(&self) -> &[CardDisplayState] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&CardDisplayState> {
        self.cards.get(index)
    }

    pub fn aggregator(&self) -> &RevealAggregator {
        &self.aggregator
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn toggle_reveal(&mut self) -> bool {
        self.aggregator.toggle()
    }

    /// Turns a card over. A fresh streak history is drawn every time a
    /// card shows its back.
    pub fn flip_card(&mut self, index: usize) -> bool {
        self.flip_card_with(index, Local::now().date_naive(), &mut rand::thread_rng())
    }

    pub fn flip_card_with<R: Rng + ?Sized>(&mut self, index: usize, today: NaiveDate, rng: &mut R) -> bool {
        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };
        card.front = !card.front;
        if !card.front {
            card.history = Some(StreakHistory::generate(card.rating, card.plus, today, rng));
        }
        true
    }

    pub fn reset_to_front(&mut self) {
        for card in &mut self.cards {
            card.front = true;
        }
    }
}

impl CardSink for Dashboard {
    fn apply_profile(&mut self, index: usize, profile: &PlayerProfile, plus: u32) {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.apply_profile(profile, plus);
                self.aggregator.mark_ready(index);
            }
            None => warn!("Profile for unknown card index {}", index),
        }
    }

    fn apply_rating(&mut self, index: usize, rating: i64) {
        match self.cards.get_mut(index) {
            Some(card) => card.apply_rating(rating),
            None => warn!("Rating for unknown card index {}", index),
        }
    }
}
