use std::time::{Duration, Instant};

use crate::{
    animation::{spring_target, CardMotion, SpringConfig},
    cards::{CardSink, Dashboard},
    config::Settings,
    models::PlayerProfile,
};

pub struct App {
    pub dashboard: Dashboard,
    pub motions: Vec<CardMotion>,
    pub selected: usize,
    /// Every card's position springs are at rest.
    pub animation_settled: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
    card_size: f64,
    front_reset_delay: Duration,
    front_reset_at: Option<Instant>,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        let config = SpringConfig::from_settings(&settings.animation);
        Self {
            dashboard: Dashboard::new(&settings.cards),
            motions: settings.cards.iter().map(|_| CardMotion::hidden(config)).collect(),
            selected: 0,
            animation_settled: true,
            status_message: None,
            should_quit: false,
            card_size: settings.card.size,
            front_reset_delay: settings.animation.front_reset_delay(),
            front_reset_at: None,
        }
    }

    pub fn loading_progress(&self) -> (usize, usize) {
        let aggregator = self.dashboard.aggregator();
        (aggregator.ready_count(), aggregator.expected())
    }

    pub fn is_revealed(&self) -> bool {
        self.dashboard.aggregator().is_revealed()
    }

    /// Shows or hides the deck. Refused while any card is still loading.
    pub fn toggle_cards(&mut self) -> bool {
        self.toggle_cards_at(Instant::now())
    }

    pub fn toggle_cards_at(&mut self, now: Instant) -> bool {
        if !self.dashboard.toggle_reveal() {
            let (ready, total) = self.loading_progress();
            self.status_message = Some(format!("Still loading players ({}/{})", ready, total));
            return false;
        }

        let show = self.is_revealed();
        for (index, motion) in self.motions.iter_mut().enumerate() {
            motion.retarget(spring_target(show, index, self.card_size));
        }
        self.animation_settled = false;
        self.front_reset_at = Some(now + self.front_reset_delay);
        self.status_message = None;
        true
    }

    /// Turns the selected card over once the deck has come to rest.
    pub fn flip_selected(&mut self) -> bool {
        self.flip(self.selected)
    }

    pub fn flip(&mut self, index: usize) -> bool {
        if !self.is_revealed() || !self.animation_settled {
            return false;
        }
        if !self.dashboard.flip_card(index) {
            return false;
        }
        if let (Some(card), Some(motion)) = (self.dashboard.card(index), self.motions.get_mut(index)) {
            motion.set_flipped(!card.front);
        }
        self.selected = index;
        true
    }

    pub fn select_next(&mut self) {
        if !self.motions.is_empty() {
            self.selected = (self.selected + 1) % self.motions.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.motions.is_empty() {
            self.selected = (self.selected + self.motions.len() - 1) % self.motions.len();
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.tick_at(Instant::now(), dt);
    }

    pub fn tick_at(&mut self, now: Instant, dt: Duration) {
        if self.front_reset_at.is_some_and(|at| now >= at) {
            self.front_reset_at = None;
            self.dashboard.reset_to_front();
            for motion in &mut self.motions {
                motion.set_flipped(false);
            }
        }

        for motion in &mut self.motions {
            motion.step(dt);
        }
        self.animation_settled = self.motions.iter().all(CardMotion::is_settled);
    }
}

impl CardSink for App {
    fn apply_profile(&mut self, index: usize, profile: &PlayerProfile, plus: u32) {
        self.dashboard.apply_profile(index, profile, plus);
    }

    fn apply_rating(&mut self, index: usize, rating: i64) {
        self.dashboard.apply_rating(index, rating);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_app() -> App {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        for (index, spec) in settings.cards.iter().enumerate() {
            let profile = PlayerProfile {
                username: spec.name.clone(),
                ..Default::default()
            };
            app.apply_profile(index, &profile, 120);
        }
        app
    }

    fn settle(app: &mut App, now: Instant) {
        for _ in 0..500 {
            app.tick_at(now, Duration::from_millis(16));
        }
    }

    #[test]
    fn test_toggle_refused_while_loading() {
        let mut app = App::new(&Settings::default());
        assert!(!app.toggle_cards());
        assert_eq!(app.status_message.as_deref(), Some("Still loading players (0/6)"));
        assert!(!app.is_revealed());
    }

    #[test]
    fn test_reveal_then_flip() {
        let mut app = ready_app();
        let now = Instant::now();
        assert!(app.toggle_cards_at(now));
        assert!(!app.animation_settled);
        assert!(!app.flip_selected(), "flip must wait for the deck to settle");

        settle(&mut app, now + Duration::from_secs(1));
        assert!(app.animation_settled);
        assert!(app.flip_selected());
        assert!(!app.dashboard.card(0).unwrap().front);
    }

    #[test]
    fn test_toggle_turns_cards_back_to_front() {
        let mut app = ready_app();
        let start = Instant::now();
        app.toggle_cards_at(start);
        settle(&mut app, start + Duration::from_secs(1));
        app.flip(2);
        assert!(!app.dashboard.card(2).unwrap().front);

        let hide = start + Duration::from_secs(2);
        app.toggle_cards_at(hide);
        app.tick_at(hide + Duration::from_millis(100), Duration::from_millis(16));
        assert!(!app.dashboard.card(2).unwrap().front);
        app.tick_at(hide + Duration::from_millis(450), Duration::from_millis(16));
        assert!(app.dashboard.card(2).unwrap().front);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = ready_app();
        app.select_previous();
        assert_eq!(app.selected, 5);
        app.select_next();
        assert_eq!(app.selected, 0);
    }
}
