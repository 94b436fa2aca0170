pub mod aggregator;
pub mod board;
pub mod controller;
pub mod history;

pub use aggregator::{RevealAggregator, RevealState};
pub use board::{CardSink, Dashboard};
pub use controller::{load_all, CardController, CardOutcome};
pub use history::{StreakHistory, StreakPoint};
