use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Gates the reveal toggle until every configured card has loaded.
#[derive(Debug, Clone)]
pub struct RevealAggregator {
    ready: Vec<bool>,
    ready_count: usize,
    state: RevealState,
}

impl RevealAggregator {
    pub fn new(expected: usize) -> Self {
        Self {
            ready: vec![false; expected],
            ready_count: 0,
            state: RevealState::Hidden,
        }
    }

    /// Records that card `index` is ready. Returns `false` when the index
    /// is unknown or already counted.
    pub fn mark_ready(&mut self, index: usize) -> bool {
        match self.ready.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                self.ready_count += 1;
                debug!("Card {} ready ({}/{})", index, self.ready_count, self.ready.len());
                true
            }
            Some(_) => {
                debug!("Card {} signalled readiness twice", index);
                false
            }
            None => false,
        }
    }

    pub fn is_ready(&self, index: usize) -> bool {
        self.ready.get(index).copied().unwrap_or(false)
    }

    pub fn ready_count(&self) -> usize {
        self.ready_count
    }

    pub fn expected(&self) -> usize {
        self.ready.len()
    }

    pub fn all_ready(&self) -> bool {
        self.ready_count == self.ready.len()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Flips hidden ⇄ revealed. Does nothing and returns `false` while
    /// cards are still loading.
    pub fn toggle(&mut self) -> bool {
        if !self.all_ready() {
            return false;
        }
        self.state = match self.state {
            RevealState::Hidden => RevealState::Revealed,
            RevealState::Revealed => RevealState::Hidden,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ready_after_every_card() {
        let mut agg = RevealAggregator::new(3);
        assert!(!agg.all_ready());
        assert!(agg.mark_ready(0));
        assert!(agg.mark_ready(2));
        assert!(!agg.all_ready());
        assert!(agg.mark_ready(1));
        assert!(agg.all_ready());
        assert_eq!(agg.ready_count(), 3);
    }

    #[test]
    fn test_duplicate_signal_counts_once() {
        let mut agg = RevealAggregator::new(2);
        assert!(agg.mark_ready(0));
        assert!(!agg.mark_ready(0));
        assert_eq!(agg.ready_count(), 1);
        assert!(!agg.all_ready());
    }

    #[test]
    fn test_unknown_index_ignored() {
        let mut agg = RevealAggregator::new(1);
        assert!(!agg.mark_ready(5));
        assert_eq!(agg.ready_count(), 0);
        assert!(!agg.is_ready(5));
    }

    #[test]
    fn test_toggle_gated_until_ready() {
        let mut agg = RevealAggregator::new(2);
        agg.mark_ready(0);
        assert!(!agg.toggle());
        assert_eq!(agg.state(), RevealState::Hidden);

        agg.mark_ready(1);
        assert!(agg.toggle());
        assert!(agg.is_revealed());
        assert!(agg.toggle());
        assert_eq!(agg.state(), RevealState::Hidden);
    }
}
