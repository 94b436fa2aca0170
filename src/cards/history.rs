use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const STREAK_LENGTH: usize = 40;

/// Vertical range the back-of-card chart plots.
pub const CHART_FLOOR: f64 = 1000.0;
pub const CHART_CEILING: f64 = 3200.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreakPoint {
    pub rating: f64,
    /// Gained rating on this day.
    pub hot: bool,
}

/// Made-up recent rating history for the back of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakHistory {
    pub start_label: String,
    pub end_label: String,
    pub points: Vec<StreakPoint>,
}

impl StreakHistory {
    /// Builds a streak that starts `plus` below the current rating. Each
    /// day picks an off-day divisor in 3..=5: on off days the rating falls
    /// by `i * 3.5`, otherwise it rises by `i * 2.0`.
    pub fn generate<R: Rng + ?Sized>(rating: u32, plus: u32, today: NaiveDate, rng: &mut R) -> Self {
        let start = today - Duration::days(rng.gen_range(60..=120));

        let mut current = rating as f64 - plus as f64;
        let points = (0..STREAK_LENGTH)
            .map(|i| {
                let off_day = rng.gen_range(3..=5);
                let hot = i % off_day != 0;
                if hot {
                    current += i as f64 * 2.0;
                } else {
                    current -= i as f64 * 3.5;
                }
                StreakPoint { rating: current, hot }
            })
            .collect();

        Self {
            start_label: start.format("%m/%d").to_string(),
            end_label: today.format("%m/%d").to_string(),
            points,
        }
    }

    /// Heights above the chart floor, clamped to the chart range.
    pub fn chart_values(&self) -> Vec<u64> {
        self.points
            .iter()
            .map(|point| (point.rating.clamp(CHART_FLOOR, CHART_CEILING) - CHART_FLOOR).round() as u64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()
    }

    #[test]
    fn test_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = StreakHistory::generate(2400, 150, today(), &mut rng);
        assert_eq!(history.points.len(), STREAK_LENGTH);
        // day 0 is always an off day with a zero drop
        assert_eq!(history.points[0].rating, 2250.0);
        assert!(!history.points[0].hot);
        assert_eq!(history.end_label, "09/15");
    }

    #[test]
    fn test_start_label_window() {
        let mut rng = StdRng::seed_from_u64(11);
        let history = StreakHistory::generate(1500, 100, today(), &mut rng);
        let labels: Vec<String> = (60..=120)
            .map(|d| (today() - Duration::days(d)).format("%m/%d").to_string())
            .collect();
        assert!(labels.contains(&history.start_label));
    }

    #[test]
    fn test_chart_values_clamped() {
        let history = StreakHistory {
            start_label: String::new(),
            end_label: String::new(),
            points: vec![
                StreakPoint { rating: 800.0, hot: false },
                StreakPoint { rating: 1500.4, hot: true },
                StreakPoint { rating: 4000.0, hot: true },
            ],
        };
        assert_eq!(history.chart_values(), vec![0, 500, 2200]);
    }
}
