use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating a card shows until its stats lookup succeeds.
pub const DEFAULT_RATING: u32 = 1000;

/// Skill band derived from a numeric rating.
///
/// Variants are declared from lowest to highest so the derived `Ord`
/// follows skill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Novice,
    ClassD,
    ClassC,
    ClassB,
    ClassA,
    Rare,
    Epic,
    Legendary,
}

impl Tier {
    /// All tiers, highest first.
    pub const DESCENDING: [Tier; 8] = [
        Tier::Legendary,
        Tier::Epic,
        Tier::Rare,
        Tier::ClassA,
        Tier::ClassB,
        Tier::ClassC,
        Tier::ClassD,
        Tier::Novice,
    ];

    /// Classifies a rating. Thresholds are exclusive: a rating must be
    /// strictly above a band's floor to reach it.
    pub fn from_rating(rating: i64) -> Self {
        match rating {
            r if r > 2700 => Tier::Legendary,
            r if r > 2500 => Tier::Epic,
            r if r > 2000 => Tier::Rare,
            r if r > 1800 => Tier::ClassA,
            r if r > 1600 => Tier::ClassB,
            r if r > 1400 => Tier::ClassC,
            r if r > 1200 => Tier::ClassD,
            _ => Tier::Novice,
        }
    }

    /// Missing ratings classify as 0.
    pub fn from_optional(rating: Option<i64>) -> Self {
        Self::from_rating(rating.unwrap_or(0))
    }

    /// Exclusive lower bound of the band, `None` for the open bottom band.
    pub fn floor(&self) -> Option<i64> {
        match self {
            Tier::Legendary => Some(2700),
            Tier::Epic => Some(2500),
            Tier::Rare => Some(2000),
            Tier::ClassA => Some(1800),
            Tier::ClassB => Some(1600),
            Tier::ClassC => Some(1400),
            Tier::ClassD => Some(1200),
            Tier::Novice => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Legendary => "Legendary",
            Tier::Epic => "Epic",
            Tier::Rare => "Rare",
            Tier::ClassA => "Class A",
            Tier::ClassB => "Class B",
            Tier::ClassC => "Class C",
            Tier::ClassD => "Class D",
            Tier::Novice => "Novice",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ratings() {
        assert_eq!(Tier::from_rating(2800), Tier::Legendary);
        assert_eq!(Tier::from_rating(1500), Tier::ClassC);
        assert_eq!(Tier::from_rating(999), Tier::Novice);
        assert_eq!(Tier::from_rating(1500).label(), "Class C");
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(Tier::from_rating(2700), Tier::Epic);
        assert_eq!(Tier::from_rating(2701), Tier::Legendary);
        assert_eq!(Tier::from_rating(1200), Tier::Novice);
        assert_eq!(Tier::from_rating(1201), Tier::ClassD);
    }

    #[test]
    fn test_negative_and_missing_are_novice() {
        assert_eq!(Tier::from_rating(-50), Tier::Novice);
        assert_eq!(Tier::from_optional(None), Tier::Novice);
        assert_eq!(Tier::from_optional(Some(2100)), Tier::Rare);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = Tier::from_rating(-10);
        for rating in -10..3500 {
            let tier = Tier::from_rating(rating);
            assert!(tier >= previous, "rating {} dropped to {}", rating, tier);
            previous = tier;
        }
    }

    #[test]
    fn test_floor_matches_classification() {
        for tier in Tier::DESCENDING {
            if let Some(floor) = tier.floor() {
                assert_eq!(Tier::from_rating(floor + 1), tier);
                assert_ne!(Tier::from_rating(floor), tier);
            }
        }
    }
}
