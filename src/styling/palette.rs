//! Presentation values per rating band.
//!
//! The table carries its own thresholds instead of indexing by
//! [`Tier`], so agreement with [`Tier::from_rating`] is something the
//! tests check rather than something the types assume.

use ratatui::style::Color;

use crate::models::Tier;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierStyle {
    pub tier: Tier,
    /// Exclusive lower bound of the band; `None` for the bottom band.
    pub above: Option<i64>,
    pub label: &'static str,
    /// CSS-style background descriptor for the card header.
    pub gradient: &'static str,
    /// Gradient stops, left to right, as `#rrggbb`.
    pub stops: &'static [&'static str],
    pub accent: &'static str,
    pub shadow: &'static str,
}

pub static TIER_STYLES: [TierStyle; 8] = [
    TierStyle {
        tier: Tier::Legendary,
        above: Some(2700),
        label: "Legendary",
        gradient: "radial-gradient(ellipse farthest-corner at right bottom, #FEDB37 0%, #FDB931 8%, #9f7928 30%, #8A6E2F 40%, transparent 80%), \
                   radial-gradient(ellipse farthest-corner at left top, #FFFFFF 0%, #FFFFAC 8%, #D1B464 25%, #5d4a1f 62.5%, #5d4a1f 100%)",
        stops: &["#FEDB37", "#FDB931", "#D1B464", "#9f7928", "#5d4a1f"],
        accent: "#8A6E2F",
        shadow: "#5d4a1f",
    },
    TierStyle {
        tier: Tier::Epic,
        above: Some(2500),
        label: "Epic",
        gradient: "linear-gradient(to right, #8e2de2, #4a00e0)",
        stops: &["#8e2de2", "#4a00e0"],
        accent: "#8e2de2",
        shadow: "#4a00e0",
    },
    TierStyle {
        tier: Tier::Rare,
        above: Some(2000),
        label: "Rare",
        gradient: "linear-gradient(to right, #36d1dc, #5b86e5)",
        stops: &["#36d1dc", "#5b86e5"],
        accent: "#5b86e5",
        shadow: "#36d1dc",
    },
    TierStyle {
        tier: Tier::ClassA,
        above: Some(1800),
        label: "Class A",
        gradient: "linear-gradient(to left, #76b852, #8dc26f)",
        stops: &["#8dc26f", "#76b852"],
        accent: "#8dc26f",
        shadow: "#76b852",
    },
    TierStyle {
        tier: Tier::ClassB,
        above: Some(1600),
        label: "Class B",
        gradient: "linear-gradient(to left, #cb2d3e, #ef473a)",
        stops: &["#ef473a", "#cb2d3e"],
        accent: "#cb2d3e",
        shadow: "#ef473a",
    },
    TierStyle {
        tier: Tier::ClassC,
        above: Some(1400),
        label: "Class C",
        gradient: "linear-gradient(to left, #ece9e6, #ffffff)",
        stops: &["#ffffff", "#ece9e6"],
        accent: "#ece9e6",
        shadow: "#bdbab7",
    },
    TierStyle {
        tier: Tier::ClassD,
        above: Some(1200),
        label: "Class D",
        gradient: "linear-gradient(to left, #bdc3c7, #2c3e50)",
        stops: &["#2c3e50", "#bdc3c7"],
        accent: "#2c3e50",
        shadow: "#bdc3c7",
    },
    TierStyle {
        tier: Tier::Novice,
        above: None,
        label: "Novice",
        gradient: "linear-gradient(to left, #757f9a, #d7dde8)",
        stops: &["#d7dde8", "#757f9a"],
        accent: "#757f9a",
        shadow: "#d7dde8",
    },
];

/// Style bundle for a rating. The table is ordered highest band first
/// and ends with an unbounded row, so the scan always finds a match.
pub fn resolve(rating: i64) -> &'static TierStyle {
    TIER_STYLES
        .iter()
        .find(|style| style.above.map_or(true, |floor| rating > floor))
        .unwrap_or(&TIER_STYLES[TIER_STYLES.len() - 1])
}

/// Text color on the stats strip: light text on the darker, higher bands.
pub fn stats_text_color(rating: i64) -> Color {
    if rating > 1600 {
        Color::White
    } else {
        Color::Black
    }
}

/// Parses `#rrggbb` (or `rrggbb`) into a terminal color.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl TierStyle {
    pub fn accent_color(&self) -> Color {
        hex_to_color(self.accent).unwrap_or(Color::Gray)
    }

    pub fn shadow_color(&self) -> Color {
        hex_to_color(self.shadow).unwrap_or(Color::DarkGray)
    }

    pub fn stop_colors(&self) -> Vec<Color> {
        self.stops.iter().filter_map(|stop| hex_to_color(stop)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_matches_classifier_everywhere() {
        for rating in -100..=3500 {
            let style = resolve(rating);
            let tier = Tier::from_rating(rating);
            assert_eq!(style.tier, tier, "rating {}", rating);
            assert_eq!(style.label, tier.label(), "rating {}", rating);
        }
    }

    #[test]
    fn test_table_thresholds_match_tier_floors() {
        for (style, tier) in TIER_STYLES.iter().zip(Tier::DESCENDING) {
            assert_eq!(style.tier, tier);
            assert_eq!(style.above, tier.floor());
        }
    }

    #[test]
    fn test_every_color_parses() {
        for style in TIER_STYLES.iter() {
            assert!(hex_to_color(style.accent).is_some(), "{}", style.label);
            assert!(hex_to_color(style.shadow).is_some(), "{}", style.label);
            assert_eq!(style.stop_colors().len(), style.stops.len(), "{}", style.label);
        }
    }

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#8A6E2F"), Some(Color::Rgb(0x8a, 0x6e, 0x2f)));
        assert_eq!(hex_to_color("ffffff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(hex_to_color("#fff"), None);
        assert_eq!(hex_to_color("#gggggg"), None);
    }

    #[test]
    fn test_stats_text_color() {
        assert_eq!(stats_text_color(1601), Color::White);
        assert_eq!(stats_text_color(1600), Color::Black);
    }

    #[test]
    fn test_legendary_style() {
        let style = resolve(2800);
        assert_eq!(style.label, "Legendary");
        assert_eq!(style.accent, "#8A6E2F");
    }
}
