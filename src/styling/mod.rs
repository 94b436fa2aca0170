pub mod palette;

pub use palette::{hex_to_color, resolve, stats_text_color, TierStyle, TIER_STYLES};
