//! Where each card sits when the deck is hidden or revealed, and how
//! those positions map onto terminal cells.
//!
//! Positions are in pixel-like units relative to the reveal button,
//! matching a 15rem-wide card grid: revealed cards fan out to the left
//! and upward in rows of three.

use ratatui::layout::Rect;
use std::time::Duration;

use crate::animation::spring::{Spring, SpringConfig};

pub const CARDS_PER_ROW: usize = 3;
pub const HIDDEN_X: f64 = 60.0;
pub const HIDDEN_Y: f64 = 75.0;
pub const TOP_ROW_Y: f64 = -500.0;
pub const ROW_SPACING: f64 = 250.0;
pub const COLUMN_SPACING: f64 = 250.0 / 1.5;

/// Terminal footprint of a full-size card.
pub const CARD_COLS: u16 = 26;
pub const CARD_ROWS: u16 = 12;
const PX_PER_COL: f64 = 6.0;
const PX_PER_ROW: f64 = 19.0;

const FLIPPED_DEGREES: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTarget {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
}

/// Resting position of card `index`.
pub fn spring_target(show: bool, index: usize, size: f64) -> MotionTarget {
    if !show {
        return MotionTarget {
            scale: 0.0,
            x: HIDDEN_X,
            y: HIDDEN_Y,
        };
    }

    let column = (index % CARDS_PER_ROW) as f64;
    let row = (index / CARDS_PER_ROW) as f64;
    MotionTarget {
        scale: 1.0,
        x: -COLUMN_SPACING * column * size,
        y: TOP_ROW_Y + ROW_SPACING * row,
    }
}

/// Animated state of one card.
#[derive(Debug, Clone)]
pub struct CardMotion {
    pub scale: Spring,
    pub x: Spring,
    pub y: Spring,
    pub rotation: Spring,
}

impl CardMotion {
    /// A card starts collapsed behind the button.
    pub fn hidden(config: SpringConfig) -> Self {
        Self {
            scale: Spring::new(0.0, config),
            x: Spring::new(HIDDEN_X, config),
            y: Spring::new(HIDDEN_Y, config),
            rotation: Spring::new(0.0, config),
        }
    }

    pub fn retarget(&mut self, target: MotionTarget) {
        self.scale.set_target(target.scale);
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.rotation
            .set_target(if flipped { FLIPPED_DEGREES } else { 0.0 });
    }

    pub fn step(&mut self, dt: Duration) {
        self.scale.step(dt);
        self.x.step(dt);
        self.y.step(dt);
        self.rotation.step(dt);
    }

    /// Position springs at rest; rotation is tracked separately.
    pub fn is_settled(&self) -> bool {
        self.scale.is_resting() && self.x.is_resting() && self.y.is_resting()
    }

    pub fn showing_front(&self) -> bool {
        self.rotation.value() < FLIPPED_DEGREES / 2.0
    }

    /// Apparent width of the turning card, 1.0 when face-on.
    pub fn width_factor(&self) -> f64 {
        self.rotation.value().to_radians().cos().abs()
    }
}

/// Maps a card's animated position to a terminal rectangle. `anchor` is
/// the reveal button; hidden cards sit right-aligned on its top edge.
/// Returns `None` when the card is too small to draw or entirely off
/// screen.
pub fn project(motion: &CardMotion, anchor: Rect, bounds: Rect) -> Option<Rect> {
    let scale = motion.scale.value().max(0.0);
    let left = anchor.right() as f64 - CARD_COLS as f64 + (motion.x.value() - HIDDEN_X) / PX_PER_COL;
    let top = anchor.y as f64 + (motion.y.value() - HIDDEN_Y) / PX_PER_ROW;

    let width = CARD_COLS as f64 * scale * motion.width_factor();
    let height = CARD_ROWS as f64 * scale;
    if width < 3.0 || height < 3.0 {
        return None;
    }

    let x = left + (CARD_COLS as f64 - width) / 2.0;
    let y = top + (CARD_ROWS as f64 - height) / 2.0;
    if x + width <= bounds.x as f64 || y + height <= bounds.y as f64 {
        return None;
    }

    let clamp_x = x.max(bounds.x as f64);
    let clamp_y = y.max(bounds.y as f64);
    let rect = Rect::new(
        clamp_x.round() as u16,
        clamp_y.round() as u16,
        (width - (clamp_x - x)).round() as u16,
        (height - (clamp_y - y)).round() as u16,
    )
    .intersection(bounds);

    (rect.width >= 3 && rect.height >= 3).then_some(rect)
}
