//! Board geometry.
//!
//! All coordinates live in one abstract unit space (the original rendering
//! surface). The engine never draws; it hands these coordinates to the
//! rendering collaborator as-is.
//!
//! ## Column placement
//!
//! Columns are spaced evenly across a fixed horizontal span: column `i` sits
//! at `left_margin + i * span / (participant_count - 1)`. Rungs may only be
//! placed inside the vertical rung band, well clear of the top and bottom
//! boundaries where labels live.

use serde::{Deserialize, Serialize};

/// Smallest supported participant count.
pub const MIN_PARTICIPANTS: usize = 2;

/// Largest supported participant count.
pub const MAX_PARTICIPANTS: usize = 19;

/// Fixed geometry shared by every board.
///
/// `Default` reproduces the original layout; embedders with a different
/// surface can scale these before generating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// X coordinate of the leftmost column.
    pub left_margin: f64,
    /// Horizontal distance from the first column to the last.
    pub span: f64,
    /// Y coordinate where every path starts.
    pub top: f64,
    /// Y coordinate where every path ends.
    pub bottom: f64,
    /// Lowest y at which a rung may be placed.
    pub rung_min_y: f64,
    /// Height of the band rung y values are drawn from.
    pub rung_band: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            left_margin: 100.0,
            span: 600.0,
            top: 100.0,
            bottom: 500.0,
            rung_min_y: 120.0,
            rung_band: 200.0,
        }
    }
}

impl Layout {
    /// Horizontal spacing between adjacent columns for a given count.
    #[must_use]
    pub fn column_width(&self, participant_count: usize) -> f64 {
        debug_assert!(participant_count >= MIN_PARTICIPANTS);
        self.span / (participant_count - 1) as f64
    }

    /// X coordinate of column `index` for a given count.
    #[must_use]
    pub fn column_x(&self, index: usize, participant_count: usize) -> f64 {
        self.left_margin + index as f64 * self.column_width(participant_count)
    }
}
