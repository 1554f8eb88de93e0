//! Board: column layout plus randomly placed rungs.
//!
//! A [`Board`] is immutable once generated. Redraws regenerate it wholesale
//! via [`BoardGenerator`]; nothing ever edits rungs in place.

pub mod generator;
pub mod layout;
pub mod rung;

pub use generator::BoardGenerator;
pub use layout::{Layout, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
pub use rung::Rung;

use serde::{Deserialize, Serialize};

/// The full static layout for one round: evenly spaced columns and the rung
/// set connecting them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: Layout,
    participant_count: usize,
    rungs: Vec<Rung>,
}

impl Board {
    /// Assemble a board from explicit parts.
    ///
    /// Useful for tests and for embedders replaying a stored layout. Panics
    /// if `participant_count` is out of range; generated boards are always
    /// in range by construction.
    #[must_use]
    pub fn from_parts(layout: Layout, participant_count: usize, rungs: Vec<Rung>) -> Self {
        assert!(
            (MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&participant_count),
            "participant count {participant_count} out of range"
        );
        Self {
            layout,
            participant_count,
            rungs,
        }
    }

    /// The geometry this board was generated with.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of columns (one per participant).
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participant_count
    }

    /// Horizontal spacing between adjacent columns.
    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.layout.column_width(self.participant_count)
    }

    /// X coordinate of column `index`.
    #[must_use]
    pub fn column_x(&self, index: usize) -> f64 {
        debug_assert!(index < self.participant_count);
        self.layout.column_x(index, self.participant_count)
    }

    /// The rung set, in insertion order.
    #[must_use]
    pub fn rungs(&self) -> &[Rung] {
        &self.rungs
    }

    /// The column whose x coordinate is nearest `x`.
    ///
    /// Scans left to right; the first column within half a column width
    /// wins. Falls back to column 0 when nothing matches (cannot happen for
    /// coordinates produced by path resolution).
    #[must_use]
    pub fn nearest_column(&self, x: f64) -> usize {
        let half_width = self.column_width() / 2.0;
        for index in 0..self.participant_count {
            if (x - self.column_x(index)).abs() < half_width {
                return index;
            }
        }
        0
    }
}
