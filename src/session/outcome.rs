//! Win/lose labeling of terminal columns.

use serde::{Deserialize, Serialize};

/// Prize attached to a terminal column.
///
/// Columns alternate starting with a losing slot on column 0, matching the
/// reference board's bottom labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A losing slot (even columns).
    Lose,
    /// A winning slot (odd columns).
    Win,
}

impl Outcome {
    /// The outcome printed under `column`.
    #[must_use]
    pub fn from_column(column: usize) -> Self {
        if column % 2 == 0 {
            Outcome::Lose
        } else {
            Outcome::Win
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Lose => write!(f, "Lose"),
            Outcome::Win => write!(f, "Win"),
        }
    }
}
