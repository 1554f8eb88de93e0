//! Path resolution: tracing a participant's descent through the rungs.

pub mod resolver;

pub use resolver::PathResolver;

use serde::{Deserialize, Serialize};

/// A point on the board surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows downward).
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One participant's complete descent.
///
/// `points` is ordered top to bottom and dense enough to animate directly:
/// descents to a rung and crossings along it are interpolated into many
/// small segments. The final point always sits exactly on the bottom
/// boundary. Ephemeral: built fresh per selection and discarded once the
/// outcome is recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPath {
    /// The animatable point sequence.
    pub points: Vec<Point>,
    /// Index of the column the path ends at.
    pub terminal_column: usize,
}

impl ResolvedPath {
    /// The last point of the descent.
    #[must_use]
    pub fn final_point(&self) -> Point {
        // Resolution always seeds the path with the starting point.
        *self.points.last().expect("resolved path is never empty")
    }
}
