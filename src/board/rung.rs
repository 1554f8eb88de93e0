//! Horizontal rungs connecting adjacent columns.

use serde::{Deserialize, Serialize};

/// Two rungs conflict when their y values are closer than this.
pub(crate) const Y_CONFLICT: f64 = 20.0;

/// ...and an endpoint x is closer than this.
pub(crate) const X_CONFLICT: f64 = 10.0;

/// A horizontal connector between two adjacent columns at one height.
///
/// `left_x < right_x` always, and the two endpoints sit exactly one column
/// width apart. A path that reaches either endpoint crosses to the other.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rung {
    /// X coordinate of the left endpoint.
    pub left_x: f64,
    /// X coordinate of the right endpoint.
    pub right_x: f64,
    /// Shared vertical offset of both endpoints.
    pub y: f64,
}

impl Rung {
    /// Create a rung. Endpoints must already be ordered.
    #[must_use]
    pub fn new(left_x: f64, right_x: f64, y: f64) -> Self {
        debug_assert!(left_x < right_x, "rung endpoints must be ordered");
        Self { left_x, right_x, y }
    }

    /// Approximate duplicate check against a candidate rung.
    ///
    /// Matches the reference filter exactly: the y values must be within
    /// [`Y_CONFLICT`] and the *candidate's left endpoint* within
    /// [`X_CONFLICT`] of either of this rung's endpoints. Only the left
    /// endpoint is tested; with adjacent-column spacing the left endpoint
    /// already identifies the column pair.
    #[must_use]
    pub fn conflicts_with(&self, candidate: &Rung) -> bool {
        (self.y - candidate.y).abs() < Y_CONFLICT
            && ((self.left_x - candidate.left_x).abs() < X_CONFLICT
                || (self.right_x - candidate.left_x).abs() < X_CONFLICT)
    }

    /// Whether either endpoint lies within `tolerance` of `x`.
    #[must_use]
    pub fn touches(&self, x: f64, tolerance: f64) -> bool {
        (self.left_x - x).abs() < tolerance || (self.right_x - x).abs() < tolerance
    }

    /// The endpoint nearest `x` and the opposite endpoint, in that order.
    #[must_use]
    pub fn crossing_from(&self, x: f64, tolerance: f64) -> (f64, f64) {
        if (self.left_x - x).abs() < tolerance {
            (self.left_x, self.right_x)
        } else {
            (self.right_x, self.left_x)
        }
    }
}
