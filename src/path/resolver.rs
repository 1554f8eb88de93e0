//! Deterministic descent through an arbitrary rung layout.
//!
//! ## Algorithm
//!
//! Starting at the top of the chosen column, repeatedly look for the nearest
//! rung strictly below the current position with an endpoint on the current
//! column; cross it to the adjacent column, or free-fall a small fixed step
//! when none is in reach. Each rung is crossed at most once per descent,
//! which rules out self-loops; independent descents may reuse rungs freely.
//!
//! Resolution never fails: a step ceiling bounds pathological layouts and a
//! forced final descent pins the path to the bottom boundary.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::{Point, ResolvedPath};
use crate::board::Board;

/// How close (in x) a rung endpoint must be to count as "on this column".
const ENDPOINT_TOLERANCE: f64 = 8.0;

/// A rung must sit at least this far below the current position.
const MIN_DROP: f64 = 5.0;

/// Vertical advance per step when no rung is in reach.
const FREE_FALL_STEP: f64 = 4.0;

/// Interpolation segments for a vertical run down to a rung (and for the
/// forced final descent).
const DESCENT_SEGMENTS: usize = 15;

/// Interpolation segments for crossing a rung.
const CROSSING_SEGMENTS: usize = 25;

/// Safety ceiling on descent steps.
const MAX_STEPS: usize = 200;

/// Resolves descents against one board.
#[derive(Clone, Copy, Debug)]
pub struct PathResolver<'a> {
    board: &'a Board,
}

impl<'a> PathResolver<'a> {
    /// Bind a resolver to a board.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Trace the descent from the top of `start_column`.
    ///
    /// `start_column` must be a valid column index; `GameSession` validates
    /// before calling.
    #[must_use]
    pub fn resolve(&self, start_column: usize) -> ResolvedPath {
        debug_assert!(start_column < self.board.participant_count());

        let layout = self.board.layout();
        let rungs = self.board.rungs();

        let mut current_x = self.board.column_x(start_column);
        let mut current_y = layout.top;
        let mut points = vec![Point::new(current_x, current_y)];
        let mut used: FxHashSet<usize> = FxHashSet::default();

        let mut steps = 0;
        while current_y < layout.bottom && steps < MAX_STEPS {
            steps += 1;

            // Rungs reachable from the current position: unused, touching
            // this column, strictly below.
            let mut candidates: SmallVec<[usize; 8]> = SmallVec::new();
            for (index, rung) in rungs.iter().enumerate() {
                if used.contains(&index) {
                    continue;
                }
                if rung.touches(current_x, ENDPOINT_TOLERANCE) && rung.y > current_y + MIN_DROP {
                    candidates.push(index);
                }
            }

            // Nearest below wins; ties go to the earliest-placed rung.
            let nearest = candidates
                .iter()
                .copied()
                .reduce(|best, index| if rungs[index].y < rungs[best].y { index } else { best });

            match nearest {
                Some(index) => {
                    let rung = rungs[index];

                    // Vertical run down to the rung.
                    for i in 1..=DESCENT_SEGMENTS {
                        let t = i as f64 / DESCENT_SEGMENTS as f64;
                        points.push(Point::new(current_x, current_y + (rung.y - current_y) * t));
                    }

                    // Horizontal run across it, from whichever end we are on.
                    let (from_x, to_x) = rung.crossing_from(current_x, ENDPOINT_TOLERANCE);
                    for i in 1..=CROSSING_SEGMENTS {
                        let t = i as f64 / CROSSING_SEGMENTS as f64;
                        points.push(Point::new(from_x + (to_x - from_x) * t, rung.y));
                    }

                    current_x = to_x;
                    current_y = rung.y;
                    used.insert(index);
                }
                None => {
                    // Free fall, clamped so the path ends exactly on the
                    // bottom boundary rather than a fraction past it.
                    current_y = (current_y + FREE_FALL_STEP).min(layout.bottom);
                    points.push(Point::new(current_x, current_y));
                }
            }
        }

        // Step ceiling or a crossing may have left us short of the bottom;
        // finish with a smooth vertical run.
        let last = *points.last().expect("path is seeded with the start point");
        if last.y < layout.bottom {
            for i in 1..DESCENT_SEGMENTS {
                let t = i as f64 / DESCENT_SEGMENTS as f64;
                points.push(Point::new(last.x, last.y + (layout.bottom - last.y) * t));
            }
            // Pin the final point to the boundary rather than trusting the
            // interpolation to land on it bit-exactly.
            points.push(Point::new(last.x, layout.bottom));
        }

        let final_x = points.last().expect("path is non-empty").x;
        let terminal_column = self.board.nearest_column(final_x);

        ResolvedPath {
            points,
            terminal_column,
        }
    }
}
