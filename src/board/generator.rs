//! Random board generation with collision avoidance.
//!
//! ## Algorithm
//!
//! Rejection sampling: pick a random adjacent column pair and a random y in
//! the rung band, drop the candidate if it sits too close to an existing
//! rung, repeat until the density target is met or the attempt budget runs
//! out. The target is best effort; the only hard guarantee is that a board
//! never comes out rung-less (a deterministic fallback inserts one rung if
//! sampling produced none).

use log::{debug, warn};

use super::layout::{Layout, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use super::rung::Rung;
use super::Board;
use crate::error::GameError;
use crate::rng::GameRng;

/// Density floor: every board targets at least this many rungs.
const MIN_RUNG_FLOOR: usize = 10;

/// ...or two per participant, whichever is larger.
const RUNGS_PER_PARTICIPANT: usize = 2;

/// Sampling budget before generation settles for what it has.
const MAX_ATTEMPTS: usize = 1000;

/// First fallback rung height.
const FALLBACK_BASE_Y: f64 = 150.0;

/// Height step between successive fallback rungs.
const FALLBACK_STEP_Y: f64 = 50.0;

/// Produces boards from a deterministic random stream.
///
/// Holds the RNG across rounds, so successive redraws with one generator
/// yield different (but seed-reproducible) boards.
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    layout: Layout,
    rng: GameRng,
}

impl BoardGenerator {
    /// Create a generator with the default layout and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            layout: Layout::default(),
            rng: GameRng::new(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            layout: Layout::default(),
            rng: GameRng::from_entropy(),
        }
    }

    /// Override the layout geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// The RNG driving generation, for state capture.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Generate a fresh board for `participant_count` players.
    ///
    /// Fails with [`GameError::InvalidParticipantCount`] outside
    /// `[MIN_PARTICIPANTS, MAX_PARTICIPANTS]`; the RNG stream is not
    /// advanced on failure, so the caller's previous board stays
    /// reproducible.
    pub fn generate(&mut self, participant_count: usize) -> Result<Board, GameError> {
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&participant_count) {
            return Err(GameError::InvalidParticipantCount {
                got: participant_count,
            });
        }

        let min_rungs = MIN_RUNG_FLOOR.max(participant_count * RUNGS_PER_PARTICIPANT);
        let pair_count = participant_count - 1;
        let mut rungs: Vec<Rung> = Vec::with_capacity(min_rungs);

        let mut attempts = 0;
        while rungs.len() < min_rungs && attempts < MAX_ATTEMPTS {
            attempts += 1;

            let pair = self.rng.gen_range_usize(0..pair_count);
            let left_x = self.layout.column_x(pair, participant_count);
            let right_x = self.layout.column_x(pair + 1, participant_count);
            let y = self.layout.rung_min_y + self.rng.gen_unit() * self.layout.rung_band;

            let candidate = Rung::new(left_x, right_x, y);
            if rungs.iter().any(|r| r.conflicts_with(&candidate)) {
                continue;
            }
            rungs.push(candidate);
        }

        // Degenerate randomness: every sample collided. Insert staggered
        // deterministic rungs until at least one exists, so the board is
        // never rung-less. In practice this leaves a single rung on the
        // leftmost pair; the density target is not re-attempted.
        if rungs.is_empty() {
            warn!("board generation exhausted {MAX_ATTEMPTS} attempts without a rung, using fallback");
            let mut pair = 0;
            while rungs.is_empty() && pair < pair_count {
                let left_x = self.layout.column_x(pair, participant_count);
                let right_x = self.layout.column_x(pair + 1, participant_count);
                let y = FALLBACK_BASE_Y + pair as f64 * FALLBACK_STEP_Y;
                rungs.push(Rung::new(left_x, right_x, y));
                pair += 1;
            }
        }

        debug!(
            "generated board: {} participants, {} rungs in {attempts} attempts",
            participant_count,
            rungs.len()
        );

        Ok(Board::from_parts(self.layout, participant_count, rungs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_never_rung_less() {
        let mut generator = BoardGenerator::new(42);
        for count in MIN_PARTICIPANTS..=MAX_PARTICIPANTS {
            let board = generator.generate(count).unwrap();
            assert!(!board.rungs().is_empty(), "count {count}: no rungs");
        }
    }

    #[test]
    fn test_generate_meets_density_target() {
        // The density target is best effort: with a single column pair the
        // conflict spacing caps the band at fewer than 10 rungs, so only
        // wider boards are held to the target here.
        let mut generator = BoardGenerator::new(42);
        for count in 4..=MAX_PARTICIPANTS {
            let board = generator.generate(count).unwrap();
            let target = MIN_RUNG_FLOOR.max(count * RUNGS_PER_PARTICIPANT);
            assert!(
                board.rungs().len() >= target,
                "count {count}: {} rungs < target {target}",
                board.rungs().len()
            );
        }
    }

    #[test]
    fn test_generate_rejects_out_of_range() {
        let mut generator = BoardGenerator::new(42);
        assert_eq!(
            generator.generate(1),
            Err(GameError::InvalidParticipantCount { got: 1 })
        );
        assert_eq!(
            generator.generate(20),
            Err(GameError::InvalidParticipantCount { got: 20 })
        );
    }

    #[test]
    fn test_rejected_generate_leaves_rng_untouched() {
        let mut generator = BoardGenerator::new(42);
        let before = generator.rng().state();
        let _ = generator.generate(0);
        assert_eq!(generator.rng().state(), before);
    }

    #[test]
    fn test_from_entropy_generates() {
        let mut generator = BoardGenerator::from_entropy();
        let board = generator.generate(4).unwrap();
        assert!(!board.rungs().is_empty());
    }

    #[test]
    fn test_same_seed_same_board() {
        let board_a = BoardGenerator::new(7).generate(5).unwrap();
        let board_b = BoardGenerator::new(7).generate(5).unwrap();
        assert_eq!(board_a, board_b);
    }

    #[test]
    fn test_successive_boards_differ() {
        let mut generator = BoardGenerator::new(7);
        let board_a = generator.generate(5).unwrap();
        let board_b = generator.generate(5).unwrap();
        assert_ne!(board_a, board_b);
    }

    #[test]
    fn test_no_conflicting_pair_survives() {
        let mut generator = BoardGenerator::new(99);
        for count in [2, 4, 10, 19] {
            let board = generator.generate(count).unwrap();
            let rungs = board.rungs();
            for (i, existing) in rungs.iter().enumerate() {
                for candidate in &rungs[i + 1..] {
                    assert!(
                        !existing.conflicts_with(candidate),
                        "conflicting rungs {existing:?} / {candidate:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_rungs_span_adjacent_columns() {
        let mut generator = BoardGenerator::new(3);
        let board = generator.generate(6).unwrap();
        let width = board.column_width();
        for rung in board.rungs() {
            assert!((rung.right_x - rung.left_x - width).abs() < 1e-9);
            assert!(rung.y >= board.layout().rung_min_y);
            assert!(rung.y < board.layout().rung_min_y + board.layout().rung_band);
        }
    }
}
