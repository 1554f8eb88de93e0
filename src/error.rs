//! Error taxonomy for the game core.
//!
//! Every variant is a user-facing notice: the operation that produced it
//! left session and board state untouched, so callers can surface the
//! message and carry on. The generator and resolver themselves never fail
//! in normal operation; they degrade via fallback paths instead.

use thiserror::Error;

use crate::board::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};

/// Recoverable, user-facing game errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Participant count outside the supported range.
    #[error(
        "participant count must be between {MIN_PARTICIPANTS} and {MAX_PARTICIPANTS}, got {got}"
    )]
    InvalidParticipantCount {
        /// The rejected count.
        got: usize,
    },

    /// This participant's outcome has already been revealed this round.
    #[error("participant {0} has already been resolved")]
    AlreadyResolved(usize),

    /// The round has not been started; selection is disabled.
    #[error("the round has not been started")]
    NotStarted,

    /// Participant index beyond the board's column count.
    #[error("participant index {index} out of range for {count} participants")]
    ParticipantOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of participants on the board.
        count: usize,
    },
}
