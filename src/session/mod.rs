//! Per-round session state: who has been resolved, and when the round ends.
//!
//! ## State machine
//!
//! - `NotStarted`: selection is disabled.
//! - `InProgress`: started, at least one participant unresolved.
//! - `Complete`: every participant has a recorded outcome.
//!
//! `start()` restarts the round in place on the current board; installing a
//! new board clears everything and drops back to `NotStarted`. A resolved
//! participant's outcome is immutable until one of those two resets.
//!
//! Everything runs on one cooperative timeline; nothing here is guarded
//! against overlapping animations (see `animation`).

pub mod outcome;

pub use outcome::Outcome;

use log::debug;

use crate::board::Board;
use crate::error::GameError;
use crate::path::{PathResolver, ResolvedPath};

/// Session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// `start()` has not been called since the last reset.
    NotStarted,
    /// Started, with at least one participant unresolved.
    InProgress,
    /// Every participant has an outcome.
    Complete,
}

/// The record returned by a successful selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// The participant that was resolved.
    pub participant: usize,
    /// The animatable descent.
    pub path: ResolvedPath,
    /// Terminal column the descent reached.
    pub outcome_column: usize,
    /// Prize printed under that column.
    pub outcome: Outcome,
    /// True exactly once: on the selection that completes the round.
    pub completed: bool,
}

/// Mutable per-round state for one board.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    labels: Vec<String>,
    results: Vec<Option<usize>>,
    started: bool,
    selected: Option<usize>,
}

impl GameSession {
    /// Create a session over a freshly generated board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let count = board.participant_count();
        Self {
            board,
            labels: default_labels(count),
            results: vec![None; count],
            started: false,
            selected: None,
        }
    }

    /// The board this round is played on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Auto-generated participant labels, top of each column.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Per-participant outcomes; `None` means unresolved.
    #[must_use]
    pub fn results(&self) -> &[Option<usize>] {
        &self.results
    }

    /// The participant currently highlighted (animating), if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if !self.started {
            SessionPhase::NotStarted
        } else if self.results.iter().all(Option::is_some) {
            SessionPhase::Complete
        } else {
            SessionPhase::InProgress
        }
    }

    /// Start (or restart) the round on the current board.
    ///
    /// Valid from any phase: clears all outcomes and the highlight, keeps
    /// the board.
    pub fn start(&mut self) {
        self.results = vec![None; self.board.participant_count()];
        self.selected = None;
        self.started = true;
        debug!("round started: {} participants", self.board.participant_count());
    }

    /// Resolve participant `index` and record the outcome.
    ///
    /// On any `Err` the session is untouched: selecting before `start()`,
    /// out of range, or a participant whose outcome is already revealed all
    /// surface as user-facing notices only.
    ///
    /// The highlight stays on `index` until [`GameSession::clear_selection`]
    /// (the playback driver calls it when the animation finishes).
    pub fn select(&mut self, index: usize) -> Result<Selection, GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        let count = self.board.participant_count();
        if index >= count {
            return Err(GameError::ParticipantOutOfRange { index, count });
        }
        if self.results[index].is_some() {
            return Err(GameError::AlreadyResolved(index));
        }

        self.selected = Some(index);
        let path = PathResolver::new(&self.board).resolve(index);
        let outcome_column = path.terminal_column;
        self.results[index] = Some(outcome_column);

        let completed = self.results.iter().all(Option::is_some);
        debug!(
            "participant {index} resolved to column {outcome_column}{}",
            if completed { ", round complete" } else { "" }
        );

        Ok(Selection {
            participant: index,
            path,
            outcome_column,
            outcome: Outcome::from_column(outcome_column),
            completed,
        })
    }

    /// Drop the highlight once the descent animation has played out.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Return to `NotStarted`, clearing all outcomes. The board stays.
    pub fn reset(&mut self) {
        self.results = vec![None; self.board.participant_count()];
        self.selected = None;
        self.started = false;
        debug!("session reset");
    }

    /// Replace the board (a redraw) and clear all round state.
    pub fn install_board(&mut self, board: Board) {
        let count = board.participant_count();
        self.board = board;
        self.labels = default_labels(count);
        self.results = vec![None; count];
        self.selected = None;
        self.started = false;
        debug!("new board installed: {count} participants");
    }
}

fn default_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Participant {i}")).collect()
}
