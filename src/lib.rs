//! # amidakuji
//!
//! A ghost-leg ("ladder lottery") game engine: N participants at the top of
//! a set of vertical columns, random horizontal rungs between adjacent
//! columns, and a deterministic descent from each participant to a terminal
//! outcome column.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free core**: the engine computes layouts, paths, and
//!    round state; drawing and audio live behind the `render` traits.
//!
//! 2. **Never fail mid-round**: generation and resolution degrade via
//!    fallbacks (a sparser board, a forced final descent) instead of
//!    surfacing errors. Only user input is validated.
//!
//! 3. **Reproducible randomness**: every board is a pure function of a seed,
//!    so rounds can be replayed or debugged exactly.
//!
//! ## Modules
//!
//! - `board`: column layout, rungs, and the random board generator
//! - `path`: deterministic descent tracing into an animatable point sequence
//! - `session`: per-round state machine (who is resolved, round lifecycle)
//! - `animation`: frame cursor and synchronous playback driver
//! - `render`: collaborator seams for drawing and tone playback
//! - `rng`: seeded, serializable RNG behind all board randomness
//! - `error`: the user-facing error taxonomy
//!
//! ## Example
//!
//! ```
//! use amidakuji::{BoardGenerator, GameSession, SessionPhase};
//!
//! let mut generator = BoardGenerator::new(42);
//! let board = generator.generate(4).unwrap();
//!
//! let mut session = GameSession::new(board);
//! session.start();
//!
//! let selection = session.select(0).unwrap();
//! assert!(selection.outcome_column < 4);
//! assert_eq!(session.phase(), SessionPhase::InProgress);
//! ```

pub mod animation;
pub mod board;
pub mod error;
pub mod path;
pub mod render;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use crate::animation::{Frame, PathAnimation, TICK_MS};
pub use crate::board::{
    Board, BoardGenerator, Layout, Rung, MAX_PARTICIPANTS, MIN_PARTICIPANTS,
};
pub use crate::error::GameError;
pub use crate::path::{PathResolver, Point, ResolvedPath};
pub use crate::render::{Renderer, SilentTone, ToneSink};
pub use crate::rng::{GameRng, GameRngState};
pub use crate::session::{GameSession, Outcome, Selection, SessionPhase};
