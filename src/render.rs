//! Collaborator seams: surface rendering and tone playback.
//!
//! The core never draws or makes sound. Embedders implement these traits
//! (canvas, terminal, headless test double) and the animation driver calls
//! them with immutable snapshots; no feedback flows back into the core.

use crate::board::Board;
use crate::path::Point;

/// Redraws the board and a path prefix during animation.
pub trait Renderer {
    /// Redraw the static board: columns, rungs, participant labels, the
    /// outcomes already revealed, and the currently highlighted participant.
    fn clear_and_draw(
        &mut self,
        board: &Board,
        labels: &[String],
        results: &[Option<usize>],
        highlighted: Option<usize>,
    );

    /// Draw the portion of the descent revealed so far.
    fn draw_path_prefix(&mut self, points: &[Point]);
}

/// Plays the rung-crossing effect tone.
///
/// Fire-and-forget: implementations swallow playback failures.
pub trait ToneSink {
    /// Called once per animation frame that crosses a rung.
    fn play_transition_tone(&mut self);
}

/// A sink that stays silent. Useful for embedders without audio.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentTone;

impl ToneSink for SilentTone {
    fn play_transition_tone(&mut self) {}
}
