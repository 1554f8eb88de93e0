//! Frame-by-frame playback of a resolved path.
//!
//! A descent animates as one point per frame on a fixed tick. The core only
//! supplies the cursor and the per-frame drawing calls; scheduling the tick
//! (timer, event loop, immediate drain in tests) belongs to the embedder.
//!
//! Overlapping playbacks are deliberately not serialized: starting a second
//! descent while one is still animating is accepted and the two race
//! visually, matching the reference behavior.

use crate::path::Point;
use crate::render::{Renderer, ToneSink};
use crate::session::GameSession;

/// Nominal delay between frames, in the embedder's time units.
pub const TICK_MS: u64 = 30;

/// Horizontal movement beyond this marks a frame as a rung crossing...
const CROSSING_DX: f64 = 2.0;

/// ...provided the vertical movement stays under this.
const CROSSING_DY: f64 = 2.0;

/// One frame of playback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Index into the path's point sequence.
    pub index: usize,
    /// The point revealed this frame.
    pub point: Point,
    /// Whether this frame moved across a rung (triggers the tone).
    pub crossing: bool,
}

/// Cursor over a resolved path's point sequence.
#[derive(Clone, Debug)]
pub struct PathAnimation {
    points: Vec<Point>,
    cursor: usize,
}

impl PathAnimation {
    /// Begin playback over `points`.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, cursor: 0 }
    }

    /// The points revealed so far (including the current frame's).
    #[must_use]
    pub fn prefix(&self) -> &[Point] {
        &self.points[..self.cursor]
    }

    /// Whether every frame has been played.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.points.len()
    }

    /// Advance one frame, or `None` when playback is done.
    pub fn advance(&mut self) -> Option<Frame> {
        let point = *self.points.get(self.cursor)?;
        let crossing = self.cursor > 0 && {
            let prev = self.points[self.cursor - 1];
            (point.x - prev.x).abs() > CROSSING_DX && (point.y - prev.y).abs() < CROSSING_DY
        };
        let frame = Frame {
            index: self.cursor,
            point,
            crossing,
        };
        self.cursor += 1;
        Some(frame)
    }
}

/// Play a descent to completion, one synchronous frame at a time.
///
/// Each frame redraws the board with the current highlight, draws the path
/// prefix, and fires the tone on crossing frames. When playback ends the
/// highlight is cleared and the board redrawn once more, so the revealed
/// outcome shows without the animation overlay.
pub fn play<R, T>(session: &mut GameSession, points: &[Point], renderer: &mut R, tone: &mut T)
where
    R: Renderer,
    T: ToneSink,
{
    let mut animation = PathAnimation::new(points.to_vec());

    while let Some(frame) = animation.advance() {
        renderer.clear_and_draw(
            session.board(),
            session.labels(),
            session.results(),
            session.selected(),
        );
        renderer.draw_path_prefix(animation.prefix());
        if frame.crossing {
            tone.play_transition_tone();
        }
    }

    session.clear_selection();
    renderer.clear_and_draw(session.board(), session.labels(), session.results(), None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_then_vertical() -> Vec<Point> {
        vec![
            Point::new(100.0, 100.0),
            Point::new(100.0, 104.0),
            Point::new(108.0, 104.0),
            Point::new(116.0, 104.0),
            Point::new(116.0, 110.0),
        ]
    }

    #[test]
    fn test_advance_walks_every_point() {
        let points = horizontal_then_vertical();
        let mut animation = PathAnimation::new(points.clone());

        let mut seen = 0;
        while let Some(frame) = animation.advance() {
            assert_eq!(frame.index, seen);
            assert_eq!(frame.point, points[seen]);
            seen += 1;
        }

        assert_eq!(seen, points.len());
        assert!(animation.is_finished());
        assert_eq!(animation.advance(), None);
    }

    #[test]
    fn test_crossing_detection() {
        let mut animation = PathAnimation::new(horizontal_then_vertical());

        let crossings: Vec<bool> = std::iter::from_fn(|| animation.advance())
            .map(|frame| frame.crossing)
            .collect();

        // Only the two horizontal moves count; the first frame has no
        // predecessor and vertical moves stay silent.
        assert_eq!(crossings, vec![false, false, true, true, false]);
    }

    #[test]
    fn test_prefix_tracks_cursor() {
        let points = horizontal_then_vertical();
        let mut animation = PathAnimation::new(points.clone());

        assert!(animation.prefix().is_empty());
        animation.advance();
        assert_eq!(animation.prefix(), &points[..1]);
        animation.advance();
        assert_eq!(animation.prefix(), &points[..2]);
    }

    #[test]
    fn test_tick_matches_reference_interval() {
        assert_eq!(TICK_MS, 30);
    }

    #[test]
    fn test_diagonal_move_is_not_a_crossing() {
        let mut animation = PathAnimation::new(vec![
            Point::new(100.0, 100.0),
            Point::new(110.0, 110.0),
        ]);
        animation.advance();
        let frame = animation.advance().unwrap();
        assert!(!frame.crossing);
    }
}
