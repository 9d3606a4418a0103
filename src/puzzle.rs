//! Puzzle-piece geometry and connection tracking
//!
//! The drag glue lives in `dom::puzzle`; everything that can be computed
//! from bounding rects alone lives here so the snap rules are testable
//! without a browser.

use std::collections::BTreeSet;

/// A piece snaps onto its target once their centers come within this
/// many pixels.
pub const SNAP_DISTANCE: f64 = 50.0;

/// Bounding rect in page coordinates, as reported by the DOM
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect { left, top, width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Distance between the centers of two rects
pub fn center_distance(a: &Rect, b: &Rect) -> f64 {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}

/// Translation that centers `piece` on `target`
pub fn snap_offset(piece: &Rect, target: &Rect) -> (f64, f64) {
    (
        target.left - piece.left + (target.width - piece.width) / 2.0,
        target.top - piece.top + (target.height - piece.height) / 2.0,
    )
}

/// The snap translation, if the piece has been dropped close enough to
/// its target. The threshold is strict: exactly `SNAP_DISTANCE` apart
/// does not snap.
pub fn snap(piece: &Rect, target: &Rect) -> Option<(f64, f64)> {
    (center_distance(piece, target) < SNAP_DISTANCE).then(|| snap_offset(piece, target))
}

/// Clamp a candidate drag translation so the piece stays inside its
/// container. A piece larger than the container pins to the near edge.
pub fn clamp_translation(piece: &Rect, bounds: &Rect, dx: f64, dy: f64) -> (f64, f64) {
    let clamp_axis = |delta: f64, lo: f64, hi: f64| {
        if hi < lo { lo } else { delta.clamp(lo, hi) }
    };
    let min_dx = bounds.left - piece.left;
    let max_dx = (bounds.left + bounds.width) - (piece.left + piece.width);
    let min_dy = bounds.top - piece.top;
    let max_dy = (bounds.top + bounds.height) - (piece.top + piece.height);
    (clamp_axis(dx, min_dx, max_dx), clamp_axis(dy, min_dy, max_dy))
}

/// Which pieces have found their targets. Complete once every piece in
/// the puzzle is connected; an empty puzzle is never complete.
#[derive(Debug, Clone)]
pub struct PuzzleBoard {
    total: usize,
    connected: BTreeSet<String>,
}

impl PuzzleBoard {
    pub fn new(total: usize) -> PuzzleBoard {
        PuzzleBoard {
            total,
            connected: BTreeSet::new(),
        }
    }

    /// Record a connection. Returns false if this piece was already
    /// connected (re-drops onto the same target don't re-fire effects).
    pub fn connect(&mut self, piece_id: &str) -> bool {
        self.connected.insert(piece_id.to_string())
    }

    pub fn is_connected(&self, piece_id: &str) -> bool {
        self.connected.contains(piece_id)
    }

    pub fn connected_count(&self) -> usize {
        self.connected.len()
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.connected.len() == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_threshold_is_strict() {
        let target = Rect::new(100.0, 100.0, 80.0, 80.0);
        // Same size, offset 49px horizontally: centers 49 apart
        let near = Rect::new(149.0, 100.0, 80.0, 80.0);
        assert_eq!(snap(&near, &target), Some((-49.0, 0.0)));
        // Exactly 50 apart: no snap
        let edge = Rect::new(150.0, 100.0, 80.0, 80.0);
        assert_eq!(snap(&edge, &target), None);
        let far = Rect::new(400.0, 300.0, 80.0, 80.0);
        assert_eq!(snap(&far, &target), None);
    }

    #[test]
    fn test_snap_offset_centers_mismatched_sizes() {
        // Smaller piece over a larger target: offset centers them
        let piece = Rect::new(0.0, 0.0, 40.0, 40.0);
        let target = Rect::new(10.0, 10.0, 80.0, 80.0);
        let (dx, dy) = snap_offset(&piece, &target);
        assert_eq!((dx, dy), (30.0, 30.0));

        let moved = Rect::new(piece.left + dx, piece.top + dy, piece.width, piece.height);
        assert_eq!(moved.center(), target.center());
    }

    #[test]
    fn test_center_distance() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(3.0, 4.0, 10.0, 10.0);
        assert_eq!(center_distance(&a, &b), 5.0);
    }

    #[test]
    fn test_clamp_translation_keeps_piece_inside() {
        let bounds = Rect::new(0.0, 0.0, 500.0, 300.0);
        let piece = Rect::new(100.0, 100.0, 50.0, 50.0);

        // Unconstrained move passes through
        assert_eq!(clamp_translation(&piece, &bounds, 20.0, -30.0), (20.0, -30.0));
        // Dragging far right stops at the container edge
        assert_eq!(clamp_translation(&piece, &bounds, 1000.0, 0.0), (350.0, 0.0));
        // And far up-left stops at the origin
        assert_eq!(clamp_translation(&piece, &bounds, -1000.0, -1000.0), (-100.0, -100.0));
    }

    #[test]
    fn test_clamp_oversized_piece_pins_to_near_edge() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let piece = Rect::new(20.0, 20.0, 300.0, 50.0);
        let (dx, _) = clamp_translation(&piece, &bounds, 500.0, 0.0);
        assert_eq!(dx, -20.0);
    }

    #[test]
    fn test_board_completion() {
        let mut board = PuzzleBoard::new(3);
        assert!(!board.is_complete());

        assert!(board.connect("motor"));
        assert!(board.connect("cab"));
        // Re-connecting the same piece reports false and doesn't count twice
        assert!(!board.connect("motor"));
        assert_eq!(board.connected_count(), 2);
        assert!(!board.is_complete());

        assert!(board.connect("controller"));
        assert!(board.is_complete());
        assert!(board.is_connected("cab"));
    }

    #[test]
    fn test_empty_board_never_completes() {
        assert!(!PuzzleBoard::new(0).is_complete());
    }
}
