//! Random games.
//!
//! A playout picks uniformly among the legal placements for the side to
//! move and passes when none is left. Used for `genmove`, the demo, and
//! randomized tests.

use crate::board::{Board, Color, Point};

/// Play a random legal move for `color`, or pass if there is none.
///
/// Returns the placed point, or `None` when the move was a pass.
pub fn random_move(board: &mut Board, color: Color, rng: &mut fastrand::Rng) -> Option<Point> {
    let mut candidates: Vec<Point> = board
        .vertices()
        .filter(|&v| board.get(v).is_none())
        .map(|v| v.point())
        .collect();
    rng.shuffle(&mut candidates);

    // Illegal candidates leave the board untouched, so just try them in turn.
    for p in candidates {
        if board.play(p.x, p.y, color).is_ok() {
            return Some(p);
        }
    }
    board.push_pass(color);
    None
}

/// Play a random game starting with Black.
///
/// Stops after two consecutive passes or `max_moves` moves. Returns the
/// number of moves played.
pub fn random_game(board: &mut Board, max_moves: usize, rng: &mut fastrand::Rng) -> usize {
    let mut color = Color::Black;
    let mut passes = 0;
    let mut played = 0;

    while passes < 2 && played < max_moves {
        match random_move(board, color, rng) {
            Some(_) => passes = 0,
            None => passes += 1,
        }
        played += 1;
        color = color.opponent();
    }
    played
}
