//! Integration tests for aduk
//!
//! Board positions are built by playing stones through the public engine, so
//! every setup move is itself checked for legality.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use aduk::board::{Board, Color, Point};
use aduk::error::GoError;
use aduk::moves::Move;
use aduk::playout::{random_game, random_move};
use aduk::rules::{GroupStatus, search};

use Color::{Black, White};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Play the given stones in order, panicking on any illegal setup move.
fn setup(size: usize, stones: &[(usize, usize, Color)]) -> Board {
    let mut board = Board::new(size).unwrap();
    for &(x, y, c) in stones {
        if let Err(e) = board.play(x, y, c) {
            panic!("illegal setup move ({x}, {y}) {c}: {e}");
        }
    }
    board
}

fn captures_of(mv: &Move) -> BTreeSet<Point> {
    mv.captures().collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_zero_size_board_is_rejected() {
    assert_eq!(Board::new(0), Err(GoError::InvalidSize { size: 0 }));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(9).unwrap();
    assert_eq!(board.size(), 9);
    assert_eq!(board.count(Black) + board.count(White), 0);
    assert!(board.peek_top().is_none());
}

// =============================================================================
// Bounds and occupancy
// =============================================================================

#[test]
fn test_out_of_bounds_leaves_board_unchanged() {
    for n in 1..=6 {
        let mut board = setup(n, &[]);
        if n > 2 {
            board.play(1, 1, Black).unwrap();
        }
        let before = board.clone();
        for (x, y) in [(n, 0), (0, n), (n, n), (n + 3, 1), (usize::MAX, 0)] {
            assert_eq!(
                board.play(x, y, White),
                Err(GoError::OutOfBounds { x, y, size: n })
            );
            assert_eq!(board, before);
        }
    }
}

#[test]
fn test_occupied_position() {
    let mut board = setup(9, &[(4, 4, Black)]);
    let before = board.clone();
    assert_eq!(
        board.play(4, 4, Black),
        Err(GoError::OccupiedPosition { x: 4, y: 4 })
    );
    assert_eq!(
        board.play(4, 4, White),
        Err(GoError::OccupiedPosition { x: 4, y: 4 })
    );
    assert_eq!(board, before);
}

#[test]
fn test_replay_after_capture_is_allowed() {
    let mut board = setup(
        5,
        &[(2, 2, Black), (1, 2, White), (3, 2, White), (2, 1, White), (2, 3, White)],
    );
    assert_eq!(board.stone_at(2, 2), None);
    // (2,2) is a white eye now; Black cannot refill it but White can
    assert_eq!(board.play(2, 2, Black), Err(GoError::Suicide { x: 2, y: 2 }));
    assert_eq!(board.play(2, 2, White), Ok(()));
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_simple_capture() {
    let mut board = setup(5, &[(2, 2, Black), (1, 2, White), (3, 2, White), (2, 1, White)]);
    assert_eq!(board.play(2, 3, White), Ok(()));

    let top = board.peek_top().unwrap();
    assert_eq!(top.point(), Some(Point::new(2, 3)));
    assert_eq!(top.color(), White);
    assert_eq!(captures_of(top), BTreeSet::from([Point::new(2, 2)]));
    assert_eq!(board.stone_at(2, 2), None);
}

#[test]
fn test_capture_precedes_suicide() {
    // Black at (0,1) has no liberty of its own, but takes the corner stone.
    let mut board = setup(
        5,
        &[(1, 0, Black), (0, 0, White), (1, 1, White), (0, 2, White)],
    );
    assert_eq!(board.play(0, 1, Black), Ok(()));
    assert_eq!(
        captures_of(board.peek_top().unwrap()),
        BTreeSet::from([Point::new(0, 0)])
    );
    assert_eq!(board.stone_at(0, 0), None);
    assert_eq!(board.stone_at(0, 1), Some(Black));
}

#[test]
fn test_capture_large_group_on_edge() {
    // White chain along the top edge, Black closes its last liberty.
    let mut board = setup(
        5,
        &[
            (0, 0, White),
            (1, 0, White),
            (2, 0, White),
            (0, 1, Black),
            (1, 1, Black),
            (2, 1, Black),
        ],
    );
    board.play(3, 0, Black).unwrap();
    assert_eq!(
        captures_of(board.peek_top().unwrap()),
        BTreeSet::from([Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)])
    );
    assert_eq!(board.count(White), 0);
    assert_eq!(board.prisoners(Black), 3);
}

#[test]
fn test_non_capturing_move_records_empty_captures() {
    let mut board = setup(9, &[]);
    board.play(3, 3, Black).unwrap();
    assert_eq!(
        board.peek_top(),
        Some(&Move::Placement {
            point: Point::new(3, 3),
            color: Black,
            captures: BTreeSet::new(),
        })
    );
}

// =============================================================================
// Suicide
// =============================================================================

#[test]
fn test_suicide_rejected() {
    let mut board = setup(3, &[(0, 1, White), (2, 1, White), (1, 0, White), (1, 2, White)]);
    let before = board.clone();
    assert_eq!(board.play(1, 1, Black), Err(GoError::Suicide { x: 1, y: 1 }));
    assert_eq!(board.stone_at(1, 1), None);
    for (x, y) in [(0, 1), (2, 1), (1, 0), (1, 2)] {
        assert_eq!(board.stone_at(x, y), Some(White));
    }
    assert_eq!(board, before);
}

#[test]
fn test_group_suicide_rejected() {
    // Black pair in the corner; filling its last liberty kills the whole group.
    let mut board = setup(
        3,
        &[(0, 0, Black), (1, 0, Black), (2, 0, White), (1, 1, White), (0, 2, White)],
    );
    let before = board.clone();
    assert_eq!(board.play(0, 1, Black), Err(GoError::Suicide { x: 0, y: 1 }));
    assert_eq!(board, before);
}

#[test]
fn test_liberty_at_origin_is_real() {
    // The placed stone's only liberty is (0,0).
    let mut board = setup(4, &[(1, 1, White), (0, 2, White)]);
    assert_eq!(board.play(0, 1, Black), Ok(()));
    let v = board.vertex(0, 1).unwrap();
    assert_eq!(search(&board, v, None), GroupStatus::Alive);
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_history_lifo_then_clear() {
    let mut board = Board::new(9).unwrap();
    let mut rng = fastrand::Rng::with_seed(2024);
    let n = random_game(&mut board, 60, &mut rng);
    let applied: Vec<Move> = board.history().to_vec();
    assert_eq!(applied.len(), n);

    let mut popped = Vec::new();
    while let Some(mv) = board.pop_top() {
        popped.push(mv);
    }
    popped.reverse();
    assert_eq!(popped, applied);
    assert_eq!(board.pop_top(), None);

    board.clear();
    assert_eq!(board, Board::new(9).unwrap());
}

#[test]
fn test_play_move_and_pass() {
    let mut board = Board::new(5).unwrap();
    board.play_move(&Move::placement(0, 0, Black)).unwrap();
    board.push_pass(White);
    board.play_move(&Move::pass(Black)).unwrap();

    assert_eq!(board.history().len(), 3);
    assert_eq!(board.count(Black), 1);
    assert_eq!(board.pop_top(), Some(Move::pass(Black)));
    assert_eq!(board.pop_top(), Some(Move::pass(White)));
    assert_eq!(board.peek_top().and_then(Move::point), Some(Point::new(0, 0)));
}

#[test]
fn test_undo_walks_back_random_game() {
    let mut captured = 0;
    for seed in [1, 17, 99] {
        let mut board = Board::new(7).unwrap();
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut snapshots = vec![board.clone()];
        let mut color = Black;
        for _ in 0..120 {
            random_move(&mut board, color, &mut rng);
            snapshots.push(board.clone());
            color = color.opponent();
        }
        captured += board.prisoners(Black) + board.prisoners(White);
        snapshots.pop();
        while let Some(expected) = snapshots.pop() {
            board.undo().unwrap();
            assert_eq!(board, expected, "seed {seed}");
        }
        assert_eq!(board.undo(), None);
    }
    assert!(captured > 0, "random games should include captures");
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_layout() {
    let board = setup(4, &[(0, 0, Black), (3, 0, White), (1, 2, Black), (2, 3, White)]);
    let expected = concat!(
        "X . . O \n",
        ". . . . \n",
        ". X . . \n",
        ". . O . \n",
    );
    assert_eq!(board.render(), expected);
    assert_eq!(board.render(), board.render());
}
