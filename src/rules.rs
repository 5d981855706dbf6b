//! Move legality, capture detection, and undo.
//!
//! A placement is checked in this order:
//! 1. the point must be on the board and empty;
//! 2. the stone is placed tentatively and every adjacent enemy group is
//!    searched for liberties, with the placed point not counted;
//! 3. if any enemy group died, it is removed and the move stands;
//! 4. otherwise the placed stone's own group must have a liberty, or the
//!    placement is taken back and the move is suicide.
//!
//! The board is only changed when the move succeeds.

use std::collections::BTreeSet;

use crate::board::{Board, Color, Vertex};
use crate::error::GoError;
use crate::moves::Move;
use crate::trace::{NoTrace, Observer};

/// Outcome of a liberty search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStatus {
    /// The group touches at least one liberty.
    Alive,
    /// The group has no liberties; holds every stone in it.
    Dead(Vec<Vertex>),
}

/// Search the group containing `root` for a liberty.
///
/// `excluded` is never counted as a liberty, even when empty. The search
/// stops at the first liberty found. An empty `root` is reported as alive.
///
/// # Panics
/// If `root` or `excluded` was created by a board of a different size.
pub fn search(board: &Board, root: Vertex, excluded: Option<Vertex>) -> GroupStatus {
    search_with(board, root, excluded, &mut NoTrace)
}

pub fn search_with<O: Observer + ?Sized>(
    board: &Board,
    root: Vertex,
    excluded: Option<Vertex>,
    obs: &mut O,
) -> GroupStatus {
    let status = flood(board, root, excluded);
    let dead = match &status {
        GroupStatus::Alive => None,
        GroupStatus::Dead(group) => Some(group.len()),
    };
    obs.on_search(root.point(), excluded.map(Vertex::point), dead);
    status
}

/// Layered breadth-first walk over same-colored stones.
fn flood(board: &Board, root: Vertex, excluded: Option<Vertex>) -> GroupStatus {
    assert!(
        excluded.is_none_or(|e| board.owns(e)),
        "excluded vertex does not belong to a {}x{} board",
        board.size(),
        board.size()
    );
    let Some(color) = board.get(root) else {
        return GroupStatus::Alive;
    };
    let mut visited = vec![false; board.size() * board.size()];
    visited[root.index()] = true;
    let mut frontier = vec![root];
    let mut group = Vec::new();

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for v in frontier {
            group.push(v);
            for n in board.neighbors(v) {
                match board.get(n) {
                    None if Some(n) != excluded => return GroupStatus::Alive,
                    Some(c) if c == color && !visited[n.index()] => {
                        visited[n.index()] = true;
                        next.push(n);
                    }
                    _ => {}
                }
            }
        }
        frontier = next;
    }
    GroupStatus::Dead(group)
}

/// Place a stone of `color` at `(x, y)`.
///
/// # Errors
/// - [`GoError::OutOfBounds`] if the point is off the board
/// - [`GoError::OccupiedPosition`] if the point holds a stone
/// - [`GoError::Suicide`] if the stone's group would have no liberties
///   after captures are resolved
pub fn play(board: &mut Board, x: usize, y: usize, color: Color) -> Result<(), GoError> {
    play_with(board, x, y, color, &mut NoTrace)
}

pub fn play_with<O: Observer + ?Sized>(
    board: &mut Board,
    x: usize,
    y: usize,
    color: Color,
    obs: &mut O,
) -> Result<(), GoError> {
    let result = place(board, x, y, color, obs);
    if let Err(e) = &result {
        obs.on_reject(e);
    }
    result
}

fn place<O: Observer + ?Sized>(
    board: &mut Board,
    x: usize,
    y: usize,
    color: Color,
    obs: &mut O,
) -> Result<(), GoError> {
    let v = board.vertex(x, y)?;
    obs.on_play(v.point(), color);
    if board.get(v).is_some() {
        return Err(GoError::OccupiedPosition { x, y });
    }

    board.set(v, Some(color));

    let opp = color.opponent();
    let mut captures = BTreeSet::new();
    let mut to_remove = Vec::new();
    for n in board.neighbors(v) {
        if board.get(n) != Some(opp) || captures.contains(&n.point()) {
            continue;
        }
        if let GroupStatus::Dead(group) = search_with(board, n, Some(v), obs) {
            for stone in group {
                if captures.insert(stone.point()) {
                    to_remove.push(stone);
                }
            }
        }
    }

    if !captures.is_empty() {
        for stone in to_remove {
            board.set(stone, None);
        }
        obs.on_capture(v.point(), &captures);
        board.record(Move::Placement {
            point: v.point(),
            color,
            captures,
        });
        return Ok(());
    }

    if let GroupStatus::Dead(_) = search_with(board, v, None, obs) {
        board.set(v, None);
        return Err(GoError::Suicide { x, y });
    }

    board.record(Move::Placement {
        point: v.point(),
        color,
        captures,
    });
    Ok(())
}

/// Apply a move record. Recorded captures are ignored and recomputed; a
/// pass only touches the history.
pub fn play_move(board: &mut Board, mv: &Move) -> Result<(), GoError> {
    play_move_with(board, mv, &mut NoTrace)
}

pub fn play_move_with<O: Observer + ?Sized>(
    board: &mut Board,
    mv: &Move,
    obs: &mut O,
) -> Result<(), GoError> {
    match mv {
        Move::Placement { point, color, .. } => play_with(board, point.x, point.y, *color, obs),
        Move::Pass { color } => {
            board.record(Move::pass(*color));
            Ok(())
        }
    }
}

/// Take back the last move, restoring any stones it captured.
///
/// Returns the removed record, or `None` if there is no history.
pub fn undo(board: &mut Board) -> Option<Move> {
    undo_with(board, &mut NoTrace)
}

pub fn undo_with<O: Observer + ?Sized>(board: &mut Board, obs: &mut O) -> Option<Move> {
    let mv = board.pop_history()?;
    if let Move::Placement {
        point,
        color,
        captures,
    } = &mv
    {
        // push_history and the engine only record on-board points
        let restore = std::iter::once((*point, None))
            .chain(captures.iter().map(|p| (*p, Some(color.opponent()))));
        for (p, status) in restore {
            match board.vertex(p.x, p.y) {
                Ok(v) => board.set(v, status),
                Err(e) => unreachable!("history holds an off-board point: {e}"),
            }
        }
    }
    obs.on_undo(&mv);
    Some(mv)
}

impl Board {
    /// See [`play`].
    pub fn play(&mut self, x: usize, y: usize, color: Color) -> Result<(), GoError> {
        play(self, x, y, color)
    }

    /// See [`play_move`].
    pub fn play_move(&mut self, mv: &Move) -> Result<(), GoError> {
        play_move(self, mv)
    }

    /// Record a pass for `color` without touching the grid.
    pub fn push_pass(&mut self, color: Color) {
        self.record(Move::pass(color));
    }

    pub fn peek_top(&self) -> Option<&Move> {
        self.peek_history()
    }

    /// Remove the last record from the history. The grid is not changed; use
    /// [`Board::undo`] to also revert the stones.
    pub fn pop_top(&mut self) -> Option<Move> {
        self.pop_history()
    }

    /// See [`undo`].
    pub fn undo(&mut self) -> Option<Move> {
        undo(self)
    }
}
