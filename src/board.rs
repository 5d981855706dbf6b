//! Board state: a flat grid of cells plus the move history.
//!
//! The board has no rule knowledge. Stones are placed and removed through
//! [`rules`](crate::rules), which is the only mutator after construction.

use std::fmt;

use crate::constants::{BLACK_CHAR, EMPTY_CHAR, WHITE_CHAR};
use crate::error::GoError;
use crate::moves::Move;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A coordinate pair. Not tied to any board; see [`Vertex`] for indexing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point validated against a board, carrying its index into the grid.
///
/// Only [`Board::vertex`] and [`Board::neighbors`] create vertices, so grid
/// access through a vertex is always in range. A vertex remembers the size
/// of the board that made it; using it on a board of another size panics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vertex {
    point: Point,
    index: usize,
    size: usize,
}

impl Vertex {
    pub fn point(self) -> Point {
        self.point
    }

    pub fn x(self) -> usize {
        self.point.x
    }

    pub fn y(self) -> usize {
        self.point.y
    }

    /// Flat index `size * x + y`.
    pub fn index(self) -> usize {
        self.index
    }
}

/// A square Go board with its move history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
    history: Vec<Move>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// # Errors
    /// [`GoError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, GoError> {
        if size < 1 {
            return Err(GoError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            history: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Reset every cell to empty and drop the history.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.history.clear();
    }

    /// Validate `(x, y)` against this board.
    pub fn vertex(&self, x: usize, y: usize) -> Result<Vertex, GoError> {
        if x >= self.size || y >= self.size {
            return Err(GoError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(self.vertex_unchecked(x, y))
    }

    fn vertex_unchecked(&self, x: usize, y: usize) -> Vertex {
        Vertex {
            point: Point { x, y },
            index: self.size * x + y,
            size: self.size,
        }
    }

    /// Whether `v` was validated against a board of this size.
    pub fn owns(&self, v: Vertex) -> bool {
        v.size == self.size
    }

    fn slot(&self, v: Vertex) -> usize {
        assert!(
            self.owns(v),
            "vertex {} from a {}x{} board used on a {}x{} board",
            v.point,
            v.size,
            v.size,
            self.size,
            self.size
        );
        v.index
    }

    /// # Panics
    /// If `v` was created by a board of a different size.
    pub fn get(&self, v: Vertex) -> Option<Color> {
        self.cells[self.slot(v)]
    }

    /// # Panics
    /// If `v` was created by a board of a different size.
    pub fn set(&mut self, v: Vertex, status: Option<Color>) {
        let i = self.slot(v);
        self.cells[i] = status;
    }

    /// Look up a raw point; `None` when it is empty or off the board.
    pub fn stone_at(&self, x: usize, y: usize) -> Option<Color> {
        self.vertex(x, y).ok().and_then(|v| self.get(v))
    }

    /// On-board orthogonal neighbors in the order left, right, up, down.
    pub fn neighbors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        let (x, y) = (v.x(), v.y());
        let s = self.size;
        let candidates = [
            (x > 0).then(|| (x - 1, y)),
            (x + 1 < s).then(|| (x + 1, y)),
            (y > 0).then(|| (x, y - 1)),
            (y + 1 < s).then(|| (x, y + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .map(move |(nx, ny)| self.vertex_unchecked(nx, ny))
    }

    /// All vertices in grid order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        let s = self.size;
        (0..s).flat_map(move |x| (0..s).map(move |y| self.vertex_unchecked(x, y)))
    }

    /// Number of stones of `color` currently on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    // -------------------------------------------------------------------------
    // History
    // -------------------------------------------------------------------------

    /// Append a record. Every point it names must be on this board, so that
    /// history can always be replayed or undone.
    ///
    /// # Errors
    /// [`GoError::OutOfBounds`] for an off-board point or capture; the history
    /// is left unchanged.
    pub fn push_history(&mut self, mv: Move) -> Result<(), GoError> {
        for p in mv.point().into_iter().chain(mv.captures()) {
            self.vertex(p.x, p.y)?;
        }
        self.record(mv);
        Ok(())
    }

    /// Append a record the engine has already validated.
    pub(crate) fn record(&mut self, mv: Move) {
        self.history.push(mv);
    }

    pub fn pop_history(&mut self) -> Option<Move> {
        self.history.pop()
    }

    pub fn peek_history(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Moves applied since the last clear, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of opponent stones captured by the moves of `color`.
    pub fn prisoners(&self, color: Color) -> usize {
        self.history
            .iter()
            .filter(|mv| mv.color() == color)
            .map(|mv| mv.captures().count())
            .sum()
    }

    /// Text diagram of the board, one row per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.cells[self.size * x + y] {
                    Some(Color::Black) => BLACK_CHAR,
                    Some(Color::White) => WHITE_CHAR,
                    None => EMPTY_CHAR,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
