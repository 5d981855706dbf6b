//! Move records kept on the board history.

use std::collections::BTreeSet;
use std::fmt;

use crate::board::{Color, Point};

/// A move that has been applied to a board.
///
/// Passes carry no point, so a placement without a real position cannot be
/// expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Placement {
        point: Point,
        color: Color,
        /// Opponent stones removed as a direct consequence of this move.
        captures: BTreeSet<Point>,
    },
    Pass {
        color: Color,
    },
}

impl Move {
    /// A placement with no captures, as passed to [`play_move`](crate::rules::play_move).
    pub fn placement(x: usize, y: usize, color: Color) -> Self {
        Move::Placement {
            point: Point::new(x, y),
            color,
            captures: BTreeSet::new(),
        }
    }

    pub fn pass(color: Color) -> Self {
        Move::Pass { color }
    }

    pub fn color(&self) -> Color {
        match self {
            Move::Placement { color, .. } | Move::Pass { color } => *color,
        }
    }

    /// The placed point, or `None` for a pass.
    pub fn point(&self) -> Option<Point> {
        match self {
            Move::Placement { point, .. } => Some(*point),
            Move::Pass { .. } => None,
        }
    }

    /// Stones captured by this move (empty for passes).
    pub fn captures(&self) -> impl Iterator<Item = Point> + '_ {
        let set = match self {
            Move::Placement { captures, .. } => Some(captures),
            Move::Pass { .. } => None,
        };
        set.into_iter().flatten().copied()
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Placement {
                point,
                color,
                captures,
            } => {
                write!(f, "{color} {point}")?;
                if !captures.is_empty() {
                    write!(f, " captures {}", captures.len())?;
                }
                Ok(())
            }
            Move::Pass { color } => write!(f, "{color} pass"),
        }
    }
}
