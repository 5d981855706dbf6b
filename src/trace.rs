//! Optional tracing hook for the move engine.
//!
//! The engine never logs on its own. Callers that want diagnostics pass an
//! [`Observer`] to the `*_with` entry points in [`rules`](crate::rules);
//! [`LogObserver`] forwards every event to the `log` facade.

use std::collections::BTreeSet;

use crate::board::{Color, Point};
use crate::error::GoError;
use crate::moves::Move;

/// Receives engine events. Every method defaults to doing nothing.
pub trait Observer {
    /// A placement is about to be checked.
    fn on_play(&mut self, _point: Point, _color: Color) {}

    /// A group search rooted at `root` finished. `dead` holds the group size
    /// when no liberty was found.
    fn on_search(&mut self, _root: Point, _excluded: Option<Point>, _dead: Option<usize>) {}

    /// A move removed `captures` from the board.
    fn on_capture(&mut self, _point: Point, _captures: &BTreeSet<Point>) {}

    /// A move was rejected; the board is unchanged.
    fn on_reject(&mut self, _error: &GoError) {}

    /// A move was taken back.
    fn on_undo(&mut self, _mv: &Move) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Observer for NoTrace {}

/// Forwards engine events to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_play(&mut self, point: Point, color: Color) {
        log::debug!("play {color} at {point}");
    }

    fn on_search(&mut self, root: Point, excluded: Option<Point>, dead: Option<usize>) {
        match dead {
            Some(n) => {
                log::trace!("group at {root} (excluding {excluded:?}) is dead, {n} stones")
            }
            None => log::trace!("group at {root} (excluding {excluded:?}) has a liberty"),
        }
    }

    fn on_capture(&mut self, point: Point, captures: &BTreeSet<Point>) {
        log::debug!("move at {point} captures {captures:?}");
    }

    fn on_reject(&mut self, error: &GoError) {
        log::debug!("move rejected: {error}");
    }

    fn on_undo(&mut self, mv: &Move) {
        log::debug!("undo {mv}");
    }
}
