//! Aduk: Go board state and move legality.
//!
//! This crate keeps a Go board and its move history, and decides for every
//! proposed stone whether it is legal, what it captures, and how to take it
//! back again. Ko, scoring, and handicap are left to callers.
//!
//! ## Modules
//!
//! - [`board`] - Grid, coordinates, move history, text diagram
//! - [`rules`] - Legality checks, capture detection, undo
//! - [`moves`] - Move records (placements and passes)
//! - [`trace`] - Optional observer hook for engine diagnostics
//! - [`coord`] - Text vertices such as `D4`
//! - [`playout`] - Random legal games
//! - [`gtp`] - Go Text Protocol front-end
//! - [`constants`] - Defaults and limits
//!
//! ## Example
//!
//! ```
//! use aduk::board::{Board, Color};
//!
//! let mut board = Board::new(5)?;
//! board.play(2, 2, Color::Black)?;
//! board.play(1, 2, Color::White)?;
//! board.play(3, 2, Color::White)?;
//! board.play(2, 1, Color::White)?;
//! board.play(2, 3, Color::White)?;
//!
//! assert_eq!(board.stone_at(2, 2), None);
//! assert_eq!(board.peek_top().unwrap().captures().count(), 1);
//! # Ok::<(), aduk::error::GoError>(())
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod gtp;
pub mod moves;
pub mod playout;
pub mod rules;
pub mod trace;
