//! Constants for board dimensions, text rendering, and playout limits.
//!
//! Board size is a runtime property of [`Board`](crate::board::Board); the
//! values here are defaults and limits used by the front-ends.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) used by the CLI and the GTP engine.
pub const DEFAULT_SIZE: usize = 19;

/// Largest size addressable with GTP vertices (`A`..`Z` without `I`).
pub const MAX_GTP_SIZE: usize = 25;

/// Column letters for text coordinates. `I` is skipped by Go convention.
pub const COLUMN_LETTERS: &[u8; MAX_GTP_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Rendering
// =============================================================================

/// Empty point.
pub const EMPTY_CHAR: char = '.';

/// Black stone.
pub const BLACK_CHAR: char = 'X';

/// White stone.
pub const WHITE_CHAR: char = 'O';

// =============================================================================
// Playouts
// =============================================================================

/// Default move limit for a random game (3 times the default board area).
pub const MAX_GAME_LEN: usize = DEFAULT_SIZE * DEFAULT_SIZE * 3;
