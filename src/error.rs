/// Errors reported by the board and the move engine.
///
/// Every variant is an expected rule outcome; a failed operation leaves the
/// board untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoError {
    #[error("board size must be at least 1 (got {size})")]
    InvalidSize { size: usize },

    #[error("point ({x}, {y}) is off a {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("point ({x}, {y}) is already occupied")]
    OccupiedPosition { x: usize, y: usize },

    #[error("playing at ({x}, {y}) would be suicide")]
    Suicide { x: usize, y: usize },
}

/// Errors that can occur when parsing a text vertex such as `D4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VertexError {
    #[error("invalid vertex: {0:?}")]
    Malformed(String),

    #[error("vertex {vertex} is off a {size}x{size} board")]
    OffBoard { vertex: String, size: usize },
}

/// Errors raised when setting up the GTP front-end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GtpError {
    #[error("GTP boards are at most {max}x{max} (got {size})")]
    UnsupportedSize { size: usize, max: usize },

    #[error(transparent)]
    Board(#[from] GoError),
}
