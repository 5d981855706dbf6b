//! Text coordinates (`D4`, `pass`) for the GTP front-end.
//!
//! Columns use the letters `A`..`Z` without `I` and map to `x`. Rows are
//! numbered from 1 at the bottom of the diagram, so row `r` is `y = size - r`.

use crate::board::Point;
use crate::constants::COLUMN_LETTERS;
use crate::error::VertexError;
use crate::moves::Move;

/// Parse a vertex for a board of `size`. Returns `Ok(None)` for `pass`.
pub fn parse_vertex(s: &str, size: usize) -> Result<Option<Point>, VertexError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Ok(None);
    }

    let malformed = || VertexError::Malformed(s.to_string());
    let mut chars = s.chars();
    let col_char = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
    let x = COLUMN_LETTERS
        .iter()
        .position(|&c| c as char == col_char)
        .ok_or_else(malformed)?;
    let digits = chars.as_str();
    if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let row: usize = digits.parse().map_err(|_| malformed())?;

    if x >= size || row == 0 || row > size {
        return Err(VertexError::OffBoard {
            vertex: s.to_string(),
            size,
        });
    }
    Ok(Some(Point::new(x, size - row)))
}

/// Format a point as a vertex for a board of `size`.
///
/// Points outside the lettered range fall back to `(x, y)`.
pub fn format_vertex(p: Point, size: usize) -> String {
    match COLUMN_LETTERS.get(p.x) {
        Some(&c) if p.y < size => format!("{}{}", c as char, size - p.y),
        _ => p.to_string(),
    }
}

/// Format a move's point, or `pass`.
pub fn format_move(mv: &Move, size: usize) -> String {
    match mv.point() {
        Some(p) => format_vertex(p, size),
        None => "pass".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_parse_corners() {
        assert_eq!(parse_vertex("A1", 9), Ok(Some(Point::new(0, 8))));
        assert_eq!(parse_vertex("a9", 9), Ok(Some(Point::new(0, 0))));
        assert_eq!(parse_vertex("J1", 9), Ok(Some(Point::new(8, 8))));
        assert_eq!(parse_vertex("T19", 19), Ok(Some(Point::new(18, 0))));
    }

    #[test]
    fn test_parse_pass() {
        assert_eq!(parse_vertex("pass", 9), Ok(None));
        assert_eq!(parse_vertex("PASS", 19), Ok(None));
    }

    #[test]
    fn test_parse_skips_i() {
        assert!(matches!(parse_vertex("I5", 9), Err(VertexError::Malformed(_))));
        assert_eq!(parse_vertex("H5", 9), Ok(Some(Point::new(7, 4))));
        assert_eq!(parse_vertex("J5", 9), Ok(Some(Point::new(8, 4))));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_vertex("", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("D", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("Dx", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("D+4", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("D04", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("D 4", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("D0", 9), Err(VertexError::Malformed(_))));
        assert!(matches!(parse_vertex("D10", 9), Err(VertexError::OffBoard { .. })));
        assert!(matches!(parse_vertex("K1", 9), Err(VertexError::OffBoard { .. })));
    }

    #[test]
    fn test_format_roundtrip_on_board() {
        let size = 13;
        for x in 0..size {
            for y in 0..size {
                let p = Point::new(x, y);
                let s = format_vertex(p, size);
                assert_eq!(parse_vertex(&s, size), Ok(Some(p)), "failed for {s}");
            }
        }
    }

    #[test]
    fn test_format_move() {
        assert_eq!(format_move(&Move::pass(Color::Black), 9), "pass");
        assert_eq!(format_move(&Move::placement(3, 5, Color::White), 9), "D4");
    }
}
