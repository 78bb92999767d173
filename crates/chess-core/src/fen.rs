//! FEN-style board text parsing.
//!
//! Only the piece placement and the active color are meaningful here.
//! Castling, en passant and the move clocks are not part of these rules,
//! so any trailing fields are accepted and ignored.

use crate::{Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing board text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: empty input")]
    Empty,

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed board text.
///
/// FEN lists ranks from the eighth down to the first, which is exactly
/// row 0 to row 7 of the grid, so pieces map over without flipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Active color, if the text carried one.
    pub active_color: Option<Color>,
    /// Every occupied square with its piece, in row-major order.
    pub pieces: Vec<(Square, Piece)>,
}

impl FenParser {
    /// The standard starting placement.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Parses board text.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;
        let pieces = Self::parse_piece_placement(placement)?;

        let active_color = match parts.next() {
            None => None,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next().and_then(Color::from_fen_char), chars.next()) {
                    (Some(color), None) => Some(color),
                    _ => return Err(FenError::InvalidActiveColor(s.to_string())),
                }
            }
        };

        Ok(FenParser {
            active_color,
            pieces,
        })
    }

    fn parse_piece_placement(placement: &str) -> Result<Vec<(Square, Piece)>, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                rows.len()
            )));
        }

        let mut pieces = Vec::new();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0u32;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    let square = Square::new(row as u8, col as u8).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!(
                            "rank {} has more than 8 squares",
                            8 - row
                        ))
                    })?;
                    pieces.push((square, piece));
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(pieces)
    }
}
