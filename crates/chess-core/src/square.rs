//! Board square representation.

use std::fmt;

/// A square on the chess board, stored as `row * 8 + col`.
///
/// Row 0 is Black's back rank and row 7 is White's, so the squares read
/// top to bottom the way the board is drawn from White's side:
/// - a8 = (0, 0) = 0, h8 = (0, 7) = 7
/// - a1 = (7, 0) = 56, h1 = (7, 7) = 63
///
/// Every constructor is range-checked; a `Square` always lies on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column (each 0-7).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, as received from outside
    /// the engine.
    pub fn from_coords(row: i32, col: i32) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Square::new(b'8' - rank, file - b'a')
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square shifted by the given deltas, or `None` if that
    /// leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square((row * 8 + col) as u8))
        }
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn square_new() {
        let e2 = sq(6, 4);
        assert_eq!(e2.row(), 6);
        assert_eq!(e2.col(), 4);
        assert_eq!(e2.index(), 52);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_from_coords() {
        assert_eq!(Square::from_coords(0, 0), Some(sq(0, 0)));
        assert_eq!(Square::from_coords(7, 7), Some(sq(7, 7)));
        assert_eq!(Square::from_coords(-1, 3), None);
        assert_eq!(Square::from_coords(3, 8), None);
        assert_eq!(Square::from_coords(i32::MAX, 0), None);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Some(sq(0, 0)));
        assert_eq!(Square::from_algebraic("e2"), Some(sq(6, 4)));
        assert_eq!(Square::from_algebraic("h1"), Some(sq(7, 7)));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(sq(0, 0).to_algebraic(), "a8");
        assert_eq!(sq(7, 7).to_algebraic(), "h1");
        assert_eq!(sq(4, 4).to_algebraic(), "e4");
    }

    #[test]
    fn square_offset() {
        let d4 = sq(4, 3);
        assert_eq!(d4.offset(-1, 0), Some(sq(3, 3)));
        assert_eq!(d4.offset(2, 1), Some(sq(6, 4)));
        assert_eq!(sq(0, 0).offset(-1, 0), None);
        assert_eq!(sq(7, 7).offset(0, 1), None);
        assert_eq!(sq(0, 7).offset(1, 1), None);
    }

    #[test]
    fn all_squares_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], sq(0, 0));
        assert_eq!(squares[9], sq(1, 1));
        assert_eq!(squares[63], sq(7, 7));
    }
}
