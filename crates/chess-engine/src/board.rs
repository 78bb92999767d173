//! The 8×8 grid of optional pieces.

use chess_core::{Color, FenError, FenParser, Piece, PieceKind, Square};
use std::fmt;

/// Back row layout shared by both colors, from column 0 to column 7.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement only: no side to move, no game state.
///
/// The grid is a flat 64-cell array indexed by [`Square::index`]. `Board`
/// is `Copy`, so a hypothetical move is tried on a copy and simply dropped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting setup.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_ROW.into_iter().enumerate() {
            let col = col as u8;
            for color in Color::ALL {
                board.place(color.back_row(), col, Piece::new(kind, color));
                board.place(
                    color.pawn_start_row(),
                    col,
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    fn place(&mut self, row: u8, col: u8, piece: Piece) {
        if let Some(sq) = Square::new(row, col) {
            self.set(sq, Some(piece));
        }
    }

    /// Builds a board from FEN piece placement. Any active color in the
    /// text is ignored here; see [`Game::from_fen`](crate::Game::from_fen).
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_parsed(&parsed))
    }

    pub(crate) fn from_parsed(parsed: &FenParser) -> Self {
        let mut board = Board::empty();
        for &(sq, piece) in &parsed.pieces {
            board.set(sq, Some(piece));
        }
        board
    }

    /// Returns the FEN piece placement of this board.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..8u8 {
            let mut empty_count = 0;
            for col in 0..8u8 {
                match self.squares[(row * 8 + col) as usize] {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Puts `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index() as usize] = piece;
    }

    /// Returns a copy of this board with the piece on `from` moved to `to`.
    ///
    /// No rule checking; whatever stood on `to` is overwritten.
    pub fn with_piece_moved(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        let piece = next.piece_at(from);
        next.set(from, None);
        next.set(to, piece);
        next
    }

    /// Iterates over occupied squares of the given color, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Iterates over every occupied square, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Finds the king of the given color.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Returns the number of pieces of the given color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Returns the grid as nested rows, row 0 first.
    pub fn rows(&self) -> [[Option<Piece>; 8]; 8] {
        let mut rows = [[None; 8]; 8];
        for (i, cell) in self.squares.iter().enumerate() {
            rows[i / 8][i % 8] = *cell;
        }
        rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

/// Eight text rows, row 0 first, with `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', |piece| piece.to_fen_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn standard_setup() {
        let board = Board::standard();
        assert_eq!(board.count(Color::White), 16);
        assert_eq!(board.count(Color::Black), 16);
        assert_eq!(board.king_square(Color::White), Some(sq(7, 4)));
        assert_eq!(board.king_square(Color::Black), Some(sq(0, 4)));
        assert_eq!(
            board.piece_at(sq(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(sq(6, 0)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(board.piece_at(sq(4, 4)), None);
    }

    #[test]
    fn fen_matches_standard() {
        assert_eq!(
            Board::standard().to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        assert_eq!(
            Board::from_fen(FenParser::STARTPOS).unwrap(),
            Board::standard()
        );
    }

    #[test]
    fn moved_copy_leaves_original_untouched() {
        let board = Board::standard();
        let next = board.with_piece_moved(sq(6, 4), sq(4, 4));
        assert_eq!(board.piece_at(sq(4, 4)), None);
        assert!(board.piece_at(sq(6, 4)).is_some());
        assert_eq!(next.piece_at(sq(6, 4)), None);
        assert_eq!(
            next.piece_at(sq(4, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn rows_snapshot_is_row_major() {
        let rows = Board::standard().rows();
        assert_eq!(rows[0][4], Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(rows[7][3], Some(Piece::new(PieceKind::Queen, Color::White)));
        assert!(rows[3].iter().all(Option::is_none));
    }

    #[test]
    fn display_rows() {
        let text = Board::from_fen("k7/8/8/8/8/8/8/7K").unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8  k . . . . . . .");
        assert_eq!(lines[7], "1  . . . . . . . K");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
