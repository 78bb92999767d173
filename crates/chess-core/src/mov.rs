//! Move representation.

use crate::{PieceKind, Square};
use std::fmt;

/// A chess move.
///
/// `promotion` only matters when a pawn reaches its promotion row; the
/// engine defaults it to a queen when absent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move without a promotion choice.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a move that promotes to `kind` if it lands a pawn on the far row.
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8n").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// Parses a move from UCI notation.
    ///
    /// Any piece letter is accepted as a promotion suffix; whether the
    /// promotion is allowed is decided by the engine.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let promotion = match s.chars().nth(4) {
            Some(c) => Some(PieceKind::from_char(c)?),
            None => None,
        };
        Some(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn move_fields() {
        let m = Move::new(sq(6, 4), sq(4, 4));
        assert_eq!(m.from, sq(6, 4));
        assert_eq!(m.to, sq(4, 4));
        assert_eq!(m.promotion, None);

        let promo = Move::with_promotion(sq(1, 0), sq(0, 0), PieceKind::Knight);
        assert_eq!(promo.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn move_uci() {
        assert_eq!(Move::new(sq(6, 4), sq(4, 4)).to_uci(), "e2e4");
        assert_eq!(
            Move::with_promotion(sq(1, 4), sq(0, 4), PieceKind::Queen).to_uci(),
            "e7e8q"
        );
    }

    #[test]
    fn move_from_uci() {
        let m = Move::from_uci("e2e4").unwrap();
        assert_eq!(m.from, sq(6, 4));
        assert_eq!(m.to, sq(4, 4));
        assert_eq!(m.promotion, None);

        let promo = Move::from_uci("a7a8N").unwrap();
        assert_eq!(promo.promotion, Some(PieceKind::Knight));

        assert!(Move::from_uci("invalid").is_none());
        assert!(Move::from_uci("e2e9").is_none());
        assert!(Move::from_uci("e7e8x").is_none());
    }

    #[test]
    fn move_from_uci_edge_cases() {
        // Too short
        assert!(Move::from_uci("e2").is_none());
        assert!(Move::from_uci("e2e").is_none());
        // Too long
        assert!(Move::from_uci("e2e4qq").is_none());
        // Multi-byte input must not split a char boundary
        assert!(Move::from_uci("é2e4").is_none());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::new(sq(7, 6), sq(5, 5));
        assert_eq!(format!("{:?}", m), "Move(g1f3)");
        assert_eq!(format!("{}", m), "g1f3");
    }
}
