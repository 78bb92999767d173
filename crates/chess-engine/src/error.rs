//! Error types for game operations.

use chess_core::{Color, FenError, PieceKind, Square};
use thiserror::Error;

/// Why a move was rejected.
///
/// [`Game::apply_move`](crate::Game::apply_move) collapses all of these
/// into `false`; [`Game::try_apply_move`](crate::Game::try_apply_move)
/// reports which one applied.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the source square belongs to the other player.
    #[error("piece on {square} belongs to {owner}, not the player to move")]
    NotCurrentPlayersPiece { square: Square, owner: Color },
    /// The destination holds a piece of the mover's own color.
    #[error("{0} is occupied by the mover's own piece")]
    OwnPieceAtDestination(Square),
    /// The piece cannot reach the destination (wrong shape or blocked path).
    #[error("piece on {from} cannot reach {to}")]
    Unreachable { from: Square, to: Square },
    /// The move would leave the mover's king attacked.
    #[error("move would leave the king in check")]
    WouldExposeCheck,
    /// A pawn may only promote to a knight, bishop, rook or queen.
    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),
}

/// Errors raised when building a game from a custom position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error("{0} has no king")]
    MissingKing(Color),
    #[error("{0} has more than one king")]
    TooManyKings(Color),
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),
}
