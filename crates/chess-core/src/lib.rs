//! Core types for chess.
//!
//! This crate provides the fundamental types used across the workspace:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (row 0 is Black's back rank)
//! - [`Move`] for move representation
//! - FEN-style board text parsing
//! - [`PeerMove`], the four-integer JSON format used between peers

mod color;
mod fen;
mod mov;
mod piece;
mod square;
mod wire;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
pub use wire::{PeerMove, WireError};
