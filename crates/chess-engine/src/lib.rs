//! Chess rules engine over an 8×8 grid.
//!
//! This crate provides:
//! - [`Board`] - the grid of optional pieces, row 0 being Black's back rank
//! - [`Game`] - the board engine: turn tracking, legality, move application,
//!   check / checkmate / stalemate detection
//! - [`movegen`] - per-piece pseudo-move generation and attack detection
//!
//! Castling, en passant and the repetition and move-count draw rules are
//! not part of these rules.
//!
//! # Example
//!
//! ```
//! use chess_core::{Move, Square};
//! use chess_engine::Game;
//!
//! let mut game = Game::new();
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//!
//! assert!(game.legal_moves(e2).contains(&e4));
//! assert!(game.apply_move(Move::new(e2, e4)));
//! println!("{}", game.board());
//! ```

mod board;
mod error;
mod game;
pub mod movegen;
mod state;

pub use board::Board;
pub use error::{MoveError, PositionError};
pub use game::Game;
pub use movegen::{generate_pseudo_moves, is_king_attacked, is_square_attacked};
pub use state::{GameResult, GameState};
