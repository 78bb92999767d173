//! The board engine: grid plus turn and terminal-state tracking.
//!
//! [`Game`] owns the only mutable board of a match. Every rule question
//! (pseudo-moves, legality, check, mate, stalemate) is answered here so
//! that renderers, bots and network handlers never duplicate rule logic.

use crate::movegen::{generate_pseudo_moves, is_king_attacked};
use crate::{Board, GameResult, GameState, MoveError, PositionError};
use chess_core::{Color, FenParser, Move, Piece, PieceKind, Square};
use tracing::{debug, info};

/// A chess game in progress.
///
/// The state changes only through a successful [`apply_move`](Game::apply_move)
/// (or [`try_apply_move`](Game::try_apply_move)). Rejected moves leave the
/// board, the turn and every flag exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            state: GameState::new(Color::White),
        }
    }

    /// Creates a game from a custom position.
    ///
    /// The position must hold exactly one king per color, and the side that
    /// just moved must not be left in check. Terminal state is evaluated
    /// straight away, so a position that is already mate or stalemate for
    /// `side_to_move` starts out finished.
    pub fn from_position(board: Board, side_to_move: Color) -> Result<Self, PositionError> {
        for color in Color::ALL {
            let kings = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(PositionError::MissingKing(color)),
                1 => {}
                _ => return Err(PositionError::TooManyKings(color)),
            }
        }
        // Otherwise the side to move could capture the king outright
        let waiting = side_to_move.opposite();
        if is_king_attacked(&board, waiting) {
            return Err(PositionError::OpponentInCheck(waiting));
        }

        let mut game = Game {
            board,
            state: GameState::new(side_to_move),
        };
        game.update_game_state();
        Ok(game)
    }

    /// Creates a game from FEN board text. White moves when the text has no
    /// active color.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let parsed = FenParser::parse(fen)?;
        let side_to_move = parsed.active_color.unwrap_or(Color::White);
        Self::from_position(Board::from_parsed(&parsed), side_to_move)
    }

    /// Returns the position as FEN board text: placement and active color.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {}",
            self.board.to_fen(),
            self.state.current_player.to_fen_char()
        )
    }

    /// Returns a copy of the current grid.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the current grid as nested rows, row 0 first.
    pub fn rows(&self) -> [[Option<Piece>; 8]; 8] {
        self.board.rows()
    }

    /// Returns the piece at the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Returns the winner after a checkmate.
    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    /// Returns true if the player to move is in check.
    pub fn is_check(&self) -> bool {
        self.state.in_check
    }

    pub fn is_checkmate(&self) -> bool {
        self.state.in_checkmate
    }

    pub fn is_draw(&self) -> bool {
        self.state.is_draw
    }

    /// Returns a snapshot of the turn and terminal flags.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Returns "Check!", "White wins!", "Black wins!", "Draw!" or "".
    pub fn state_label(&self) -> &'static str {
        self.state.label()
    }

    /// Returns the destinations the piece on `sq` reaches by its movement
    /// rule, ignoring check. Works for either color.
    pub fn generate_pseudo_moves(&self, sq: Square) -> Vec<Square> {
        generate_pseudo_moves(&self.board, sq)
    }

    /// Returns true if the current player may make this move.
    ///
    /// Does not consider whether the game is over; see
    /// [`try_apply_move`](Game::try_apply_move).
    pub fn is_legal(&self, m: Move) -> bool {
        self.check_move(m).is_ok()
    }

    /// Returns the legal destinations of the piece on `sq`.
    ///
    /// Empty unless `sq` holds a piece of the player to move.
    pub fn legal_moves(&self, sq: Square) -> Vec<Square> {
        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.state.current_player => self
                .generate_pseudo_moves(sq)
                .into_iter()
                .filter(|&to| self.is_legal(Move::new(sq, to)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Returns every legal move of the player to move, by source square in
    /// row-major order. Promotions carry no explicit piece (queen by default).
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces_of(self.state.current_player)
            .flat_map(|(from, _)| {
                self.legal_moves(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Returns true if the player to move has at least one legal move.
    pub fn has_legal_move(&self) -> bool {
        self.board
            .pieces_of(self.state.current_player)
            .any(|(from, _)| !self.legal_moves(from).is_empty())
    }

    /// Applies a move, returning false (and changing nothing) if the game
    /// is over or the move is illegal.
    pub fn apply_move(&mut self, m: Move) -> bool {
        self.try_apply_move(m).is_ok()
    }

    /// Applies a move, reporting why it was rejected.
    pub fn try_apply_move(&mut self, m: Move) -> Result<(), MoveError> {
        if self.state.game_over {
            debug!(mv = %m, "move rejected: game over");
            return Err(MoveError::GameAlreadyOver);
        }
        let piece = self.check_move(m).inspect_err(|err| {
            debug!(mv = %m, reason = %err, "move rejected");
        })?;

        let mover = piece.color;
        self.board = self.board.with_piece_moved(m.from, m.to);
        if piece.kind == PieceKind::Pawn && m.to.row() == mover.promotion_row() {
            let kind = m.promotion.unwrap_or(PieceKind::Queen);
            self.board.set(m.to, Some(Piece::new(kind, mover)));
            debug!(square = %m.to, promoted = %kind, "pawn promoted");
        }

        self.state.current_player = mover.opposite();
        self.update_game_state();
        debug!(mv = %m, player = %mover, "move applied");
        Ok(())
    }

    /// Checks a move for the player to move and returns the moving piece.
    fn check_move(&self, m: Move) -> Result<Piece, MoveError> {
        let us = self.state.current_player;
        let piece = self
            .board
            .piece_at(m.from)
            .ok_or(MoveError::EmptySquare(m.from))?;
        if piece.color != us {
            return Err(MoveError::NotCurrentPlayersPiece {
                square: m.from,
                owner: piece.color,
            });
        }
        if self.board.piece_at(m.to).is_some_and(|target| target.color == us) {
            return Err(MoveError::OwnPieceAtDestination(m.to));
        }
        if !generate_pseudo_moves(&self.board, m.from).contains(&m.to) {
            return Err(MoveError::Unreachable {
                from: m.from,
                to: m.to,
            });
        }
        if piece.kind == PieceKind::Pawn && m.to.row() == us.promotion_row() {
            if let Some(kind) = m.promotion.filter(|kind| !kind.is_promotion_target()) {
                return Err(MoveError::InvalidPromotion(kind));
            }
        }

        // Try the move on a copy; the live board is never touched
        let hypothetical = self.board.with_piece_moved(m.from, m.to);
        if is_king_attacked(&hypothetical, us) {
            return Err(MoveError::WouldExposeCheck);
        }
        Ok(piece)
    }

    /// Recomputes check, checkmate and stalemate for the player to move.
    fn update_game_state(&mut self) {
        let us = self.state.current_player;
        self.state.in_check = is_king_attacked(&self.board, us);

        if self.has_legal_move() {
            return;
        }
        self.state.game_over = true;
        if self.state.in_check {
            self.state.in_checkmate = true;
            self.state.winner = Some(us.opposite());
            info!(winner = %us.opposite(), "checkmate");
        } else {
            self.state.is_draw = true;
            info!(player = %us, "stalemate");
        }
    }
}
