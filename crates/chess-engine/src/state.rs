//! Game outcome and state snapshot types.

use chess_core::Color;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White delivered checkmate.
    WhiteWins,
    /// Black delivered checkmate.
    BlackWins,
    /// Stalemate: the player to move has no legal move and is not in check.
    Draw,
}

impl GameResult {
    /// Returns the winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw => None,
        }
    }

    /// Returns the human-readable label shown when the game ends.
    pub const fn label(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "White wins!",
            GameResult::BlackWins => "Black wins!",
            GameResult::Draw => "Draw!",
        }
    }
}

/// Turn and terminal flags of a game at one moment.
///
/// `in_checkmate` implies `in_check` and `game_over`; `is_draw` implies
/// `game_over` and no winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub current_player: Color,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub in_check: bool,
    pub in_checkmate: bool,
    pub is_draw: bool,
}

impl GameState {
    /// State of a fresh game: the given player to move, nothing terminal.
    pub const fn new(current_player: Color) -> Self {
        GameState {
            current_player,
            game_over: false,
            winner: None,
            in_check: false,
            in_checkmate: false,
            is_draw: false,
        }
    }

    /// Returns the result if the game has ended.
    pub const fn result(&self) -> Option<GameResult> {
        if self.in_checkmate {
            match self.winner {
                Some(Color::White) => Some(GameResult::WhiteWins),
                Some(Color::Black) => Some(GameResult::BlackWins),
                None => None,
            }
        } else if self.is_draw {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    /// Returns "Check!", "White wins!", "Black wins!", "Draw!" or "".
    pub const fn label(&self) -> &'static str {
        match self.result() {
            Some(result) => result.label(),
            None if self.in_check => "Check!",
            None => "",
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Color::White)
    }
}
