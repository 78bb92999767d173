//! Game loop between two players.
//!
//! [`GameRunner`] owns one [`Player`] per color and asks whichever is to
//! move for a move until the engine reports the game over, a player
//! resigns, or the ply limit is reached.

use bot_random::RandomBot;
use chess_core::{Color, Move, PeerMove, PieceKind};
use chess_engine::{Game, GameResult, MoveError};
use serde::Serialize;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

use crate::input::{parse_command, Command};
use crate::render::render;

/// Errors that end a game early.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// A player that cannot correct itself submitted an illegal move.
    #[error("{player} played illegal move {mv}: {source}")]
    IllegalMove {
        player: String,
        mv: Move,
        source: MoveError,
    },
}

/// Whether a seat is taken by a person or by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Robot,
}

/// One side of a game.
pub trait Player {
    fn name(&self) -> &str;

    fn kind(&self) -> PlayerKind;

    /// Returns the next move, or `None` to resign.
    fn next_move(&mut self, game: &Game) -> Result<Option<Move>, RunnerError>;

    /// Called when the engine refuses a move. Players that cannot retry
    /// turn the refusal into an error.
    fn move_rejected(&mut self, mv: Move, reason: MoveError) -> Result<(), RunnerError> {
        Err(RunnerError::IllegalMove {
            player: self.name().to_string(),
            mv,
            source: reason,
        })
    }

    /// Called after the opponent's move has been applied.
    fn opponent_moved(&mut self, _game: &Game, _mv: Move) -> Result<(), RunnerError> {
        Ok(())
    }
}

/// A person at a terminal. Moves are read line by line from `input`;
/// the board, prompts and complaints go to `output`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn next_move(&mut self, game: &Game) -> Result<Option<Move>, RunnerError> {
        writeln!(self.output, "{}", render(game))?;
        loop {
            write!(self.output, "{} to move> ", game.current_player())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // End of input counts as resigning
                return Ok(None);
            }
            match parse_command(&line) {
                Ok(Command::Move(mv)) => return Ok(Some(mv)),
                Ok(Command::Resign) => return Ok(None),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn move_rejected(&mut self, mv: Move, reason: MoveError) -> Result<(), RunnerError> {
        writeln!(self.output, "Illegal move {}: {}", mv, reason)?;
        Ok(())
    }

    fn opponent_moved(&mut self, _game: &Game, mv: Move) -> Result<(), RunnerError> {
        writeln!(self.output, "Opponent played {}", mv)?;
        Ok(())
    }
}

/// The computer opponent.
pub struct BotPlayer {
    name: String,
    bot: RandomBot,
}

impl BotPlayer {
    pub fn new(color: Color, seed: Option<u64>) -> Self {
        Self {
            name: format!("random-bot ({})", color),
            bot: RandomBot::new(color, seed),
        }
    }
}

impl Player for BotPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Robot
    }

    fn next_move(&mut self, game: &Game) -> Result<Option<Move>, RunnerError> {
        Ok(self.bot.choose_move(game))
    }
}

/// A single applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// The move in UCI notation, including the promotion actually made.
    pub uci: String,
    /// The same move as sent to a peer device.
    pub peer: PeerMove,
}

impl MoveRecord {
    pub fn new(mv: Move) -> Self {
        Self {
            uci: mv.to_uci(),
            peer: PeerMove::from_move(mv),
        }
    }
}

/// The outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl MatchResult {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchResult::WhiteWins => Some(Color::White),
            MatchResult::BlackWins => Some(Color::Black),
            MatchResult::Draw => None,
        }
    }

    fn won_by(color: Color) -> Self {
        match color {
            Color::White => MatchResult::WhiteWins,
            Color::Black => MatchResult::BlackWins,
        }
    }
}

/// How a game came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    PlyLimit,
    Resignation,
}

/// Everything known about a finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<MoveRecord>,
    pub result: MatchResult,
    pub termination: Termination,
    pub white_name: String,
    pub black_name: String,
    pub white_kind: PlayerKind,
    pub black_kind: PlayerKind,
    /// The final position.
    pub game: Game,
}

impl GameRecord {
    pub fn kind_of(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white_kind,
            Color::Black => self.black_kind,
        }
    }
}

/// Runs games between two players.
pub struct GameRunner {
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    max_plies: usize,
}

impl GameRunner {
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>, max_plies: usize) -> Self {
        Self {
            white,
            black,
            max_plies,
        }
    }

    /// Plays one game from the standard starting position.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal I/O fails or a bot plays an illegal move.
    pub fn play_game(&mut self) -> Result<GameRecord, RunnerError> {
        let mut game = Game::new();
        let mut moves: Vec<MoveRecord> = Vec::new();

        let termination = loop {
            if game.is_game_over() {
                break if game.is_checkmate() {
                    Termination::Checkmate
                } else {
                    Termination::Stalemate
                };
            }
            // Safety limit to prevent endless games
            if moves.len() >= self.max_plies {
                break Termination::PlyLimit;
            }

            let color = game.current_player();
            let (player, opponent) = match color {
                Color::White => (&mut self.white, &mut self.black),
                Color::Black => (&mut self.black, &mut self.white),
            };

            let Some(mv) = player.next_move(&game)? else {
                info!(%color, player = player.name(), "player resigned");
                break Termination::Resignation;
            };

            let mover = game.piece_at(mv.from);
            match game.try_apply_move(mv) {
                Ok(()) => {
                    let applied = as_applied(mv, mover.map(|p| p.kind), &game);
                    debug!(%color, mv = %applied, "recorded move");
                    moves.push(MoveRecord::new(applied));
                    opponent.opponent_moved(&game, applied)?;
                }
                Err(reason) => player.move_rejected(mv, reason)?,
            }
        };

        let result = match termination {
            Termination::Resignation => MatchResult::won_by(game.current_player().opposite()),
            _ => match game.result() {
                Some(GameResult::WhiteWins) => MatchResult::WhiteWins,
                Some(GameResult::BlackWins) => MatchResult::BlackWins,
                Some(GameResult::Draw) | None => MatchResult::Draw,
            },
        };
        info!(?result, ?termination, plies = moves.len(), "game finished");

        Ok(GameRecord {
            moves,
            result,
            termination,
            white_name: self.white.name().to_string(),
            black_name: self.black.name().to_string(),
            white_kind: self.white.kind(),
            black_kind: self.black.kind(),
            game,
        })
    }
}

/// The move as the engine carried it out: a promotion letter is kept only
/// for a pawn that actually promoted, and names the piece it became.
fn as_applied(mv: Move, mover: Option<PieceKind>, after: &Game) -> Move {
    let promoted = match (mover, after.piece_at(mv.to)) {
        (Some(PieceKind::Pawn), Some(placed)) if placed.kind != PieceKind::Pawn => {
            Some(placed.kind)
        }
        _ => None,
    };
    Move {
        promotion: promoted,
        ..mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Square;
    use std::io::Cursor;

    fn human(script: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new("tester", Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    /// Hands out a fixed list of moves, then resigns.
    struct Scripted {
        moves: Vec<Move>,
    }

    impl Player for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn kind(&self) -> PlayerKind {
            PlayerKind::Robot
        }

        fn next_move(&mut self, _game: &Game) -> Result<Option<Move>, RunnerError> {
            Ok(if self.moves.is_empty() {
                None
            } else {
                Some(self.moves.remove(0))
            })
        }
    }

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn fools_mate_from_typed_moves() {
        let mut runner = GameRunner::new(
            Box::new(human("f2f3\ng2g4\n")),
            Box::new(human("e7e5\n0 3 4 7\n")),
            500,
        );
        let record = runner.play_game().unwrap();

        assert_eq!(record.result, MatchResult::BlackWins);
        assert_eq!(record.termination, Termination::Checkmate);
        let uci: Vec<&str> = record.moves.iter().map(|m| m.uci.as_str()).collect();
        assert_eq!(uci, ["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(
            record.moves[0].peer,
            PeerMove {
                from_row: 6,
                from_col: 5,
                to_row: 5,
                to_col: 5
            }
        );
        assert!(record.game.is_checkmate());
    }

    #[test]
    fn human_is_reprompted_after_bad_input() {
        let mut white = human("e2e5\nhello\n6 4 4 4\n");
        let mut game = Game::new();

        let first = white.next_move(&game).unwrap().unwrap();
        let reason = game.try_apply_move(first).unwrap_err();
        white.move_rejected(first, reason).unwrap();

        let second = white.next_move(&game).unwrap().unwrap();
        assert_eq!(second, Move::new(sq(6, 4), sq(4, 4)));
        assert!(game.apply_move(second));

        // Input exhausted
        assert_eq!(white.next_move(&game).unwrap(), None);

        let shown = String::from_utf8(white.into_output()).unwrap();
        assert!(shown.contains("Illegal move e2e5"));
        assert!(shown.contains("cannot read 'hello'"));
    }

    #[test]
    fn resignation_hands_the_win_to_the_opponent() {
        let mut runner = GameRunner::new(
            Box::new(human("e2e4\n")),
            Box::new(human("resign\n")),
            500,
        );
        let record = runner.play_game().unwrap();
        assert_eq!(record.termination, Termination::Resignation);
        assert_eq!(record.result, MatchResult::WhiteWins);
        assert_eq!(record.moves.len(), 1);
    }

    #[test]
    fn illegal_bot_move_is_an_error() {
        let mut runner = GameRunner::new(
            Box::new(Scripted {
                moves: vec![Move::new(sq(6, 4), sq(3, 4))],
            }),
            Box::new(Scripted { moves: vec![] }),
            500,
        );
        assert!(matches!(
            runner.play_game(),
            Err(RunnerError::IllegalMove {
                source: MoveError::Unreachable { .. },
                ..
            })
        ));
    }

    #[test]
    fn ply_limit_ends_in_a_draw() {
        let mut runner = GameRunner::new(
            Box::new(BotPlayer::new(Color::White, Some(1))),
            Box::new(BotPlayer::new(Color::Black, Some(2))),
            2,
        );
        let record = runner.play_game().unwrap();
        assert_eq!(record.termination, Termination::PlyLimit);
        assert_eq!(record.result, MatchResult::Draw);
        assert_eq!(record.moves.len(), 2);
        assert_eq!(record.kind_of(Color::Black), PlayerKind::Robot);
    }

    #[test]
    fn bot_game_finishes() {
        let mut runner = GameRunner::new(
            Box::new(BotPlayer::new(Color::White, Some(11))),
            Box::new(BotPlayer::new(Color::Black, Some(12))),
            300,
        );
        let record = runner.play_game().unwrap();
        assert!(record.moves.len() <= 300);
        match record.termination {
            Termination::Checkmate => assert!(record.result.winner().is_some()),
            Termination::Stalemate | Termination::PlyLimit => {
                assert_eq!(record.result, MatchResult::Draw)
            }
            Termination::Resignation => panic!("bots only resign when out of moves"),
        }
    }

    #[test]
    fn promotion_is_recorded_as_played() {
        let game = Game::from_fen("4k3/1P6/8/8/8/8/8/4K3 w").unwrap();
        let mut after = game.clone();
        let mv = Move::new(sq(1, 1), sq(0, 1));
        assert!(after.apply_move(mv));
        assert_eq!(as_applied(mv, Some(PieceKind::Pawn), &after).to_uci(), "b7b8q");

        // A promotion letter on an ordinary move is dropped
        let mut game = Game::new();
        let mv = Move::with_promotion(sq(6, 4), sq(4, 4), PieceKind::Rook);
        assert!(game.apply_move(mv));
        assert_eq!(as_applied(mv, Some(PieceKind::Pawn), &game).to_uci(), "e2e4");
    }
}
