//! Parsing of moves typed at the terminal.

use chess_core::{Move, PeerMove, WireError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no move entered")]
    Empty,
    #[error("cannot read '{0}' as a move; try e2e4, e7e8q or 6 4 4 4")]
    Unrecognized(String),
    #[error(transparent)]
    OffBoard(#[from] WireError),
}

/// What the person at the keyboard asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Resign,
}

/// Reads one line of input.
///
/// Accepts UCI notation (`e2e4`, `e7e8n`), four grid coordinates
/// (`fromRow fromCol toRow toCol`, row 0 being Black's back rank), or
/// `resign` / `quit`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [] => Err(InputError::Empty),
        ["resign"] | ["quit"] => Ok(Command::Resign),
        [uci] => Move::from_uci(&uci.to_ascii_lowercase())
            .map(Command::Move)
            .ok_or_else(|| InputError::Unrecognized(line.to_string())),
        [from_row, from_col, to_row, to_col] => {
            let coord = |s: &str| {
                s.parse::<i32>()
                    .map_err(|_| InputError::Unrecognized(line.to_string()))
            };
            let peer = PeerMove {
                from_row: coord(*from_row)?,
                from_col: coord(*from_col)?,
                to_row: coord(*to_row)?,
                to_col: coord(*to_col)?,
            };
            Ok(Command::Move(peer.to_move()?))
        }
        _ => Err(InputError::Unrecognized(line.to_string())),
    }
}
