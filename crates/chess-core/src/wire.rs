//! Peer move format.
//!
//! Two devices playing each other exchange one JSON object per move:
//!
//! ```json
//! {"fromRow":6,"fromCol":4,"toRow":4,"toCol":4}
//! ```
//!
//! The format has no promotion field. A promoting move received from a
//! peer therefore always promotes to a queen.

use crate::{Move, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when decoding a peer move.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed peer move: {0}")]
    Json(#[from] serde_json::Error),

    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
}

/// A move as carried between peers: four plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerMove {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
}

impl PeerMove {
    /// Captures the coordinates of a move. Any promotion choice is dropped.
    pub fn from_move(m: Move) -> Self {
        PeerMove {
            from_row: i32::from(m.from.row()),
            from_col: i32::from(m.from.col()),
            to_row: i32::from(m.to.row()),
            to_col: i32::from(m.to.col()),
        }
    }

    /// Converts back into a [`Move`], rejecting off-board coordinates.
    pub fn to_move(self) -> Result<Move, WireError> {
        let from = square(self.from_row, self.from_col)?;
        let to = square(self.to_row, self.to_col)?;
        Ok(Move::new(from, to))
    }

    /// Serializes the move to its JSON payload.
    pub fn encode(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a JSON payload received from a peer.
    pub fn decode(payload: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(payload)?)
    }
}

fn square(row: i32, col: i32) -> Result<Square, WireError> {
    Square::from_coords(row, col).ok_or(WireError::OutOfBounds { row, col })
}
