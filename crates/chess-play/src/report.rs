//! JSON reports for finished games.
//!
//! Each game is written to `<report_dir>/<uuid>.json` together with the
//! score record a leaderboard service expects:
//!
//! ```json
//! {"playerId": "local-player", "gameType": "chess", "result": "win", "opponentType": "robot"}
//! ```

use chess_core::Color;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::game_runner::{GameRecord, MatchResult, MoveRecord, PlayerKind, Termination};

/// The game type reported for every score.
pub const GAME_TYPE: &str = "chess";

/// A game's result from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn for_color(result: MatchResult, color: Color) -> Self {
        match result.winner() {
            None => Outcome::Draw,
            Some(winner) if winner == color => Outcome::Win,
            Some(_) => Outcome::Loss,
        }
    }
}

/// Score submitted for the local player after a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub player_id: String,
    pub game_type: String,
    pub result: Outcome,
    pub opponent_type: PlayerKind,
}

impl ScoreReport {
    /// Scores `record` for the player who played `color`.
    pub fn new(player_id: &str, color: Color, record: &GameRecord) -> Self {
        Self {
            player_id: player_id.to_string(),
            game_type: GAME_TYPE.to_string(),
            result: Outcome::for_color(record.result, color),
            opponent_type: record.kind_of(color.opposite()),
        }
    }
}

#[derive(Serialize)]
struct GameJson<'a> {
    id: &'a str,
    white: &'a str,
    black: &'a str,
    /// "white", "black" or "draw".
    result: &'a str,
    termination: Termination,
    moves: &'a [MoveRecord],
    /// FEN of the final position, with the side to move.
    final_position: String,
    score: &'a ScoreReport,
    created_at: DateTime<Utc>,
}

/// Writes a finished game to a fresh file in `dir` and returns its path.
///
/// The directory is created if needed.
pub fn write_report(
    dir: &Path,
    record: &GameRecord,
    score: &ScoreReport,
) -> std::io::Result<PathBuf> {
    let id = Uuid::new_v4().to_string();
    let result = match record.result {
        MatchResult::WhiteWins => "white",
        MatchResult::BlackWins => "black",
        MatchResult::Draw => "draw",
    };

    let json = GameJson {
        id: &id,
        white: &record.white_name,
        black: &record.black_name,
        result,
        termination: record.termination,
        moves: &record.moves,
        final_position: record.game.to_fen(),
        score,
        created_at: Utc::now(),
    };

    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", id));
    let file = std::fs::File::create(&path)?;
    serde_json::to_writer_pretty(file, &json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Game;
    use serde_json::Value;

    fn finished(result: MatchResult) -> GameRecord {
        GameRecord {
            moves: vec![],
            result,
            termination: Termination::Checkmate,
            white_name: "alice".to_string(),
            black_name: "random-bot (Black)".to_string(),
            white_kind: PlayerKind::Human,
            black_kind: PlayerKind::Robot,
            game: Game::new(),
        }
    }

    #[test]
    fn outcome_from_each_side() {
        assert_eq!(Outcome::for_color(MatchResult::WhiteWins, Color::White), Outcome::Win);
        assert_eq!(Outcome::for_color(MatchResult::WhiteWins, Color::Black), Outcome::Loss);
        assert_eq!(Outcome::for_color(MatchResult::Draw, Color::Black), Outcome::Draw);
    }

    #[test]
    fn score_record_fields() {
        let score = ScoreReport::new("alice", Color::White, &finished(MatchResult::BlackWins));
        let value = serde_json::to_value(&score).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "playerId": "alice",
                "gameType": "chess",
                "result": "loss",
                "opponentType": "robot",
            })
        );

        let score = ScoreReport::new("bot", Color::Black, &finished(MatchResult::BlackWins));
        assert_eq!(score.result, Outcome::Win);
        assert_eq!(score.opponent_type, PlayerKind::Human);
    }

    #[test]
    fn report_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("games");
        let mut record = finished(MatchResult::Draw);
        record.termination = Termination::PlyLimit;
        record.moves.push(MoveRecord::new(chess_core::Move::from_uci("e2e4").unwrap()));
        let score = ScoreReport::new("alice", Color::White, &record);

        let path = write_report(&reports, &record, &score).unwrap();
        assert_eq!(path.parent(), Some(reports.as_path()));

        let content = std::fs::read_to_string(&path).unwrap();
        let written: Value = serde_json::from_str(&content).unwrap();
        let stem = path.file_stem().unwrap().to_str().unwrap();
        assert_eq!(written["id"], stem);
        assert_eq!(written["white"], "alice");
        assert_eq!(written["result"], "draw");
        assert_eq!(written["termination"], "ply_limit");
        assert_eq!(written["moves"][0]["uci"], "e2e4");
        assert_eq!(written["moves"][0]["peer"]["fromRow"], 6);
        assert_eq!(written["score"]["result"], "draw");
        assert_eq!(
            written["final_position"],
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
        );
        let created = written["created_at"].as_str().unwrap();
        assert!(created.parse::<DateTime<Utc>>().is_ok());
    }

    #[test]
    fn each_report_gets_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let record = finished(MatchResult::WhiteWins);
        let score = ScoreReport::new("alice", Color::White, &record);
        let first = write_report(dir.path(), &record, &score).unwrap();
        let second = write_report(dir.path(), &record, &score).unwrap();
        assert_ne!(first, second);
    }
}
