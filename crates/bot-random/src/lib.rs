//! Random move bot.
//!
//! Picks uniformly among the legal moves of its side, restricted to captures
//! whenever at least one capture is available. It only talks to the engine
//! through [`Game`]'s public interface, so it can stand in for any player.

use chess_core::{Color, Move};
use chess_engine::Game;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Chooses a move for `color`, or `None` when it is not `color`'s turn or
/// no legal move exists.
pub fn choose_move<R: Rng + ?Sized>(game: &Game, color: Color, rng: &mut R) -> Option<Move> {
    if game.is_game_over() || game.current_player() != color {
        return None;
    }

    let moves = game.all_legal_moves();
    let captures: Vec<Move> = moves
        .iter()
        .copied()
        .filter(|m| {
            game.piece_at(m.to)
                .is_some_and(|target| target.color != color)
        })
        .collect();

    let pool = if captures.is_empty() { &moves } else { &captures };
    pool.choose(rng).copied()
}

/// A seeded random player bound to one color.
#[derive(Debug, Clone)]
pub struct RandomBot {
    color: Color,
    rng: StdRng,
}

impl RandomBot {
    /// Creates a bot; `seed` makes its choices reproducible.
    pub fn new(color: Color, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { color, rng }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn choose_move(&mut self, game: &Game) -> Option<Move> {
        let choice = choose_move(game, self.color, &mut self.rng);
        if let Some(m) = choice {
            debug!(color = %self.color, mv = %m, "bot chose move");
        }
        choice
    }
}
