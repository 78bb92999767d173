//! Terminal front end for the chess engine.
//!
//! - [`config`] - `play.toml` loading
//! - [`input`] - parsing moves typed at the terminal
//! - [`game_runner`] - the game loop and the [`game_runner::Player`] seats
//! - [`render`] - text board rendering
//! - [`report`] - JSON game reports and score records

pub mod config;
pub mod game_runner;
pub mod input;
pub mod render;
pub mod report;
