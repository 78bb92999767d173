use anyhow::{Context, Result};
use chess_core::Color;
use chess_play::config::PlayConfig;
use chess_play::game_runner::{BotPlayer, GameRecord, GameRunner, HumanPlayer, MatchResult};
use chess_play::render::render;
use chess_play::report::{write_report, ScoreReport};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Play chess against a random-move bot in the terminal")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the bot
    Play {
        /// The color you play
        #[arg(long, value_enum, default_value_t = Side::White)]
        color: Side,
        /// Seed for the bot's choices
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let two bots play each other
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: u32,
        /// Seed for the first game; later games use the following seeds
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(PlayConfig::default_path);
    let config = PlayConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    match cli.command {
        Commands::Play { color, seed } => play(&config, color.into(), seed.or(config.seed)),
        Commands::Selfplay { games, seed } => selfplay(&config, games, seed.or(config.seed)),
    }
}

fn play(config: &PlayConfig, human: Color, seed: Option<u64>) -> Result<()> {
    let person = Box::new(HumanPlayer::new(
        config.player_id.clone(),
        std::io::stdin().lock(),
        std::io::stdout(),
    ));
    let bot = Box::new(BotPlayer::new(human.opposite(), seed));
    let mut runner = match human {
        Color::White => GameRunner::new(person, bot, config.max_plies),
        Color::Black => GameRunner::new(bot, person, config.max_plies),
    };

    let record = runner.play_game()?;
    println!("{}", render(&record.game));
    println!("{:?} by {:?}", record.result, record.termination);
    save(config, &record, human);
    Ok(())
}

fn selfplay(config: &PlayConfig, games: u32, seed: Option<u64>) -> Result<()> {
    let mut tally = [0u32; 3];
    for i in 0..games {
        let seeds = seed.map(|s| s.wrapping_add(2 * u64::from(i)));
        let mut runner = GameRunner::new(
            Box::new(BotPlayer::new(Color::White, seeds)),
            Box::new(BotPlayer::new(Color::Black, seeds.map(|s| s.wrapping_add(1)))),
            config.max_plies,
        );
        let record = runner.play_game()?;
        match record.result {
            MatchResult::WhiteWins => tally[0] += 1,
            MatchResult::BlackWins => tally[1] += 1,
            MatchResult::Draw => tally[2] += 1,
        }
        println!(
            "Game {}: {:?} by {:?} ({} plies)",
            i + 1,
            record.result,
            record.termination,
            record.moves.len()
        );
        save(config, &record, Color::White);
    }
    println!(
        "White {} / Black {} / Draws {}",
        tally[0], tally[1], tally[2]
    );
    Ok(())
}

/// Writes the report, logging a warning if it cannot be saved.
fn save(config: &PlayConfig, record: &GameRecord, perspective: Color) {
    let score = ScoreReport::new(&config.player_id, perspective, record);
    match write_report(&config.report_dir, record, &score) {
        Ok(path) => println!("Report saved to {}", path.display()),
        Err(e) => warn!(dir = %config.report_dir.display(), error = %e, "failed to write report"),
    }
}
