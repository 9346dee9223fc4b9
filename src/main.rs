//! Brickfall entry point
//!
//! Headless runner: drives the simulation at a fixed tick with the bot on the
//! paddle, feeds completed levels to the leaderboard and prints a summary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use brickfall::highscores::format_time;
use brickfall::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use brickfall::{HighScores, Settings};

#[derive(Parser, Debug)]
#[command(name = "brickfall", about = "Run a bot-played Brickfall session")]
struct Args {
    /// Run seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Stop after this many ticks
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u64,
    /// Settings file (JSON); defaults are used if missing
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Leaderboard file (JSON)
    #[arg(long, default_value = "brickfall-scores.json")]
    scores: PathBuf,
    /// Player name recorded on the leaderboard
    #[arg(long)]
    player: Option<String>,
    /// Print the final frame snapshot as JSON
    #[arg(long)]
    dump_snapshot: bool,
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Brickfall (headless) starting...");

    let mut settings = match &args.settings {
        Some(path) => Settings::try_load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(player) = &args.player {
        settings.player_name = player.clone();
    }
    settings.bot_mode = true;

    let mut state = GameState::new(&settings, args.seed).context("building game session")?;
    let mut scores = HighScores::load(&args.scores);
    let input = TickInput::default();

    let mut ticks = 0;
    while state.phase != GamePhase::GameOver && ticks < args.max_ticks {
        tick(&mut state, &input);
        ticks += 1;

        for event in state.drain_events() {
            if let GameEvent::LevelComplete {
                level,
                elapsed_ticks,
            } = event
            {
                let secs = elapsed_ticks as f64 / brickfall::consts::TICKS_PER_SEC as f64;
                let rank =
                    scores.add_record(&settings.player_name, level as u32 + 1, secs, now_ms());
                println!(
                    "Level {} cleared in {}{}",
                    level + 1,
                    format_time(secs),
                    rank.map(|r| format!(" (leaderboard #{r})")).unwrap_or_default()
                );
            }
        }
    }

    println!(
        "Finished after {} ticks: phase={:?}, level={}/{}, bricks broken={}, balls left={}",
        ticks,
        state.phase,
        state.level_index + 1,
        state.level_count(),
        state.score,
        state.balls_left
    );
    if state.cleared_all {
        println!("All walls destroyed!");
    }

    scores
        .save(&args.scores)
        .with_context(|| format!("saving leaderboard to {}", args.scores.display()))?;

    if args.dump_snapshot {
        let json = serde_json::to_string_pretty(&state.snapshot())?;
        println!("{json}");
    }
    Ok(())
}
