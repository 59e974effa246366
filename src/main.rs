//! Bowling simulator CLI.
//!
//! Bowls one or more games for 2-4 players and prints each bowler's
//! score sheet, or the resolved cards as JSON.

use clap::Parser;
use rust_bowling::core::{GameConfig, GameRng, RollPolicy};
use rust_bowling::game::play_game;
use rust_bowling::scoring::{ScoreCard, ScoreSheet};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rust-bowling")]
#[command(about = "Simulate ten-pin bowling games and print the score sheets")]
struct Args {
    /// Number of bowlers (2-4)
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=4))]
    players: u8,

    /// Bowl a perfect game: every ball is a strike
    #[arg(long)]
    perfect: bool,

    /// Session seed (for deterministic games); random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to bowl back to back
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Print resolved cards as JSON instead of score sheets
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct GameReport<'a> {
    game: u32,
    seed: u64,
    cards: &'a [ScoreCard],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default; RUST_LOG overrides the flag
    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let policy = if args.perfect {
        RollPolicy::Perfect
    } else {
        RollPolicy::Random
    };
    let session_seed = args.seed.unwrap_or_else(rand::random);
    let mut session = GameRng::new(session_seed);
    info!(session_seed, players = args.players, games = args.games, "starting session");

    for game in 1..=args.games {
        let seed = session.fork().seed();
        let config = GameConfig::new(usize::from(args.players))?
            .with_seed(seed)
            .with_policy(policy);
        let cards = play_game(&config)?;

        if args.json {
            let report = GameReport {
                game,
                seed,
                cards: &cards,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            if args.games > 1 {
                println!("Game {game} (seed {seed})\n");
            }
            println!("{}", ScoreSheet::new(&cards));
        }
    }

    Ok(())
}
