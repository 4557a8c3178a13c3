//! Headless Pong runner
//!
//! Plays a few games with scripted paddles and records ranked results in a
//! local leaderboard directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arcade::{side_label, Autopilot, LocalClock, LogNotifier, Session};
use clap::Parser;
use game_core::{Config, GameRng, Match, MatchPhase, Side};
use scoreboard::{FileStore, ScoreStore};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "arcade", version, about = "Play Pong headless and keep a leaderboard")]
struct Args {
    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(long, default_value_t = 3)]
    games: u32,

    /// Directory holding the leaderboard
    #[arg(long, default_value = "scores")]
    scores_dir: PathBuf,

    /// Directory mirroring the leaderboard; restored from at startup
    #[arg(long)]
    backup_dir: Option<PathBuf>,

    /// JSON file overriding game tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name recorded with ranked scores
    #[arg(long, default_value = "CPU")]
    name: String,

    /// Script both paddles; nothing is ranked
    #[arg(long)]
    two_player: bool,

    /// Abandon a game that runs longer than this
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u64,
}

fn load_config(path: Option<&Path>, two_player: bool) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None if two_player => Config::new(),
        None => Config::vs_opponent(),
    };
    if two_player {
        config.opponent = false;
    }
    Ok(config.validated())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref(), args.two_player)?;
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let mut pilots = vec![Autopilot::new(config.human_side(), 0.15)];
    if !config.opponent {
        pilots.push(Autopilot::new(config.opponent_side(), 0.15));
    }

    info!(
        games = args.games,
        opponent = config.opponent,
        win_score = config.win_score,
        "Starting arcade"
    );

    let store = ScoreStore::new(FileStore::new(&args.scores_dir));
    let mut session = Session::new(
        Match::new(config, rng),
        store,
        Box::new(LogNotifier),
        Box::new(LocalClock),
        args.name.as_str(),
    );
    if let Some(dir) = &args.backup_dir {
        info!("Leaderboard backup in {}", dir.display());
        session = session.with_backup(Box::new(FileStore::new(dir)));
    }

    for game_no in 1..=args.games {
        if !session.start() {
            warn!("Could not start game {game_no}");
            break;
        }

        let mut ticks = 0;
        while session.game().phase() == MatchPhase::Running && ticks < args.max_ticks {
            for pilot in &pilots {
                pilot.steer(session.game_mut());
            }
            session.tick();
            ticks += 1;
        }

        if session.game().phase() != MatchPhase::Ended {
            warn!("Game {game_no} abandoned after {ticks} ticks");
            session.game_mut().exit_match();
            continue;
        }

        let score = session.game().score();
        let wins = session.game().wins();
        println!(
            "Game {game_no}: {} {} - {} {} ({ticks} ticks, {:?})",
            side_label(Side::Top),
            score.top,
            score.bottom,
            side_label(Side::Bottom),
            session.last_submission(),
        );
        println!("  wins: {} - {}", wins.top, wins.bottom);
    }

    let rows = session.leaderboard();
    println!();
    if rows.is_empty() {
        println!("No scores yet.");
    } else {
        println!("{:<4} {:<10} {:>5}  DATE", "RANK", "NAME", "SCORE");
        for row in rows {
            println!("{:<4} {:<10} {:>5}  {}", row.rank, row.name, row.score, row.date);
        }
    }

    Ok(())
}
