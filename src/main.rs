#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{
    check_fleet, init_logging, print_board, Board, Coord, Perspective, ShipSpan, BOARD_SIZE,
};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Legal standard fleet used when no layout file is given.
#[cfg(feature = "std")]
const DEFAULT_LAYOUT: [ShipSpan; 10] = [
    ShipSpan::new((0, 0), (0, 3)),
    ShipSpan::new((2, 0), (2, 2)),
    ShipSpan::new((0, 5), (0, 7)),
    ShipSpan::new((4, 0), (5, 0)),
    ShipSpan::new((2, 4), (2, 5)),
    ShipSpan::new((0, 9), (1, 9)),
    ShipSpan::new((5, 5), (5, 5)),
    ShipSpan::new((7, 7), (7, 7)),
    ShipSpan::new((9, 0), (9, 0)),
    ShipSpan::new((9, 9), (9, 9)),
];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Check a fleet layout against the standard fleet rules.
    Validate {
        #[arg(long, help = "JSON file with [{\"start\":[r,c],\"end\":[r,c]}, ...]")]
        layout: Option<PathBuf>,
    },
    /// Place a fleet and fire a sequence of shots at it.
    Play {
        #[arg(long, help = "JSON file with [{\"start\":[r,c],\"end\":[r,c]}, ...]")]
        layout: Option<PathBuf>,
        #[arg(long, help = "Place the layout even if it breaks the fleet rules")]
        unchecked: bool,
        #[arg(long = "fire", value_parser = parse_cell, help = "Target cell as ROW,COL (repeatable)")]
        shots: Vec<Coord>,
        #[arg(long, default_value_t = 0, help = "Number of random shots fired after --fire")]
        random_shots: usize,
        #[arg(long, help = "Fix RNG seed for reproducible random shots (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Hide unhit ships in the final board")]
        opponent_view: bool,
    },
}

#[cfg(feature = "std")]
fn parse_cell(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = r.trim().parse::<usize>().map_err(|e| format!("bad row {:?}: {}", r, e))?;
    let col = c.trim().parse::<usize>().map_err(|e| format!("bad column {:?}: {}", c, e))?;
    Ok((row, col))
}

#[cfg(feature = "std")]
fn load_layout(path: Option<PathBuf>) -> anyhow::Result<Vec<ShipSpan>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading layout {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing layout {}", path.display()))
        }
        None => Ok(DEFAULT_LAYOUT.to_vec()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { layout } => {
            let spans = load_layout(layout)?;
            check_fleet(&spans)?;
            println!("fleet is valid");
        }
        Commands::Play {
            layout,
            unchecked,
            shots,
            random_shots,
            seed,
            opponent_view,
        } => {
            let spans = load_layout(layout)?;
            let mut board = if unchecked {
                Board::new_unvalidated(&spans)?
            } else {
                Board::new(&spans)?
            };

            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let size = BOARD_SIZE as usize;
            let random =
                (0..random_shots).map(|_| (rng.random_range(0..size), rng.random_range(0..size)));
            let targets: Vec<Coord> = shots.into_iter().chain(random).collect();

            for (row, col) in targets {
                let outcome = board.fire(row, col)?;
                let line = json!({ "row": row, "col": col, "outcome": outcome });
                println!("{}", serde_json::to_string(&line)?);
            }

            let summary = json!({
                "ships_afloat": board.ships_afloat(),
                "all_sunk": board.all_sunk(),
            });
            println!("{}", serde_json::to_string(&summary)?);

            let perspective = if opponent_view {
                Perspective::Opponent
            } else {
                Perspective::Owner
            };
            print_board(&board, perspective);
        }
    }
    Ok(())
}
