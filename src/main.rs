mod tui;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use eight_puzzle::puzzle::CELLS;
use eight_puzzle::{apply_move, best_move, is_solvable, shuffled_with_rng, Config, Solver, State};

#[derive(Parser)]
#[command(name = "eight-puzzle", about = "Play and solve the 3x3 sliding-tile puzzle")]
struct Cli {
    /// JSON file with settings; flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    shuffle_moves: Option<usize>,
    #[arg(long, global = true)]
    max_iterations: Option<usize>,
    #[arg(long, global = true)]
    autoplay_delay_ms: Option<u64>,
    /// Seed for reproducible shuffles
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Interactive game in the terminal
    Play,
    /// Print an optimal solution, step by step
    Solve {
        /// Row-major tiles with 0 for the gap, e.g. 1,2,3,4,5,6,7,0,8
        #[arg(long)]
        board: Option<Board>,
    },
    /// Print the greedy next move for a board
    Hint {
        #[arg(long)]
        board: Board,
    },
}

#[derive(Clone)]
struct Board(State);

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(',')
            .map(|t| t.trim().parse::<u8>().map_err(|e| format!("bad tile {:?}: {}", t, e)))
            .collect::<Result<Vec<_>, _>>()?;
        let cells: [u8; CELLS] = tiles
            .try_into()
            .map_err(|v: Vec<u8>| format!("expected {} tiles, got {}", CELLS, v.len()))?;
        State::from_cells(cells).map(Board).map_err(|e| e.to_string())
    }
}

impl Cli {
    fn settings(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(n) = self.shuffle_moves {
            config.shuffle_moves = n;
        }
        if let Some(n) = self.max_iterations {
            config.max_iterations = n;
        }
        if let Some(ms) = self.autoplay_delay_ms {
            config.autoplay_delay_ms = ms;
        }
        Ok(config)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Cmd::Play);

    // Raw-mode play owns the screen, so keep the default filter quiet there.
    let default_filter = match &command {
        Cmd::Play => "warn",
        _ => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_micros()
        .init();

    let config = cli.settings()?;
    let mut rng = cli.rng();

    match command {
        Cmd::Play => tui::run(&config, &mut rng),
        Cmd::Solve { board } => {
            let start = match board {
                Some(Board(state)) => state,
                None => shuffled_with_rng(config.shuffle_moves, &mut rng),
            };
            run_solve(&config, start)
        }
        Cmd::Hint { board: Board(state) } => {
            match best_move(&state) {
                Some(mv) => println!("Move tile {} at {}", state.tile_at(mv.row, mv.col), mv),
                None => println!("No move available"),
            }
            Ok(())
        }
    }
}

fn run_solve(config: &Config, start: State) -> Result<()> {
    println!("Puzzle:\n{}", start);
    if !is_solvable(&start) {
        bail!("puzzle is not solvable");
    }

    let solution = Solver::new(config.search_limits())
        .solve(&start)
        .context("solver did not find a path")?;
    info!("search took {} iterations", solution.iterations);
    println!("Found optimal solution with {} moves", solution.len());

    let mut current = start;
    for mv in solution.moves {
        let tile = current.tile_at(mv.row, mv.col);
        current = apply_move(&current, mv)?;
        println!("Move tile {} at {}\n{}", tile, mv, current);
    }

    Ok(())
}
