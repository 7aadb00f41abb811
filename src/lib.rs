//! Search engine for the 3x3 sliding-tile puzzle: parity-based solvability,
//! a greedy one-move hint, and an A* solver that returns a shortest path.

pub mod config;
pub mod error;
pub mod game;
pub mod hint;
pub mod puzzle;
pub mod shuffle;
pub mod solver;

pub use config::Config;
pub use error::{ConfigError, PuzzleError, SolveError};
pub use game::Game;
pub use hint::best_move;
pub use puzzle::{
    apply_move, heuristic, is_solvable, valid_moves, Direction, Move, State, GOAL, GRID_SIZE,
};
pub use shuffle::{new_shuffled_solvable_state, shuffled_with_rng};
pub use solver::{solve, SearchLimits, Solution, Solver};
