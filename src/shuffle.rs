use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::puzzle::{apply_move, is_solvable, valid_moves, State, EMPTY, GOAL, GRID_SIZE};

/// Random walk of `random_move_count` legal moves from the goal, corrected so
/// the result is always solvable and never the goal itself.
pub fn new_shuffled_solvable_state(random_move_count: usize) -> State {
    shuffled_with_rng(random_move_count, &mut thread_rng())
}

pub fn shuffled_with_rng<R: Rng + ?Sized>(random_move_count: usize, rng: &mut R) -> State {
    let mut state = GOAL;

    for _ in 0..random_move_count {
        let moves = valid_moves(&state);
        if let Some(&mv) = moves.choose(rng) {
            if let Ok(next) = apply_move(&state, mv) {
                state = next;
            }
        }
    }

    if !is_solvable(&state) {
        warn!("shuffled board has odd parity, swapping two tiles");
        state = flip_parity(&state);
    }

    if state.is_goal() {
        debug!("shuffle landed on the goal, nudging one move away");
        if let Some(next) = valid_moves(&state)
            .first()
            .and_then(|&mv| apply_move(&state, mv).ok())
        {
            state = next;
        }
    }

    state
}

/// Swaps the first two non-empty cells in row-major order.
fn flip_parity(state: &State) -> State {
    let mut tiles = state
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != EMPTY)
        .map(|(ix, _)| (ix / GRID_SIZE, ix % GRID_SIZE));

    match (tiles.next(), tiles.next()) {
        (Some(a), Some(b)) => state.swap_cells(a, b),
        _ => *state,
    }
}
