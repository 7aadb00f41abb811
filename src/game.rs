//! Caller-owned play session: the live board plus the bookkeeping a front
//! end needs (move counter, current hint, queued auto-play moves).
//!
//! Nothing here knows about time. A front end calls [`Game::tick`] at
//! whatever pace it wants to show the solution.

use std::collections::VecDeque;

use log::info;
use rand::Rng;

use crate::error::{PuzzleError, SolveError};
use crate::hint::best_move;
use crate::puzzle::{apply_move, valid_moves, Move, State};
use crate::shuffle::shuffled_with_rng;
use crate::solver::Solver;

#[derive(Debug, Clone)]
pub struct Game {
    state: State,
    moves: usize,
    solved: bool,
    hint: Option<Move>,
    autoplay: VecDeque<Move>,
}

impl Game {
    pub fn new(state: State) -> Self {
        Self {
            state,
            moves: 0,
            solved: state.is_goal(),
            hint: None,
            autoplay: VecDeque::new(),
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(random_move_count: usize, rng: &mut R) -> Self {
        Self::new(shuffled_with_rng(random_move_count, rng))
    }

    /// Throws away the current session and starts over on a fresh shuffle.
    pub fn new_game<R: Rng + ?Sized>(&mut self, random_move_count: usize, rng: &mut R) {
        *self = Self::shuffled(random_move_count, rng);
        info!("new game:\n{}", self.state);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_autoplaying(&self) -> bool {
        !self.autoplay.is_empty()
    }

    pub fn hint_move(&self) -> Option<Move> {
        self.hint
    }

    pub fn remaining_autoplay(&self) -> usize {
        self.autoplay.len()
    }

    /// Tiles that may currently slide into the gap.
    pub fn movable_tiles(&self) -> Vec<Move> {
        valid_moves(&self.state)
    }

    /// A user move. The board is left untouched on error.
    pub fn click(&mut self, row: usize, col: usize) -> Result<(), PuzzleError> {
        if self.is_autoplaying() {
            return Err(PuzzleError::Busy);
        }
        self.advance(Move::new(row, col))
    }

    pub fn hint(&mut self) -> Option<Move> {
        if self.solved || self.is_autoplaying() {
            return None;
        }
        self.hint = best_move(&self.state);
        if let Some(mv) = self.hint {
            info!("hint: move tile at {}", mv);
        }
        self.hint
    }

    /// Solves once and queues the path for [`Game::tick`]. Returns the number
    /// of queued moves; a solved or already auto-playing game queues nothing.
    pub fn start_solve(&mut self, solver: &Solver) -> Result<usize, SolveError> {
        if self.solved || self.is_autoplaying() {
            return Ok(0);
        }

        let solution = solver.solve(&self.state)?;
        info!(
            "solution found with {} moves in {} iterations",
            solution.len(),
            solution.iterations
        );
        self.hint = None;
        self.autoplay = solution.moves.into();
        Ok(self.autoplay.len())
    }

    /// Plays the next queued move, if any.
    pub fn tick(&mut self) -> Option<Move> {
        let mv = self.autoplay.pop_front()?;
        match self.advance(mv) {
            Ok(()) => Some(mv),
            Err(_) => {
                // a queued path only goes stale if the board changed under it
                self.autoplay.clear();
                None
            }
        }
    }

    fn advance(&mut self, mv: Move) -> Result<(), PuzzleError> {
        self.state = apply_move(&self.state, mv)?;
        self.moves += 1;
        self.hint = None;
        self.solved = self.state.is_goal();
        if self.solved {
            info!("puzzle solved in {} moves", self.moves);
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(State::goal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GOAL;
    use crate::solver::SearchLimits;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_away() -> Game {
        Game::new(State::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap())
    }

    #[test]
    fn click_counts_moves_and_detects_solve() {
        let mut game = one_away();
        assert!(!game.is_solved());

        game.click(2, 2).unwrap();
        assert_eq!(game.moves(), 1);
        assert!(game.is_solved());
        assert_eq!(*game.state(), GOAL);
    }

    #[test]
    fn invalid_click_leaves_board_alone() {
        let mut game = one_away();
        let before = *game.state();

        assert_eq!(
            game.click(0, 0),
            Err(PuzzleError::InvalidMove { row: 0, col: 0 })
        );
        assert_eq!(*game.state(), before);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn hint_is_cleared_by_a_move() {
        let mut game = one_away();
        assert_eq!(game.hint(), Some(Move::new(2, 2)));
        assert_eq!(game.hint_move(), Some(Move::new(2, 2)));

        game.click(2, 0).unwrap();
        assert_eq!(game.hint_move(), None);
    }

    #[test]
    fn no_hint_once_solved() {
        let mut game = Game::new(GOAL);
        assert!(game.is_solved());
        assert_eq!(game.hint(), None);
    }

    #[test_log::test]
    fn solve_then_tick_to_goal() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = Game::shuffled(100, &mut rng);
        let queued = game.start_solve(&Solver::default()).unwrap();
        assert!(queued > 0);
        assert!(game.is_autoplaying());
        assert_eq!(game.hint(), None);
        assert_eq!(game.click(0, 0), Err(PuzzleError::Busy));

        let mut played = 0;
        while game.tick().is_some() {
            played += 1;
        }
        assert_eq!(played, queued);
        assert!(game.is_solved());
        assert!(!game.is_autoplaying());
        assert_eq!(game.moves(), queued);
    }

    #[test]
    fn solve_is_a_no_op_while_solved() {
        let mut game = Game::new(GOAL);
        assert_eq!(game.start_solve(&Solver::default()), Ok(0));
        assert_eq!(game.tick(), None);
    }

    #[test]
    fn exhausted_solve_queues_nothing() {
        let mut game = Game::new(State::from_grid([[8, 6, 7], [2, 5, 4], [3, 0, 1]]).unwrap());
        let solver = Solver::new(SearchLimits::new(10));
        assert_eq!(
            game.start_solve(&solver),
            Err(SolveError::Exhausted { iterations: 10 })
        );
        assert!(!game.is_autoplaying());
    }

    #[test]
    fn new_game_resets_counters() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = one_away();
        game.click(2, 2).unwrap();

        game.new_game(100, &mut rng);
        assert_eq!(game.moves(), 0);
        assert!(!game.is_solved());
        assert_eq!(game.movable_tiles().len(), valid_moves(game.state()).len());
    }
}
