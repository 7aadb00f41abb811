//! A* search for a shortest move sequence back to [`GOAL`].
//!
//! The frontier is a [`BinaryHeap`] of [`SearchNode`]s ranked by
//! `f = g + h` with Manhattan distance as `h`. Manhattan distance is admissible
//! and consistent for sliding-tile puzzles, so the first time the goal is
//! popped its path is optimal. States are only ever expanded once; stale
//! duplicates left in the heap are skipped when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, warn};

use crate::error::SolveError;
use crate::puzzle::{apply_move, heuristic, is_solvable, valid_moves, Move, State, GOAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Upper bound on frontier pops before the search gives up.
    pub max_iterations: usize,
}

impl SearchLimits {
    /// A tight ceiling suited to interactive callers that would rather give up fast.
    pub const REFERENCE_MAX_ITERATIONS: usize = 10_000;

    pub const fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            // 181,440 reachable states, each expanded once with at most four
            // pushes, keeps the pop count for any solvable board well below this.
            max_iterations: 1_000_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    /// Frontier pops spent finding `moves`.
    pub iterations: usize,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[derive(Debug, Clone)]
struct SearchNode {
    state: State,
    g: usize,
    h: usize,
    path: Vec<Move>,
    seq: u64,
}

impl SearchNode {
    fn f(&self) -> usize {
        self.g + self.h
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

// BinaryHeap is a max-heap, so "greater" means "popped first":
// lowest f, then deepest g, then earliest insertion.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f()
            .cmp(&self.f())
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    limits: SearchLimits,
}

impl Solver {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn solve(&self, start: &State) -> Result<Solution, SolveError> {
        if !is_solvable(start) {
            return Err(SolveError::Unsolvable);
        }

        let mut frontier = BinaryHeap::new();
        let mut visited: HashSet<State> = HashSet::new();
        let mut seq = 0u64;

        frontier.push(SearchNode {
            state: *start,
            g: 0,
            h: heuristic(start),
            path: Vec::new(),
            seq,
        });

        let mut iterations = 0;
        while iterations < self.limits.max_iterations {
            let Some(node) = frontier.pop() else {
                break;
            };
            iterations += 1;

            if node.state == GOAL {
                debug!(
                    "solution of {} moves found in {} iterations ({} expanded, {} queued)",
                    node.path.len(),
                    iterations,
                    visited.len(),
                    frontier.len()
                );
                return Ok(Solution {
                    moves: node.path,
                    iterations,
                });
            }

            if !visited.insert(node.state) {
                continue;
            }

            for mv in valid_moves(&node.state) {
                let Ok(next) = apply_move(&node.state, mv) else {
                    continue;
                };
                if visited.contains(&next) {
                    continue;
                }

                let mut path = Vec::with_capacity(node.path.len() + 1);
                path.extend_from_slice(&node.path);
                path.push(mv);

                seq += 1;
                frontier.push(SearchNode {
                    state: next,
                    g: node.g + 1,
                    h: heuristic(&next),
                    path,
                    seq,
                });
            }
        }

        warn!(
            "no solution found after {} iterations ({} expanded)",
            iterations,
            visited.len()
        );
        Err(SolveError::Exhausted { iterations })
    }
}

/// Solves with the default [`SearchLimits`], returning just the path.
pub fn solve(start: &State) -> Result<Vec<Move>, SolveError> {
    Solver::default().solve(start).map(|solution| solution.moves)
}
