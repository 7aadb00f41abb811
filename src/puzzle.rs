use std::fmt;

use crate::error::PuzzleError;

pub const GRID_SIZE: usize = 3;
pub const CELLS: usize = GRID_SIZE * GRID_SIZE;

/// The empty space is represented by 0.
pub const EMPTY: u8 = 0;

/// Solved layout: 1..=8 in row-major order, empty cell last.
pub const GOAL: State = State {
    cells: [1, 2, 3, 4, 5, 6, 7, 8, EMPTY],
    empty: (GRID_SIZE - 1, GRID_SIZE - 1),
};

/// Position of a neighbour relative to the empty cell.
///
/// The declaration order is the enumeration order used everywhere a set of
/// moves is produced, so it doubles as the tie-break order for hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A move names the cell whose tile slides into the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The in-bounds neighbour of `from` in direction `dir`, if any.
    pub fn towards(from: (usize, usize), dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.as_offset();
        let row = from.0 as isize + dr;
        let col = from.1 as isize + dc;

        if row >= 0 && row < GRID_SIZE as isize && col >= 0 && col < GRID_SIZE as isize {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }

    fn is_adjacent_to(&self, (row, col): (usize, usize)) -> bool {
        self.row.abs_diff(row) + self.col.abs_diff(col) == 1
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One tile arrangement. Transitions always produce a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    cells: [u8; CELLS],
    empty: (usize, usize),
}

impl State {
    pub fn goal() -> Self {
        GOAL
    }

    /// Builds a state from row-major cells, rejecting anything that is not a
    /// permutation of `0..CELLS`.
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELLS];
        let mut empty = (0, 0);

        for (ix, &tile) in cells.iter().enumerate() {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(PuzzleError::InvalidTile(tile))?;
            if *slot {
                return Err(PuzzleError::DuplicateTile(tile));
            }
            *slot = true;

            if tile == EMPTY {
                empty = (ix / GRID_SIZE, ix % GRID_SIZE);
            }
        }

        Ok(Self { cells, empty })
    }

    pub fn from_grid(grid: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, PuzzleError> {
        let mut cells = [EMPTY; CELLS];
        for (dst, &src) in cells.iter_mut().zip(grid.iter().flatten()) {
            *dst = src;
        }
        Self::from_cells(cells)
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn grid(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        let mut grid = [[EMPTY; GRID_SIZE]; GRID_SIZE];
        for (ix, &tile) in self.cells.iter().enumerate() {
            grid[ix / GRID_SIZE][ix % GRID_SIZE] = tile;
        }
        grid
    }

    /// Cached (row, col) of the empty cell.
    pub fn empty(&self) -> (usize, usize) {
        self.empty
    }

    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * GRID_SIZE + col]
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Swaps two cells without any adjacency check. The cached empty position
    /// follows the empty cell if it was involved.
    pub(crate) fn swap_cells(&self, a: (usize, usize), b: (usize, usize)) -> Self {
        let mut next = *self;
        next.cells.swap(a.0 * GRID_SIZE + a.1, b.0 * GRID_SIZE + b.1);
        if next.empty == a {
            next.empty = b;
        } else if next.empty == b {
            next.empty = a;
        }
        next
    }
}

impl Default for State {
    fn default() -> Self {
        GOAL
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(GRID_SIZE) {
            for &val in row {
                if val == EMPTY {
                    write!(f, " _ ")?;
                } else {
                    write!(f, "{:2} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Moves available from `state`, in `Direction::ALL` order. Always 2 to 4.
pub fn valid_moves(state: &State) -> Vec<Move> {
    Direction::ALL
        .iter()
        .filter_map(|&dir| Move::towards(state.empty, dir))
        .collect()
}

/// Slides the tile at `mv` into the empty cell.
pub fn apply_move(state: &State, mv: Move) -> Result<State, PuzzleError> {
    if mv.row >= GRID_SIZE || mv.col >= GRID_SIZE || !mv.is_adjacent_to(state.empty) {
        return Err(PuzzleError::InvalidMove {
            row: mv.row,
            col: mv.col,
        });
    }

    Ok(state.swap_cells(state.empty, (mv.row, mv.col)))
}

/// Sum of Manhattan distances of every tile from its goal cell.
pub fn heuristic(state: &State) -> usize {
    state
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != EMPTY)
        .map(|(ix, &value)| {
            let target = (value - 1) as usize;
            let (row, col) = (ix / GRID_SIZE, ix % GRID_SIZE);
            row.abs_diff(target / GRID_SIZE) + col.abs_diff(target % GRID_SIZE)
        })
        .sum()
}

pub fn is_solvable(state: &State) -> bool {
    let inversions = count_inversions(&state.cells);

    if GRID_SIZE % 2 == 1 {
        // Odd width: solvable iff the inversion count is even
        inversions % 2 == 0
    } else {
        // Even width: the empty row, counted from the bottom, also matters
        (inversions + GRID_SIZE - state.empty.0) % 2 == 1
    }
}

fn count_inversions(flattened: &[u8]) -> usize {
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != EMPTY)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != EMPTY && next < val)
                .count()
        })
        .sum()
}
