//! Breadth-first shortest paths on a 2D grid.
//!
//! A [`Grid`] is an implicit graph: every open cell is a vertex and is
//! adjacent to the open cells directly above, below, left and right of it.
//! No adjacency is stored; visited flags and parent links live in flat
//! row-major arrays sized to the grid.
use std::{collections::VecDeque, fmt, str::FromStr};

use bitvec::{bitvec, vec::BitVec};
use thiserror::Error;

use crate::tracing_support::info_span;

/// Neighbor offsets in expansion order: up, down, left, right.  The order
/// decides which of several equally short paths is returned.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A `(row, col)` position in a grid.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn offset(self, (dr, dc): (isize, isize)) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) has value {value}, expected 0 (open) or 1 (obstacle)")]
    InvalidCell { row: usize, col: usize, value: i32 },
    #[error("line {line}: unexpected character {ch:?}")]
    InvalidChar { line: usize, ch: char },
    #[error("a {rows}x{cols} grid has more cells than fit in usize")]
    TooLarge { rows: usize, cols: usize },
}

/// A rectangular map of open and blocked cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: BitVec,
}

impl Grid {
    /// Creates a grid with every cell open.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            blocked: bitvec![0; cells],
        })
    }

    /// Builds a grid from rows of `0` (open) and `1` (obstacle) values.
    /// Every row must have the same length as the first.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut blocked = BitVec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => blocked.push(false),
                    1 => blocked.push(true),
                    value => return Err(GridError::InvalidCell { row: r, col: c, value }),
                }
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            blocked,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Checks whether `cell` is inside the grid and not an obstacle.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.blocked[self.index(cell)]
    }

    /// Marks `cell` as an obstacle or clears it.  Cells outside the grid are
    /// ignored.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        if self.contains(cell) {
            let index = self.index(cell);
            self.blocked.set(index, blocked);
        }
    }

    /// Gets the open cells adjacent to `cell`, in up, down, left, right order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS
            .into_iter()
            .filter_map(move |direction| cell.offset(direction))
            .filter(move |&next| self.is_open(next))
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }
}

/// Parses lines of `0`/`.` (open) and `1`/`#` (obstacle).  Whitespace inside a
/// line is ignored and blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (n, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                row.push(match ch {
                    '0' | '.' => 0,
                    '1' | '#' => 1,
                    ch => return Err(GridError::InvalidChar { line: n + 1, ch }),
                });
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(&rows)
    }
}

/// Finds a shortest 4-connected path of open cells from `start` to `target`,
/// including both ends.
///
/// Returns `[start]` if the two are equal, and an empty vector if either is
/// outside the grid or blocked, or if no path exists.  Among equally short
/// paths the one found by expanding up, down, left, right is returned.
pub fn grid_shortest_path(grid: &Grid, start: Cell, target: Cell) -> Vec<Cell> {
    let _span = info_span!("grid_shortest_path", %start, %target).entered();
    if !grid.is_open(start) || !grid.is_open(target) {
        return Vec::new();
    }
    if start == target {
        return vec![start];
    }

    let cells = grid.blocked.len();
    let mut visited = bitvec![0; cells];
    let mut parent: Vec<Option<Cell>> = vec![None; cells];
    let mut queue = VecDeque::new();

    visited.set(grid.index(start), true);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == target {
            let mut path = Vec::new();
            let mut node = Some(current);
            while let Some(cell) = node {
                node = parent[grid.index(cell)];
                path.push(cell);
            }
            path.reverse();
            return path;
        }
        for next in grid.neighbors(current) {
            let index = grid.index(next);
            if !visited[index] {
                visited.set(index, true);
                parent[index] = Some(current);
                queue.push_back(next);
            }
        }
    }
    Vec::new()
}
