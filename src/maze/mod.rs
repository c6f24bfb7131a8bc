pub mod cell;
pub mod grid;

use std::fmt;

pub use cell::GridCell;
pub use grid::Grid;

/// A grid position. Identity is purely positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    pub const fn new(row: u16, col: u16) -> Self {
        Cell { row, col }
    }

    /// The cell `distance` steps away in `dir`, or `None` if that would leave the `u16` range.
    /// Grid bounds are not checked here.
    pub fn step(self, dir: Direction, distance: u16) -> Option<Cell> {
        let Cell { row, col } = self;
        match dir {
            Direction::East => col.checked_add(distance).map(|col| Cell::new(row, col)),
            Direction::South => row.checked_add(distance).map(|row| Cell::new(row, col)),
            Direction::West => col.checked_sub(distance).map(|col| Cell::new(row, col)),
            Direction::North => row.checked_sub(distance).map(|row| Cell::new(row, col)),
        }
    }

    /// |Δrow| + |Δcol|
    pub fn manhattan(self, other: Cell) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }

    /// The cell halfway between `self` and `other`, used to find the wall between two carved
    /// cells that sit two steps apart.
    pub fn midpoint(self, other: Cell) -> Cell {
        Cell::new(
            std::cmp::min(self.row, other.row) + self.row.abs_diff(other.row) / 2,
            std::cmp::min(self.col, other.col) + self.col.abs_diff(other.col) / 2,
        )
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// Neighbor enumeration order shared by the grid and the solvers.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];
}
