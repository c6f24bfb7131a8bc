use std::{fmt, str::FromStr};

use super::{Cell, Direction, cell::GridCell};
use crate::error::MazeError;

/// A `height x width` block of [`GridCell`]s addressed by [`Cell`].
///
/// Solvers only read a grid; all per-search bookkeeping lives in the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[GridCell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell: GridCell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn is_boundary(&self, cell: Cell) -> bool {
        cell.row == 0 || cell.col == 0 || cell.row == self.height - 1 || cell.col == self.width - 1
    }

    fn ravel_index(&self, cell: Cell) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        cell.row as usize * self.width as usize + cell.col as usize
    }

    pub fn set(&mut self, cell: Cell, state: GridCell) {
        let idx = self.ravel_index(cell);
        self.data[idx] = state;
    }

    /// Out-of-bounds positions count as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        !self.in_bounds(cell) || self[cell].is_blocked()
    }

    /// Orthogonal neighbors a search may step onto, in East, South, West, North order.
    ///
    /// Only in-bounds [`GridCell::Open`] and [`GridCell::Goal`] cells are yielded. The order is
    /// fixed because it decides frontier insertion order and therefore tie-breaking in every solver.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| cell.step(dir, 1))
            .filter(move |&c| self.in_bounds(c) && self[c].is_enterable())
    }

    /// All positions in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }

    /// Number of cells that are not blocked.
    pub fn open_count(&self) -> usize {
        self.data.iter().filter(|c| !c.is_blocked()).count()
    }

    /// Locate the single start and the single goal.
    ///
    /// Fails with [`MazeError::InvalidGrid`] unless exactly one of each is present. A
    /// [`GridCell::StartGoal`] cell counts towards both.
    pub fn endpoints(&self) -> Result<(Cell, Cell), MazeError> {
        let mut starts = Vec::new();
        let mut goals = Vec::new();
        for cell in self.cells() {
            let state = self[cell];
            if state.is_start() {
                starts.push(cell);
            }
            if state.is_goal() {
                goals.push(cell);
            }
        }

        match (starts.as_slice(), goals.as_slice()) {
            (&[start], &[goal]) => Ok((start, goal)),
            _ => Err(MazeError::InvalidGrid {
                starts: starts.len(),
                goals: goals.len(),
            }),
        }
    }
}

impl std::ops::Index<Cell> for Grid {
    type Output = GridCell;

    fn index(&self, index: Cell) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                write!(f, "{}", self[Cell::new(row, col)].to_char())?;
            }
        }
        Ok(())
    }
}

/// Parses the text layout written by [`Grid`]'s `Display` impl.
///
/// A space is an open cell, so only line endings are stripped and empty lines skipped. Start
/// and goal counts are not checked here; [`Grid::endpoints`] does that when a search begins.
impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();

        let Some(first) = rows.first() else {
            return Err(MazeError::InvalidLayout("layout is empty".to_string()));
        };
        let width = first.chars().count();
        let too_large = || MazeError::InvalidLayout("layout exceeds u16 dimensions".to_string());
        let grid_width = u16::try_from(width).map_err(|_| too_large())?;
        let grid_height = u16::try_from(rows.len()).map_err(|_| too_large())?;

        let mut grid = Grid::new(grid_width, grid_height, GridCell::Blocked);
        for (row, line) in (0..grid_height).zip(rows.iter()) {
            if line.chars().count() != width {
                return Err(MazeError::InvalidLayout(format!(
                    "row {row} has {} columns, expected {width}",
                    line.chars().count()
                )));
            }
            for (col, c) in (0..grid_width).zip(line.chars()) {
                let state = GridCell::from_char(c).ok_or_else(|| {
                    MazeError::InvalidLayout(format!("unknown symbol {c:?} at row {row}, column {col}"))
                })?;
                grid.set(Cell::new(row, col), state);
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = "\
#####
#S..#
#.#.#
#..G#
#####";

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 5, GridCell::Blocked);
        grid.set(Cell::new(2, 3), GridCell::Start);
        assert_eq!(grid[Cell::new(2, 3)], GridCell::Start);
        assert_eq!(grid[Cell::new(3, 2)], GridCell::Blocked);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(5, 5, GridCell::Open);
        assert!(!grid.in_bounds(Cell::new(5, 5)));
        assert!(!grid.in_bounds(Cell::new(0, 5)));
        assert!(!grid.in_bounds(Cell::new(5, 0)));
        assert!(grid.in_bounds(Cell::new(4, 4)));
        assert!(grid.is_blocked(Cell::new(9, 9)));
    }

    #[test]
    fn test_neighbors_order_is_east_south_west_north() {
        let grid = Grid::new(3, 3, GridCell::Open);
        let neighbors = grid.neighbors(Cell::new(1, 1)).collect::<Vec<_>>();
        assert_eq!(
            neighbors,
            vec![
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_neighbors_at_corner_stay_in_bounds() {
        let grid = Grid::new(3, 3, GridCell::Open);
        let neighbors = grid.neighbors(Cell::new(0, 0)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn test_neighbors_skip_blocked_and_start() {
        let grid: Grid = LAYOUT.parse().unwrap();
        // (1, 2) borders the start on the west and a wall on the south
        let neighbors = grid.neighbors(Cell::new(1, 2)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![Cell::new(1, 3)]);
        // The goal is yielded
        let neighbors = grid.neighbors(Cell::new(2, 3)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![Cell::new(3, 3), Cell::new(1, 3)]);
    }

    #[test]
    fn test_endpoints() {
        let grid: Grid = LAYOUT.parse().unwrap();
        assert_eq!(grid.endpoints(), Ok((Cell::new(1, 1), Cell::new(3, 3))));
    }

    #[test]
    fn test_endpoints_rejects_missing_goal() {
        let grid: Grid = "###\n#S#\n###".parse().unwrap();
        assert_eq!(
            grid.endpoints(),
            Err(MazeError::InvalidGrid {
                starts: 1,
                goals: 0
            })
        );
    }

    #[test]
    fn test_endpoints_accepts_start_goal_cell() {
        let grid: Grid = "###\n#@#\n###".parse().unwrap();
        assert_eq!(grid.endpoints(), Ok((Cell::new(1, 1), Cell::new(1, 1))));
    }

    #[test]
    fn test_display_matches_layout() {
        let grid: Grid = LAYOUT.parse().unwrap();
        assert_eq!(grid.to_string(), "#####\n#S..#\n#.#.#\n#..G#\n#####");
        assert_eq!(grid.open_count(), 8);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = "###\n##\n###".parse::<Grid>().unwrap_err();
        assert!(matches!(err, MazeError::InvalidLayout(_)));
    }

    #[test]
    fn test_parse_keeps_spaces_as_open_cells() {
        let grid: Grid = "#####\r\n#S G#\r\n#####\n".parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (5, 3));
        assert_eq!(grid[Cell::new(1, 2)], GridCell::Open);
        assert_eq!(grid.to_string(), "#####\n#S.G#\n#####");

        // Edge spaces are cells too, not padding
        let grid: Grid = " S.G \n#####".parse().unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid[Cell::new(0, 0)], GridCell::Open);
        assert_eq!(grid[Cell::new(0, 4)], GridCell::Open);
    }

    #[test]
    fn test_parse_rejects_unknown_symbols() {
        let err = "###\n#x#\n###".parse::<Grid>().unwrap_err();
        assert!(matches!(err, MazeError::InvalidLayout(_)));
    }
}
