use rand::{Rng, seq::SliceRandom};

use crate::maze::{Cell, Direction, Grid, GridCell};

/// One level of the carving walk: a carved cell and the directions it has yet to try.
struct Frame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng>(cell: Cell, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Carve a perfect maze into `grid`, starting from `start`.
///
/// Every cell at odd (row, col) inside the border ends up open, connected to the others through
/// exactly one chain of wall openings. Each carved cell tries its four two-step neighbors in a
/// freshly shuffled order and descends into the first one still blocked before trying the rest.
/// The walk keeps its own stack so deep mazes cannot overflow the call stack.
pub fn recursive_backtrack<R: Rng>(grid: &mut Grid, start: Cell, rng: &mut R) {
    grid.set(start, GridCell::Open);

    let mut stack = vec![Frame::new(start, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            // All directions tried, backtrack
            stack.pop();
            continue;
        }
        let dir = frame.directions[frame.next];
        frame.next += 1;
        let cell = frame.cell;

        let Some(candidate) = cell.step(dir, 2) else {
            continue;
        };
        if !is_carvable(grid, candidate) {
            continue;
        }

        grid.set(cell.midpoint(candidate), GridCell::Open);
        grid.set(candidate, GridCell::Open);
        stack.push(Frame::new(candidate, rng));
    }
}

/// A candidate must lie strictly inside the border and must not have been carved yet.
fn is_carvable(grid: &Grid, cell: Cell) -> bool {
    cell.row >= 1
        && cell.col >= 1
        && cell.row < grid.height() - 1
        && cell.col < grid.width() - 1
        && grid[cell] == GridCell::Blocked
}
