use rand::{SeedableRng, rngs::StdRng};

mod recur_backtrack;

use recur_backtrack::recursive_backtrack;

use crate::{
    error::MazeError,
    maze::{Cell, Grid, GridCell},
};

/// Smallest accepted width or height: one carvable cell surrounded by walls.
pub const MIN_DIMENSION: u16 = 3;

/// Cell where carving begins and every search starts.
pub const START: Cell = Cell::new(1, 1);

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Both dimensions must be odd and at least [`MIN_DIMENSION`].
pub fn validate_dimensions(width: u16, height: u16) -> Result<(), MazeError> {
    let valid = |n: u16| n >= MIN_DIMENSION && n % 2 == 1;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions { width, height })
    }
}

/// Goal position for a maze of the given size: the bottom-right interior cell.
pub fn goal_for(width: u16, height: u16) -> Cell {
    Cell::new(height - 2, width - 2)
}

/// Generate a perfect maze of `width x height` cells.
///
/// The start is at (1, 1) and the goal at (height - 2, width - 2). With a seed the result is
/// fully deterministic; without one the RNG is seeded from the OS.
pub fn generate_maze(width: u16, height: u16, seed: Option<u64>) -> Result<Grid, MazeError> {
    validate_dimensions(width, height)?;

    let mut grid = Grid::new(width, height, GridCell::Blocked);
    let mut rng = get_rng(seed);
    recursive_backtrack(&mut grid, START, &mut rng);

    let goal = goal_for(width, height);
    if goal == START {
        grid.set(START, GridCell::StartGoal);
    } else {
        grid.set(START, GridCell::Start);
        grid.set(goal, GridCell::Goal);
    }

    tracing::debug!(
        "[generator] carved {}x{} maze with {} open cells (seed: {:?})",
        width,
        height,
        grid.open_count(),
        seed
    );
    Ok(grid)
}
