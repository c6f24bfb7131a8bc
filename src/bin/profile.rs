use std::time::Instant;

use mazerace::{
    MazeError,
    generators::generate_maze,
    solvers::{Solver, solve_maze},
};

/// Generate and solve large mazes without any rendering, printing per-solver timings.
fn main() -> Result<(), MazeError> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1);
    let size = u8::MAX as u16;

    for seed in 0..num_iters {
        let started = Instant::now();
        let grid = generate_maze(size, size, Some(seed))?;
        println!("seed {seed:>4} {:<26} {:?}", "generation", started.elapsed());

        for solver in Solver::ALL {
            let started = Instant::now();
            let result = solve_maze(&grid, solver)?;
            println!(
                "seed {seed:>4} {:<26} {:?} (explored {}, steps {})",
                solver.to_string(),
                started.elapsed(),
                result.explored,
                result.steps()
            );
        }
    }
    Ok(())
}
