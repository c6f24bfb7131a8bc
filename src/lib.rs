//! Perfect maze generation and three interchangeable solvers (BFS, DFS, A*) sharing one
//! observable search protocol.
//!
//! ```
//! use mazerace::{generators::generate_maze, solvers::{Solver, solve_maze}};
//!
//! let grid = generate_maze(21, 11, Some(42)).unwrap();
//! let result = solve_maze(&grid, Solver::AStar).unwrap();
//! assert!(result.success);
//! ```

pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::MazeError;
pub use maze::{Cell, Grid, GridCell};
