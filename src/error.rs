use std::fmt;

/// Errors raised before any maze or search work begins.
///
/// An unreachable goal is not an error; it is reported through a
/// [`SolveResult`](crate::solvers::SolveResult) with `success == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height is even or smaller than [`MIN_DIMENSION`](crate::generators::MIN_DIMENSION).
    InvalidDimensions { width: u16, height: u16 },
    /// The grid does not hold exactly one start and exactly one goal.
    InvalidGrid { starts: usize, goals: usize },
    /// A text layout could not be parsed into a grid.
    InvalidLayout(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "invalid maze dimensions {width}x{height}: both must be odd and at least 3"
            ),
            Self::InvalidGrid { starts, goals } => write!(
                f,
                "invalid grid: expected exactly one start and one goal, found {starts} start(s) and {goals} goal(s)"
            ),
            Self::InvalidLayout(msg) => write!(f, "invalid grid layout: {msg}"),
        }
    }
}

impl std::error::Error for MazeError {}
