use std::{
    collections::{HashMap, HashSet},
    sync::atomic::{AtomicBool, Ordering},
};

mod astar;
mod bfs;
mod dfs;
mod path;

use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;
pub use path::reconstruct;

use crate::{
    error::MazeError,
    maze::{Cell, Grid},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Dfs,
    Bfs,
    AStar,
}

impl Solver {
    /// All solvers, in the order a comparison run races them.
    pub const ALL: [Solver; 3] = [Solver::Dfs, Solver::Bfs, Solver::AStar];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

/// Frontier snapshot handed to [`Observer::on_expand`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrontierStats {
    /// Cells still waiting in the frontier after the pop.
    pub len: usize,
    /// `f = g + h` of the popped entry, for A* only.
    pub priority: Option<u32>,
}

/// Receives search progress synchronously; the engine waits for each call to return.
///
/// Observers only see the search, they never steer it. Every method defaults to a no-op.
pub trait Observer {
    /// A cell was popped and is about to have its neighbors enumerated.
    fn on_expand(&mut self, _cell: Cell, _explored: usize, _frontier: FrontierStats) {}

    /// A cell has finished expanding.
    fn on_visited(&mut self, _cell: Cell) {}

    /// One cell of the found path, reported in order from start to goal.
    fn on_path_step(&mut self, _cell: Cell) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Outcome of one solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub solver: Solver,
    /// Number of cells popped and expanded. The goal is recognized on pop and not counted.
    pub explored: usize,
    /// Expanded cells in expansion order.
    pub visited: Vec<Cell>,
    /// Start to goal inclusive. Empty unless `success`.
    pub path: Vec<Cell>,
    pub success: bool,
}

impl SolveResult {
    /// Moves along the path, i.e. path cells excluding the start.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Bookkeeping owned by a single solve call.
struct SearchState {
    solver: Solver,
    start: Cell,
    goal: Cell,
    /// Predecessor that discovered each non-start cell.
    parent: HashMap<Cell, Cell>,
    order: Vec<Cell>,
    explored: usize,
}

impl SearchState {
    fn new(solver: Solver, start: Cell, goal: Cell) -> Self {
        SearchState {
            solver,
            start,
            goal,
            parent: HashMap::new(),
            order: Vec::new(),
            explored: 0,
        }
    }

    fn found(self) -> SolveResult {
        let path = reconstruct(&self.parent, self.start, self.goal);
        SolveResult {
            solver: self.solver,
            explored: self.explored,
            visited: self.order,
            success: !path.is_empty(),
            path,
        }
    }

    /// Frontier exhausted or search cancelled.
    fn failed(self) -> SolveResult {
        SolveResult {
            solver: self.solver,
            explored: self.explored,
            visited: self.order,
            path: Vec::new(),
            success: false,
        }
    }
}

/// Runs solvers against a grid, reporting progress to an [`Observer`].
pub struct SearchEngine<'a> {
    observer: &'a mut dyn Observer,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> SearchEngine<'a> {
    pub fn new(observer: &'a mut dyn Observer) -> Self {
        SearchEngine {
            observer,
            cancel: None,
        }
    }

    /// Check `cancel` at the top of every iteration; once set, the solve stops and returns
    /// what it has so far with `success == false`.
    pub fn with_cancel(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Solve `grid` from its start to its goal.
    ///
    /// Fails with [`MazeError::InvalidGrid`] before any expansion when the grid does not hold
    /// exactly one start and one goal. An unreachable goal is a normal result.
    pub fn solve(&mut self, grid: &Grid, solver: Solver) -> Result<SolveResult, MazeError> {
        let (start, goal) = grid.endpoints()?;
        tracing::debug!("[solver] {} from {} to {}", solver, start, goal);

        let state = SearchState::new(solver, start, goal);
        let result = match solver {
            Solver::Bfs => solve_bfs(grid, state, self),
            Solver::Dfs => solve_dfs(grid, state, self),
            Solver::AStar => solve_astar(grid, state, self),
        };

        if result.success {
            result
                .path
                .iter()
                .for_each(|&cell| self.observer.on_path_step(cell));
        }

        tracing::info!(
            "[solver] {} finished: success={}, explored={}, path length={}",
            solver,
            result.success,
            result.explored,
            result.path.len()
        );
        Ok(result)
    }

    fn is_cancelled(&self) -> bool {
        let cancelled = self
            .cancel
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
        if cancelled {
            tracing::debug!("[solver] cancellation requested, stopping search");
        }
        cancelled
    }
}

/// Solve without an observer or cancellation.
pub fn solve_maze(grid: &Grid, solver: Solver) -> Result<SolveResult, MazeError> {
    SearchEngine::new(&mut NoopObserver).solve(grid, solver)
}

/// Frontier for the uninformed searches, which mark cells visited when they are pushed.
trait Frontier {
    fn push(&mut self, cell: Cell);
    fn pop(&mut self) -> Option<Cell>;
    fn len(&self) -> usize;
}

/// Pop, test for the goal, expand, push undiscovered neighbors. Shared by BFS and DFS, which
/// differ only in frontier discipline.
fn traverse<F: Frontier>(
    mut frontier: F,
    grid: &Grid,
    mut state: SearchState,
    engine: &mut SearchEngine<'_>,
) -> SolveResult {
    let mut visited = HashSet::from([state.start]);
    frontier.push(state.start);

    loop {
        if engine.is_cancelled() {
            return state.failed();
        }
        let Some(current) = frontier.pop() else {
            break;
        };
        if current == state.goal {
            return state.found();
        }

        state.explored += 1;
        engine.observer.on_expand(
            current,
            state.explored,
            FrontierStats {
                len: frontier.len(),
                priority: None,
            },
        );

        for next in grid.neighbors(current) {
            // First discovery wins
            if visited.insert(next) {
                state.parent.insert(next, current);
                frontier.push(next);
            }
        }

        state.order.push(current);
        engine.observer.on_visited(current);
    }

    state.failed()
}
