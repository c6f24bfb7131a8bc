use super::{Frontier, SearchEngine, SearchState, SolveResult, traverse};
use crate::maze::{Cell, Grid};

/// LIFO frontier. The most recently discovered cell is expanded next, with no depth limit and
/// no guarantee that the path found is the shortest.
#[derive(Default)]
struct Stack(Vec<Cell>);

impl Frontier for Stack {
    fn push(&mut self, cell: Cell) {
        self.0.push(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

pub(super) fn solve_dfs(
    grid: &Grid,
    state: SearchState,
    engine: &mut SearchEngine<'_>,
) -> SolveResult {
    traverse(Stack::default(), grid, state, engine)
}
