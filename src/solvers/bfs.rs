use std::collections::VecDeque;

use super::{Frontier, SearchEngine, SearchState, SolveResult, traverse};
use crate::maze::{Cell, Grid};

/// FIFO frontier. Cells come out in order of distance from the start, so the first time the
/// goal is popped the path to it is a shortest one.
#[derive(Default)]
struct Queue(VecDeque<Cell>);

impl Frontier for Queue {
    fn push(&mut self, cell: Cell) {
        self.0.push_back(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

pub(super) fn solve_bfs(
    grid: &Grid,
    state: SearchState,
    engine: &mut SearchEngine<'_>,
) -> SolveResult {
    traverse(Queue::default(), grid, state, engine)
}
