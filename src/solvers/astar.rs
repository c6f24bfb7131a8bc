use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use super::{FrontierStats, SearchEngine, SearchState, SolveResult};
use crate::maze::{Cell, Grid};

/// Open-set entry. The heap is a max-heap, so ordering is reversed to pop the smallest `f`
/// first and, among equal `f`, the earliest pushed.
#[derive(Debug, PartialEq, Eq)]
struct OpenEntry {
    /// Estimated total cost through this cell: `g + h`
    f: u32,
    /// Insertion sequence number
    seq: u64,
    /// Cost from the start when this entry was pushed
    g: u32,
    cell: Cell,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* with the Manhattan distance heuristic, which is admissible and consistent on a unit-cost
/// grid, so the first pop of the goal is final.
///
/// A cell is pushed again whenever a strictly cheaper path to it shows up. The older entry stays
/// in the heap and is skipped when popped.
pub(super) fn solve_astar(
    grid: &Grid,
    mut state: SearchState,
    engine: &mut SearchEngine<'_>,
) -> SolveResult {
    let goal = state.goal;
    let heuristic = |cell: Cell| cell.manhattan(goal);

    let mut g_score: HashMap<Cell, u32> = HashMap::from([(state.start, 0)]);
    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;
    open.push(OpenEntry {
        f: heuristic(state.start),
        seq,
        g: 0,
        cell: state.start,
    });

    loop {
        if engine.is_cancelled() {
            return state.failed();
        }
        let Some(current) = open.pop() else {
            break;
        };

        // Skip entries superseded by a cheaper path
        if g_score
            .get(&current.cell)
            .is_some_and(|&best| current.g > best)
        {
            continue;
        }
        if current.cell == goal {
            return state.found();
        }

        state.explored += 1;
        engine.observer.on_expand(
            current.cell,
            state.explored,
            FrontierStats {
                len: open.len(),
                priority: Some(current.f),
            },
        );

        let tentative_g = current.g + 1;
        for next in grid.neighbors(current.cell) {
            let is_cheaper = g_score
                .get(&next)
                .is_none_or(|&existing| tentative_g < existing);
            if is_cheaper {
                g_score.insert(next, tentative_g);
                state.parent.insert(next, current.cell);
                seq += 1;
                open.push(OpenEntry {
                    f: tentative_g + heuristic(next),
                    seq,
                    g: tentative_g,
                    cell: next,
                });
            }
        }

        state.order.push(current.cell);
        engine.observer.on_visited(current.cell);
    }

    state.failed()
}
