use std::collections::HashMap;

use crate::maze::Cell;

/// Rebuild the start-to-goal path from predecessor links.
///
/// Walks `parent` backwards from `goal` until it reaches a cell with no recorded parent, then
/// reverses. Returns an empty path when `goal` was never discovered, and `[start]` when the
/// start is the goal. The map is only read, so repeated calls give identical paths.
pub fn reconstruct(parent: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    if goal != start && !parent.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut current = goal;
    // A well-formed map is a tree rooted at the start, so the walk is bounded by its size
    while let Some(&prev) = parent.get(&current) {
        if path.len() > parent.len() {
            tracing::warn!("[path] predecessor links contain a cycle through {}", current);
            return Vec::new();
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
