use std::time::Duration;

use crate::solvers::{SolveResult, Solver};

/// Short label shown in frame titles and the summary table.
pub fn label(solver: Solver) -> &'static str {
    match solver {
        Solver::Dfs => "DFS (Deep Search)",
        Solver::Bfs => "BFS (Shortest Path)",
        Solver::AStar => "A* (Optimized)",
    }
}

/// One line of the final comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub solver: Solver,
    pub explored: usize,
    /// Moves from start to goal
    pub steps: usize,
    /// Wall time of the solve, including any animation pacing
    pub duration: Duration,
}

impl ComparisonRow {
    /// Only successful solves make it into the table.
    pub fn from_result(result: &SolveResult, duration: Duration) -> Option<Self> {
        result.success.then(|| ComparisonRow {
            solver: result.solver,
            explored: result.explored,
            steps: result.steps(),
            duration,
        })
    }
}

/// Render the summary table as plain text, one line per solver under a header.
pub fn render_table(rows: &[ComparisonRow]) -> String {
    let header = [
        "  FINAL PERFORMANCE COMPARISON".to_string(),
        format!("  {}", "━".repeat(60)),
        format!(
            "  {:<20} | {:<10} | {:<8} | Time",
            "Algorithm", "Explored", "Steps"
        ),
    ];
    let body = rows.iter().map(|row| {
        format!(
            "  {:<20} | {:<10} | {:<8} | {:.2}s",
            label(row.solver),
            row.explored,
            row.steps,
            row.duration.as_secs_f64()
        )
    });
    header.into_iter().chain(body).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;

    fn result(success: bool) -> SolveResult {
        SolveResult {
            solver: Solver::Bfs,
            explored: 7,
            visited: Vec::new(),
            path: if success {
                vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)]
            } else {
                Vec::new()
            },
            success,
        }
    }

    #[test]
    fn test_failed_solves_are_left_out() {
        assert_eq!(ComparisonRow::from_result(&result(false), Duration::ZERO), None);
        let row = ComparisonRow::from_result(&result(true), Duration::ZERO).unwrap();
        assert_eq!(row.steps, 2);
        assert_eq!(row.explored, 7);
    }

    #[test]
    fn test_empty_table_is_header_only() {
        assert_eq!(render_table(&[]).lines().count(), 3);
    }

    #[test]
    fn test_table_layout() {
        let rows = [ComparisonRow {
            solver: Solver::AStar,
            explored: 123,
            steps: 45,
            duration: Duration::from_millis(1250),
        }];
        let table = render_table(&rows);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(!table.ends_with('\n'));
        assert_eq!(lines[0], "  FINAL PERFORMANCE COMPARISON");
        assert_eq!(
            lines[2],
            "  Algorithm            | Explored   | Steps    | Time"
        );
        assert_eq!(
            lines[3],
            "  A* (Optimized)       | 123        | 45       | 1.25s"
        );
    }
}
