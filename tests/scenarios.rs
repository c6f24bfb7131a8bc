use mazerace::{
    Cell, Grid, GridCell, MazeError,
    generators::generate_maze,
    solvers::{FrontierStats, Observer, SearchEngine, Solver, reconstruct, solve_maze},
};

#[derive(Default)]
struct CountingObserver {
    expansions: usize,
    path_steps: usize,
}

impl Observer for CountingObserver {
    fn on_expand(&mut self, _cell: Cell, _explored: usize, _frontier: FrontierStats) {
        self.expansions += 1;
    }

    fn on_path_step(&mut self, _cell: Cell) {
        self.path_steps += 1;
    }
}

#[test]
fn small_seeded_maze_places_endpoints_and_solves() {
    let grid = generate_maze(5, 5, Some(1)).unwrap();
    assert_eq!(grid[Cell::new(1, 1)], GridCell::Start);
    assert_eq!(grid[Cell::new(3, 3)], GridCell::Goal);

    let result = solve_maze(&grid, Solver::Bfs).unwrap();
    assert!(result.success);
    assert!(result.explored >= 1);
    assert_eq!(result.path.first(), Some(&Cell::new(1, 1)));
    assert_eq!(result.path.last(), Some(&Cell::new(3, 3)));
    // Any route between opposite corners of a 5x5 maze takes at least 4 moves
    assert!(result.steps() >= 4);
}

#[test]
fn seed_42_is_reproducible() {
    let first = generate_maze(35, 17, Some(42)).unwrap();
    let second = generate_maze(35, 17, Some(42)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn two_starts_fail_before_any_expansion() {
    let grid: Grid = "\
#######
#S...S#
#.###.#
#..G..#
#######"
    .parse()
    .unwrap();

    for solver in Solver::ALL {
        let mut observer = CountingObserver::default();
        let err = SearchEngine::new(&mut observer)
            .solve(&grid, solver)
            .unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidGrid {
                starts: 2,
                goals: 1
            }
        );
        assert_eq!(observer.expansions, 0);
        assert_eq!(observer.path_steps, 0);
    }
}

#[test]
fn observer_counts_match_result() {
    let grid = generate_maze(25, 15, Some(7)).unwrap();
    for solver in Solver::ALL {
        let mut observer = CountingObserver::default();
        let result = SearchEngine::new(&mut observer)
            .solve(&grid, solver)
            .unwrap();
        assert_eq!(observer.expansions, result.explored);
        assert_eq!(observer.path_steps, result.path.len());
    }
}

#[test]
fn dfs_can_be_longer_than_bfs_with_loops() {
    // An open room has many routes; DFS dives east first and snakes around
    let grid: Grid = "\
#######
#S....#
#.....#
#.....#
#G....#
#######"
    .parse()
    .unwrap();
    let bfs = solve_maze(&grid, Solver::Bfs).unwrap();
    let dfs = solve_maze(&grid, Solver::Dfs).unwrap();
    let astar = solve_maze(&grid, Solver::AStar).unwrap();
    assert_eq!(bfs.steps(), 3);
    assert_eq!(astar.steps(), 3);
    assert!(dfs.steps() >= bfs.steps());
}

#[test]
fn reconstruct_on_solver_parents_is_stable() {
    use std::collections::HashMap;

    let result = solve_maze(&generate_maze(15, 15, Some(3)).unwrap(), Solver::Bfs).unwrap();
    let parent = result
        .path
        .windows(2)
        .map(|w| (w[1], w[0]))
        .collect::<HashMap<_, _>>();
    let start = result.path[0];
    let goal = *result.path.last().unwrap();
    assert_eq!(reconstruct(&parent, start, goal), result.path);
    assert_eq!(reconstruct(&parent, start, goal), reconstruct(&parent, start, goal));
}
