use std::{
    io::{self, Write},
    time::Duration,
};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    app::comparison::label,
    maze::{Cell, Grid, GridCell},
    solvers::{FrontierStats, Observer, Solver},
};

/// What the renderer shows for one maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Wall,
    Empty,
    Start,
    Goal,
    /// Being expanded right now
    Scan,
    Visited,
    /// Part of the final path
    Step,
}

impl Mark {
    /// The width of each cell when rendered, in character widths.
    const CELL_WIDTH: usize = 2;

    fn from_grid_cell(cell: GridCell) -> Self {
        match cell {
            GridCell::Blocked => Mark::Wall,
            GridCell::Open => Mark::Empty,
            GridCell::Start | GridCell::StartGoal => Mark::Start,
            GridCell::Goal => Mark::Goal,
        }
    }

    fn is_endpoint(self) -> bool {
        matches!(self, Mark::Start | Mark::Goal)
    }

    fn styled(self) -> StyledContent<&'static str> {
        let styled_symbol = match self {
            Mark::Wall => "██".with(Color::DarkGrey),
            Mark::Empty => "  ".with(Color::Reset),
            Mark::Start => "◈ ".with(Color::Green),
            Mark::Goal => "🏁".with(Color::Red),
            Mark::Scan => "◌ ".with(Color::Cyan),
            Mark::Visited => "· ".with(Color::Blue),
            Mark::Step => "● ".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Mark::CELL_WIDTH,
                "Each cell must occupy exactly two character widths."
            );
        }

        styled_symbol
    }
}

/// Draws a search as it runs: one bordered frame per expansion, then the path one step at a time.
///
/// Implements [`Observer`], so the engine blocks on each frame and `step_delay` paces the
/// search. Observer callbacks cannot fail, so the first I/O error is kept, drawing stops, and
/// [`TerminalRenderer::finish`] returns the error.
pub struct TerminalRenderer<W: Write> {
    out: W,
    solver: Solver,
    width: u16,
    marks: Vec<Mark>,
    goal: Option<Cell>,
    step_delay: Duration,
    frames: usize,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, grid: &Grid, solver: Solver, step_delay: Duration) -> Self {
        let marks = grid
            .cells()
            .map(|c| Mark::from_grid_cell(grid[c]))
            .collect::<Vec<_>>();
        let goal = grid.cells().find(|&c| grid[c].is_goal());
        Self {
            out,
            solver,
            width: grid.width(),
            marks,
            goal,
            step_delay,
            frames: 0,
            error: None,
        }
    }

    /// Number of frames drawn, or the first error hit while drawing.
    pub fn finish(mut self) -> io::Result<usize> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(self.frames),
        }
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.width as usize + cell.col as usize
    }

    /// Start and goal keep their own symbols.
    fn mark(&mut self, cell: Cell, mark: Mark) {
        let idx = self.index(cell);
        if let Some(slot) = self.marks.get_mut(idx) {
            if !slot.is_endpoint() {
                *slot = mark;
            }
        }
    }

    fn draw(&mut self, status: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.draw_frame(status) {
            tracing::warn!("[renderer] failed to draw frame: {}", e);
            self.error = Some(e);
            return;
        }
        self.frames += 1;
        if !self.step_delay.is_zero() {
            std::thread::sleep(self.step_delay);
        }
    }

    /// Columns and rows one frame needs: the grid plus indent, borders, title and status line.
    fn frame_size(&self) -> (usize, usize) {
        let rows = self.marks.len() / self.width.max(1) as usize;
        (self.width as usize * Mark::CELL_WIDTH + 4, rows + 4)
    }

    /// The message to show instead of the maze when the terminal cannot hold a whole frame.
    fn too_small_message(&self, terminal_size: (u16, u16)) -> Option<String> {
        let (needed_cols, needed_rows) = self.frame_size();
        let (cols, rows) = (terminal_size.0 as usize, terminal_size.1 as usize);
        (cols < needed_cols || rows < needed_rows).then(|| {
            format!(
                "Terminal size is too small ({cols}x{rows}) for the maze ({needed_cols}x{needed_rows} needed). Please resize the terminal."
            )
        })
    }

    fn draw_frame(&mut self, status: &str) -> io::Result<()> {
        // Not attached to a terminal: draw everything, untruncated
        let terminal_size = terminal::size().ok();
        if let Some(msg) = terminal_size.and_then(|size| self.too_small_message(size)) {
            queue!(
                self.out,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            )?;
            return self.out.flush();
        }

        let inner_width = self.width as usize * Mark::CELL_WIDTH;
        let max_status_width = terminal_size
            .map(|(w, _)| (w as usize).saturating_sub(2))
            .unwrap_or(usize::MAX);
        let (status, _) = status.unicode_truncate(max_status_width);

        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            style::PrintStyledContent(
                format!("  » {}", label(self.solver))
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold)
            ),
            terminal::Clear(ClearType::UntilNewLine),
            style::Print("\r\n"),
            style::PrintStyledContent(format!("  ┏{}┓", "━".repeat(inner_width)).dim()),
            style::Print("\r\n"),
        )?;

        for row in self.marks.chunks(self.width.max(1) as usize) {
            queue!(self.out, style::Print("  "), style::PrintStyledContent("┃".dim()))?;
            for mark in row {
                queue!(self.out, style::PrintStyledContent(mark.styled()))?;
            }
            queue!(
                self.out,
                style::PrintStyledContent("┃".dim()),
                style::Print("\r\n")
            )?;
        }

        queue!(
            self.out,
            style::PrintStyledContent(format!("  ┗{}┛", "━".repeat(inner_width)).dim()),
            style::Print("\r\n"),
            style::PrintStyledContent(format!("  {}", status).dim()),
            terminal::Clear(ClearType::FromCursorDown),
        )?;
        self.out.flush()
    }

    fn status_line(&self, explored: usize, frontier: FrontierStats) -> String {
        match (self.solver, frontier.priority) {
            (Solver::Bfs, _) => format!("Queue Size: {} | Explored: {}", frontier.len, explored),
            (Solver::Dfs, _) => format!("Stack Depth: {} | Explored: {}", frontier.len, explored),
            (Solver::AStar, Some(f)) => {
                format!("Priority Queue (f={}) | Explored: {}", f, explored)
            }
            (Solver::AStar, None) => format!("Priority Queue | Explored: {}", explored),
        }
    }
}

impl<W: Write> Observer for TerminalRenderer<W> {
    fn on_expand(&mut self, cell: Cell, explored: usize, frontier: FrontierStats) {
        self.mark(cell, Mark::Scan);
        let status = self.status_line(explored, frontier);
        self.draw(&status);
    }

    fn on_visited(&mut self, cell: Cell) {
        self.mark(cell, Mark::Visited);
    }

    fn on_path_step(&mut self, cell: Cell) {
        if Some(cell) == self.goal {
            return;
        }
        self.mark(cell, Mark::Step);
        self.draw("Drawing Final Path...");
    }
}
