pub mod comparison;
pub mod config;
pub mod renderer;

use std::{
    fmt,
    io::{Stdout, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use crossterm::{
    cursor,
    event::{self, KeyCode, KeyModifiers},
    queue, terminal,
};

pub use comparison::{ComparisonRow, render_table};
pub use config::Config;
use renderer::TerminalRenderer;

use crate::{
    error::MazeError,
    generators::generate_maze,
    maze::Grid,
    solvers::{NoopObserver, SearchEngine, Solver},
};

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Maze(MazeError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "terminal error: {e}"),
            Self::Maze(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Maze(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<MazeError> for AppError {
    fn from(e: MazeError) -> Self {
        AppError::Maze(e)
    }
}

/// Result of a full comparison run.
#[derive(Debug, Clone)]
pub struct RaceReport {
    pub rows: Vec<ComparisonRow>,
    /// The user stopped the run before every solver finished.
    pub cancelled: bool,
}

/// Puts the terminal in raw mode on the alternate screen and restores it when dropped.
struct TerminalSession;

impl TerminalSession {
    fn start(stdout: &mut Stdout) -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        TerminalSession::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(TerminalSession)
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    /// even if the panic occurs in a different thread
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = TerminalSession::restore(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    fn restore(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = TerminalSession::restore(&mut std::io::stdout()) {
            tracing::warn!("[app] failed to restore terminal: {}", e);
        }
    }
}

pub struct App {
    config: Config,
    /// How often the input thread checks whether the race is over
    input_poll_timeout: Duration,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            input_poll_timeout: Duration::from_millis(100),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate one maze and race every solver over it.
    ///
    /// With animation on, the terminal is taken over for the duration of the race and Esc or
    /// Ctrl-C stops it early.
    pub fn run(&self, stdout: &mut Stdout) -> Result<RaceReport, AppError> {
        let grid = generate_maze(self.config.width, self.config.height, self.config.seed)?;
        tracing::info!(
            "[app] generated {}x{} maze (seed: {:?})",
            self.config.width,
            self.config.height,
            self.config.seed
        );

        if !self.config.animate {
            return self.race(&grid, &AtomicBool::new(false));
        }

        let cancel = Arc::new(AtomicBool::new(false));
        let done = Arc::new(AtomicBool::new(false));

        let session = TerminalSession::start(stdout)?;

        let input_poll_timeout = self.input_poll_timeout;
        let cancel_for_input = cancel.clone();
        let done_for_input = done.clone();
        let input_thread_handle = std::thread::spawn(move || -> std::io::Result<()> {
            App::listen_for_interrupt(input_poll_timeout, &cancel_for_input, &done_for_input)
        });

        let report = self.race(&grid, &cancel);

        done.store(true, Ordering::Relaxed);
        match input_thread_handle.join() {
            Ok(Err(e)) => tracing::warn!("[app] input thread failed: {}", e),
            Err(_) => tracing::warn!("[app] input thread panicked"),
            Ok(Ok(())) => {}
        }
        drop(session);

        report
    }

    /// Run every solver in turn over the same maze, stopping early once `cancel` is set.
    fn race(&self, grid: &Grid, cancel: &AtomicBool) -> Result<RaceReport, AppError> {
        let mut rows = Vec::new();

        for solver in Solver::ALL {
            if cancel.load(Ordering::Relaxed) {
                break;
            }

            let started = Instant::now();
            let result = if self.config.animate {
                let mut renderer = TerminalRenderer::new(
                    std::io::stdout(),
                    grid,
                    solver,
                    self.config.step_delay,
                );
                let result = SearchEngine::new(&mut renderer)
                    .with_cancel(cancel)
                    .solve(grid, solver)?;
                renderer.finish()?;
                result
            } else {
                SearchEngine::new(&mut NoopObserver)
                    .with_cancel(cancel)
                    .solve(grid, solver)?
            };
            let duration = started.elapsed();

            if let Some(row) = ComparisonRow::from_result(&result, duration) {
                rows.push(row);
            }

            if self.config.animate && !cancel.load(Ordering::Relaxed) {
                std::thread::sleep(self.config.pause_between);
            }
        }

        let cancelled = cancel.load(Ordering::Relaxed);
        if cancelled {
            tracing::info!("[app] race stopped by user");
        }
        Ok(RaceReport { rows, cancelled })
    }

    /// Watch for Esc or Ctrl-C and raise `cancel`. Raw mode swallows the usual SIGINT, so the
    /// key press is read directly. Exits once `done` or `cancel` is set.
    fn listen_for_interrupt(
        event_poll_timeout: Duration,
        cancel: &AtomicBool,
        done: &AtomicBool,
    ) -> std::io::Result<()> {
        loop {
            if done.load(Ordering::Relaxed) || cancel.load(Ordering::Relaxed) {
                return Ok(());
            }

            // Poll for events with a timeout so the flags are checked regularly
            if !event::poll(event_poll_timeout)? {
                continue;
            }

            if let event::Event::Key(key_event) = event::read()? {
                if key_event.kind != event::KeyEventKind::Press {
                    continue;
                }
                let interrupt = match key_event.code {
                    KeyCode::Esc => true,
                    KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
                    _ => false,
                };
                if interrupt {
                    tracing::debug!("[input loop] interrupt key pressed, cancelling");
                    cancel.store(true, Ordering::Relaxed);
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config(seed: u64) -> Config {
        Config {
            width: 15,
            height: 9,
            seed: Some(seed),
            animate: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_race_without_animation_reports_every_solver() {
        let app = App::new(quiet_config(42));
        let report = app.run(&mut std::io::stdout()).unwrap();
        assert!(!report.cancelled);
        assert_eq!(
            report.rows.iter().map(|r| r.solver).collect::<Vec<_>>(),
            Solver::ALL.to_vec()
        );
        // A perfect maze has a single route, so every solver walks the same number of steps
        assert!(report.rows.windows(2).all(|w| w[0].steps == w[1].steps));
    }

    #[test]
    fn test_race_rejects_even_dimensions() {
        let app = App::new(Config {
            width: 10,
            ..quiet_config(1)
        });
        let err = app.run(&mut std::io::stdout()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Maze(MazeError::InvalidDimensions { width: 10, .. })
        ));
    }
}
