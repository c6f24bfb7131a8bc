use std::{path::Path, process::ExitCode};

use clap::Parser;
use crossterm::style::Stylize;
use mazerace::app::{App, Config, render_table};
use tracing_appender::non_blocking::WorkerGuard;

/// Send tracing output to `log_file`, since the terminal belongs to the renderer.
/// The returned guard flushes pending lines when dropped.
fn init_logging(log_file: &Path) -> WorkerGuard {
    let directory = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("mazerace.log"));
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let level = std::env::var("MAZERACE_LOG")
        .ok()
        .and_then(|v| v.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

fn main() -> ExitCode {
    let config = Config::parse();

    let _guard = init_logging(&config.log_file);
    tracing::info!("Starting with {:?}", config);

    let app = App::new(config);
    let report = match app.run(&mut std::io::stdout()) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if report.cancelled {
        println!("\n  {}", "Stopped by user.".yellow());
    }
    if !report.rows.is_empty() {
        println!("\n{}", render_table(&report.rows).bold());
    }
    if let Some(seed) = app.config().seed {
        println!("  Seed: {seed}\n");
    }
    ExitCode::SUCCESS
}
