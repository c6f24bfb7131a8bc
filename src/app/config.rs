use std::{num::ParseIntError, path::PathBuf, time::Duration};

use clap::{ArgAction, Parser};

/// Run settings for the comparison app.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    author,
    version,
    about,
    after_help = "Set MAZERACE_LOG to error, warn, info, debug or trace to change the log level."
)]
pub struct Config {
    /// Maze width in cells, odd and at least 3
    #[arg(long, value_name = "N", default_value_t = 35)]
    pub width: u16,

    /// Maze height in cells, odd and at least 3
    #[arg(long, value_name = "N", default_value_t = 17)]
    pub height: u16,

    /// Seed for reproducible mazes. Drawn from the OS when omitted.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Pause between animation frames, in milliseconds
    #[arg(
        long = "delay-ms",
        value_name = "MS",
        default_value = "100",
        value_parser = parse_millis
    )]
    pub step_delay: Duration,

    /// Pause after each solver finishes, before the next one starts
    #[arg(skip = Duration::from_secs(1))]
    pub pause_between: Duration,

    /// Skip the animation and only print the comparison table
    #[arg(long = "no-animate", action = ArgAction::SetFalse)]
    pub animate: bool,

    /// File that receives the tracing output
    #[arg(long, value_name = "PATH", default_value = "mazerace.log")]
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config::parse_from(["mazerace"])
    }
}

fn parse_millis(s: &str) -> Result<Duration, ParseIntError> {
    s.parse().map(Duration::from_millis)
}
