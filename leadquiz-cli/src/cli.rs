//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which front end runs the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Frontend {
    /// Full-screen terminal UI
    Tui,
    /// Line-by-line prompts
    Cli,
}

/// CLI arguments for leadquiz
#[derive(Parser, Debug)]
#[command(name = "leadquiz")]
#[command(author, version, about = "Auto warranty quiz that collects a sales lead")]
#[command(long_about = r#"
Walks through a short auto warranty quiz: vehicle, mileage, timing, location
and contact details. The finished answers are written as one JSON line.

Example:
  leadquiz
  leadquiz --frontend cli --output leads.jsonl
  leadquiz --instant --log-file leadquiz.log -vv
"#)]
pub struct Cli {
    /// Front end to run the quiz in
    #[arg(short, long, value_enum, default_value = "tui", env = "LEADQUIZ_FRONTEND")]
    pub frontend: Frontend,

    /// Append the lead to this file instead of printing it
    #[arg(short, long, value_name = "PATH", env = "LEADQUIZ_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Show questions immediately, without the typing animation
    #[arg(long)]
    pub instant: bool,

    /// Disable colors in the line-by-line prompts
    #[arg(long)]
    pub plain: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH", env = "LEADQUIZ_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
