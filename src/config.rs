//! Command-line arguments and the runtime configuration built from them.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::engine::AUTO_ADVANCE_DELAY;

pub const DEFAULT_DATA_DIR: &str = ".hausa-trainer";

#[derive(Parser, Debug)]
#[command(version, about = "Learn basic Hausa phrases in the terminal", long_about = None)]
pub struct Args {
    /// JSON file to load the quiz catalog from instead of the built-in one
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Directory holding the saved results
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Seconds before a finished quiz moves on to the next one
    #[arg(short, long, default_value_t = AUTO_ADVANCE_DELAY.as_secs())]
    pub auto_advance_secs: u64,

    /// Write logs to this file while the interactive trainer runs
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive trainer (default)
    Play,
    /// Print statistics and recent results
    Stats,
    /// Delete all saved results
    ClearHistory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub auto_advance_delay: Duration,
    pub log_file: Option<PathBuf>,
    pub command: Command,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            catalog: args.catalog,
            data_dir: args.data_dir,
            auto_advance_delay: Duration::from_secs(args.auto_advance_secs),
            log_file: args.log_file,
            command: args.command.unwrap_or(Command::Play),
        }
    }
}

impl Config {
    pub fn is_interactive(&self) -> bool {
        self.command == Command::Play
    }
}
