//! Command-line options for launching the visualizer.

use std::path::PathBuf;

use clap::Parser;

use crate::animate::DEFAULT_STEP_DELAY_MS;

/// Startup options parsed from the command line.
#[derive(Debug, Parser)]
#[command(version, about = "A terminal maze editor and pathfinding visualizer")]
pub struct Cli {
    /// Board file (.maze) to open straight into the editor.
    pub board: Option<PathBuf>,

    /// Initial delay between animation frames, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub delay: u64,
}
