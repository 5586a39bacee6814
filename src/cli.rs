//! Command-line interface for the `rewind` driver.

use clap::Parser;

/// Rewind - play tic-tac-toe from JSON-line events on stdin
///
/// Each line is either `{"row": R, "col": C}` (0-indexed) to place a mark
/// or `{"step": N}` to jump to a history step.
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print the JSON schema of input events and exit
    #[arg(long)]
    pub schema: bool,

    /// Only print the final state after all events are read
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}
