//! CLI argument parsing for calsum

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "calsum")]
#[command(version)]
#[command(about = "Summarize per-subject meeting time from a calendar export", long_about = None)]
pub struct Cli {
    /// Enable debug diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
