//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// electograph - HTTP gateway for election-graph queries
#[derive(Parser, Debug)]
#[command(name = "electograph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the listen port
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
