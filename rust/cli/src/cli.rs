//! Command-line argument definitions for the `war` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "war", version, about = "Step-driven War card game")]
pub struct WarCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one game, one engine step at a time
    Play {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Face-down cards each side places per war
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        war_down: i64,
        /// Run to completion without prompting between steps
        #[arg(long)]
        auto: bool,
        /// Abort the game after this many steps
        #[arg(long, default_value_t = 10_000)]
        max_steps: u32,
    },
    /// Simulate many games and aggregate the outcomes
    Sim {
        /// Number of games to run
        #[arg(long)]
        games: u32,
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Face-down cards each side places per war
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        war_down: i64,
        /// Append one JSONL game record per game to this file
        #[arg(long)]
        output: Option<String>,
        /// Abort a single game after this many steps
        #[arg(long, default_value_t = 10_000)]
        max_steps: u32,
    },
    /// Aggregate statistics from a JSONL game record file
    Stats {
        /// Path to a file produced by `war sim --output`
        #[arg(long)]
        input: String,
    },
}
