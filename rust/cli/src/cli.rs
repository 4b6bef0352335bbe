//! Command-line argument definitions.
//!
//! Clap derive types for the `showdown` binary. Parsing happens in
//! [`crate::run`]; the handlers in [`crate::commands`] receive the already
//! validated values.

use clap::{Parser, Subcommand};

/// Five-card poker showdown CLI.
#[derive(Debug, Parser)]
#[command(name = "showdown", version, about = "Deal five-card poker hands and pick the winners")]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deal one round and show every hand and the winner(s)
    Deal {
        /// Number of hands to deal (at most 10 fit in one deck)
        #[arg(long)]
        hands: Option<usize>,
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play many rounds, optionally recording them as JSONL
    Sim {
        /// Number of rounds to play
        #[arg(long)]
        rounds: u64,
        /// Hands per round (at most 10 fit in one deck)
        #[arg(long)]
        hands: Option<usize>,
        /// Base RNG seed (round i uses seed + i)
        #[arg(long)]
        seed: Option<u64>,
        /// Path for the JSONL round records
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics from a JSONL round record file
    Stats {
        /// Path to the JSONL file
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
