//! Simulation command handler for multi-round runs.
//!
//! Plays a number of independent rounds, each from a freshly seeded deck
//! (round i uses base seed + i so runs are reproducible), and optionally
//! records every round as one JSONL line.

use crate::config;
use crate::error::CliError;
use showdown_engine::engine::Engine;
use showdown_engine::logger::{RoundLogger, RoundRecord};
use std::io::Write;

/// Handle the sim command: play `rounds` rounds of `hands` hands each.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (must be >= 1)
/// * `hands` - Hands per round; falls back to the resolved configuration
/// * `seed` - Base RNG seed; round i plays with `seed + i`
/// * `output` - Optional JSONL path for round records
/// * `out` - Output stream for the summary
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure
pub fn handle_sim_command(
    rounds: u64,
    hands: Option<usize>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let num_hands = hands.unwrap_or(cfg.hands);
    if num_hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut logger = match output.as_deref() {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut split_pots = 0u64;
    for i in 0..rounds {
        let mut engine = Engine::new(Some(base_seed.wrapping_add(i)));
        let result = engine.play_round(num_hands)?;
        if result.winners.len() > 1 {
            split_pots += 1;
        }
        if let Some(logger) = logger.as_mut() {
            let record = RoundRecord::from_result(logger.next_id(), &result);
            logger.write(&record)?;
        }
    }

    writeln!(
        out,
        "Simulated {} round(s) of {} hand(s), base seed {}",
        rounds, num_hands, base_seed
    )?;
    writeln!(out, "Split pots: {}", split_pots)?;
    if let Some(path) = output {
        writeln!(out, "Records written to {}", path)?;
    }

    Ok(())
}
