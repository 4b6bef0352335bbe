//! Deal command handler: one round of five-card showdown.
//!
//! Deals N five-card hands from a freshly shuffled deck, prints every hand in
//! deal order, then the winner(s) with their cards, category, and tie-break
//! sequence.
//! Supports optional seeding for deterministic dealing.

use crate::config;
use crate::error::CliError;
use showdown_engine::cards::rank_label;
use showdown_engine::engine::Engine;
use std::io::Write;

/// Handle the deal command.
///
/// `hands` and `seed` fall back to the resolved configuration; an unseeded
/// deal draws a random seed and prints it so the round can be replayed.
///
/// # Arguments
///
/// * `hands` - Number of hands to deal (a 52-card deck covers at most 10)
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, `CliError::Engine` when the deck cannot
/// cover the request, or `CliError` on I/O and configuration errors.
pub fn handle_deal_command(
    hands: Option<usize>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let num_hands = hands.unwrap_or(cfg.hands);
    if num_hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut engine = Engine::new(Some(seed));
    // Dealing fails before any evaluation when 5 * hands exceeds the deck
    let result = engine.play_round(num_hands)?;

    writeln!(out, "Seed: {}", seed)?;
    for (i, scored) in result.hands.iter().enumerate() {
        writeln!(out, "Hand {}: {}", i + 1, scored.hand())?;
    }

    writeln!(out, "{} Winner(s):", result.winners.len())?;
    for &w in &result.winners {
        let scored = &result.hands[w];
        let labels: Vec<String> = scored
            .strength()
            .kickers
            .iter()
            .map(|&k| rank_label(k))
            .collect();
        writeln!(
            out,
            "Hand {}: {}, {}, [{}]",
            w + 1,
            scored.hand(),
            scored.strength().category,
            labels.join(" ")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(4), Some(42), &mut out);

        assert!(result.is_ok(), "Deal command should succeed");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Hand 1:"), "Output should list hand 1");
        assert!(output.contains("Hand 4:"), "Output should list hand 4");
        assert!(output.contains("Winner(s):"), "Output should name winners");
    }

    #[test]
    #[serial]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(5), Some(12345), &mut out1).unwrap();
        handle_deal_command(Some(5), Some(12345), &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    #[serial]
    fn test_deal_command_too_many_hands() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(11), Some(1), &mut out);

        let err = result.expect_err("11 hands need 55 cards");
        assert!(err.to_string().contains("not enough cards in the deck"));
        // Nothing was dealt or evaluated
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Hand 1:"));
    }

    #[test]
    #[serial]
    fn test_deal_command_zero_hands_rejected() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(0), Some(1), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn test_deal_command_winner_line_format() {
        let mut out = Vec::new();
        handle_deal_command(Some(3), Some(7), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let winners_line = output
            .lines()
            .find(|l| l.contains("Winner(s):"))
            .expect("winner count line");
        let count: usize = winners_line
            .split_whitespace()
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!(count >= 1, "at least one winner");

        // Winner lines carry a category name and a bracketed tie-break list
        let after: Vec<&str> = output
            .lines()
            .skip_while(|l| !l.contains("Winner(s):"))
            .skip(1)
            .collect();
        assert_eq!(after.len(), count);
        for line in after {
            assert!(line.contains('['));
            assert!(line.ends_with(']'));
        }
    }
}
