//! Statistics aggregation command for round record analysis.
//!
//! Reads a JSONL round record file and reports totals: rounds, hands,
//! split pots, and how often each hand category occurred. Malformed lines
//! are counted and reported as warnings rather than aborting the run.

use crate::error::CliError;
use crate::ui;
use showdown_engine::hand::Category;
use showdown_engine::logger::RoundRecord;
use std::io::Write;

/// Handle the stats command.
///
/// # Arguments
///
/// * `input` - Path to a JSONL round record file
/// * `out` - Output stream for the statistics report
/// * `err` - Output stream for warnings about corrupted records
///
/// # Returns
///
/// `Ok(())` when at least one record parses (or the file is empty);
/// `CliError::InvalidInput` when the file holds only corrupted lines.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(&input)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", input, e)))?;

    const CATEGORIES: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    let mut rounds = 0u64;
    let mut hands = 0u64;
    let mut split_pots = 0u64;
    let mut corrupted = 0u64;
    let mut by_category = [0u64; 9];

    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        let rec: RoundRecord = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(_) => {
                corrupted += 1;
                continue;
            }
        };

        rounds += 1;
        hands += rec.hands.len() as u64;
        if rec.winners.len() > 1 {
            split_pots += 1;
        }
        for entry in &rec.hands {
            if let Some(slot) = CATEGORIES.iter().position(|&c| c == entry.category) {
                by_category[slot] += 1;
            }
        }
    }

    if corrupted > 0 {
        ui::display_warning(err, &format!("{} corrupted record(s) skipped", corrupted))?;
    }
    if rounds == 0 && corrupted > 0 {
        return Err(CliError::InvalidInput(format!(
            "no valid records in {}",
            input
        )));
    }

    writeln!(out, "Rounds: {}", rounds)?;
    writeln!(out, "Hands: {}", hands)?;
    writeln!(out, "Split pots: {}", split_pots)?;
    writeln!(out, "Categories:")?;
    for (slot, category) in CATEGORIES.iter().enumerate() {
        writeln!(out, "  {}: {}", category, by_category[slot])?;
    }

    Ok(())
}
