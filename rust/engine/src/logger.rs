use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::engine::RoundResult;
use crate::hand::Category;

/// One hand inside a round record: its cards in deal order plus the
/// evaluation output (category and tie-break sequence).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEntry {
    pub cards: Vec<Card>,
    pub category: Category,
    pub kickers: [u8; 5],
}

/// Complete record of a single round, serialized one JSON object per line.
/// A record never spans rounds.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// RNG seed used for the shuffle (enables deterministic replay)
    pub seed: Option<u64>,
    /// Every dealt hand, in deal order
    pub hands: Vec<HandEntry>,
    /// Indices into `hands` of the hands tied for best
    pub winners: Vec<usize>,
    /// Timestamp when the round was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Builds a record from a played round.
    pub fn from_result(round_id: String, result: &RoundResult) -> Self {
        let hands = result
            .hands
            .iter()
            .map(|h| HandEntry {
                cards: h.hand().cards.to_vec(),
                category: h.strength().category,
                kickers: h.strength().kickers,
            })
            .collect();

        Self {
            round_id,
            seed: Some(result.seed),
            hands,
            winners: result.winners.clone(),
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Writes round records to a JSONL file, assigning date-sequenced ids.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that assigns ids without writing anywhere.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
