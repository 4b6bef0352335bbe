use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Poker hand categories in ascending order of strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "HighCard",
            Category::Pair => "Pair",
            Category::TwoPair => "TwoPair",
            Category::ThreeOfAKind => "ThreeOfAKind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "FullHouse",
            Category::FourOfAKind => "FourOfAKind",
            Category::StraightFlush => "StraightFlush",
        };
        f.write_str(name)
    }
}

/// A five-card hand as dealt.
///
/// The fixed-size array makes any other hand size unrepresentable; there is
/// no runtime hand-size check anywhere in the evaluator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    /// The five cards, in deal order.
    pub cards: [Card; 5],
}

impl Hand {
    /// Number of cards in a hand.
    pub const SIZE: usize = 5;

    pub fn new(cards: [Card; 5]) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// The evaluated strength of a five-card hand.
///
/// `kickers` is the tie-break sequence: most significant slot first, compared
/// positionally between hands of equal category. Unused trailing slots hold 0.
///
/// Invariant: real ranks run 2..=14, so 0 (padding) and 1 (the ace of a wheel
/// straight played low) never collide with a rank a deck can produce.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandStrength {
    pub category: Category,
    pub kickers: [u8; 5],
}

/// Classifies five cards into a category and tie-break sequence.
///
/// Deterministic and invariant under any permutation of the input; the cards
/// themselves are never modified. Checks run in strength-maximizing order:
/// flush and straight on the rank-sorted cards first, then rank multiplicity
/// for the paired shapes.
pub fn evaluate_hand(cards: &[Card; 5]) -> HandStrength {
    let mut ranks = cards.map(|c| c.rank.value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_kickers(&ranks);

    match (flush, straight) {
        (true, Some(kickers)) => HandStrength {
            category: Category::StraightFlush,
            kickers,
        },
        (true, None) => HandStrength {
            category: Category::Flush,
            kickers: ranks,
        },
        (false, Some(kickers)) => HandStrength {
            category: Category::Straight,
            kickers,
        },
        (false, None) => classify_groups(&ranks),
    }
}

/// Compares two evaluated hands: category first, then the tie-break sequence
/// slot by slot. Suit never participates.
pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Tie-break sequence for a straight, or `None` if the sorted ranks are not
/// five consecutive values. `ranks` must be sorted descending.
///
/// The wheel (A-5-4-3-2) pins the sequence to [5,4,3,2,1] with the ace as the
/// in-band 1, so a wheel loses to a six-high straight and never ties a hand
/// that legitimately holds a 5-high run (none exists without the ace).
fn straight_kickers(ranks: &[u8; 5]) -> Option<[u8; 5]> {
    if *ranks == [14, 5, 4, 3, 2] {
        return Some([5, 4, 3, 2, 1]);
    }
    for (i, &r) in ranks.iter().enumerate() {
        if r != ranks[0] - i as u8 {
            return None;
        }
    }
    Some(*ranks)
}

/// Classifies a non-straight, non-flush hand by rank multiplicity.
///
/// Distinct ranks are ordered by (count descending, rank descending), which
/// yields the tie-break sequence directly for every paired shape: the quad or
/// triple leads, pairs follow, kickers trail in descending rank. No reliance
/// on grouping-structure iteration order.
fn classify_groups(ranks: &[u8; 5]) -> HandStrength {
    // (count, rank) per distinct rank; input is sorted descending.
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &r in ranks {
        match groups.iter_mut().find(|g| g.1 == r) {
            Some(g) => g.0 += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let mut kickers = [0u8; 5];
    for (slot, &(_, rank)) in groups.iter().enumerate() {
        kickers[slot] = rank;
    }

    let category = match (groups.len(), groups[0].0) {
        (2, 4) => Category::FourOfAKind,
        (2, _) => Category::FullHouse,
        (3, 3) => Category::ThreeOfAKind,
        (3, _) => Category::TwoPair,
        (4, _) => Category::Pair,
        _ => Category::HighCard,
    };

    HandStrength { category, kickers }
}
