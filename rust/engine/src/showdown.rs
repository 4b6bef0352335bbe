use std::cmp::Ordering;

use crate::hand::{compare_hands, evaluate_hand, Hand, HandStrength};

/// A hand paired with its evaluated strength.
///
/// [`ScoredHand::score`] is the only constructor, so winner selection can
/// rely on every input having been evaluated.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoredHand {
    hand: Hand,
    strength: HandStrength,
}

impl ScoredHand {
    /// Evaluates a hand and pairs it with its strength.
    pub fn score(hand: Hand) -> Self {
        let strength = evaluate_hand(&hand.cards);
        Self { hand, strength }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn strength(&self) -> &HandStrength {
        &self.strength
    }
}

/// Indices of the hands tied for best, in input order.
///
/// Maintains a running best strength: a strictly stronger hand replaces the
/// winner set, an exactly equal one joins it (split pot), everything else is
/// dropped. Non-empty input always yields at least one winner, every returned
/// index carries an identical strength, and every excluded hand is strictly
/// weaker under (category, tie-break) order.
pub fn winner_indices(hands: &[ScoredHand]) -> Vec<usize> {
    let mut winners: Vec<usize> = Vec::new();
    let mut best: Option<&HandStrength> = None;

    for (i, h) in hands.iter().enumerate() {
        match best {
            None => {
                winners.push(i);
                best = Some(&h.strength);
            }
            Some(current) => match compare_hands(&h.strength, current) {
                Ordering::Greater => {
                    winners.clear();
                    winners.push(i);
                    best = Some(&h.strength);
                }
                Ordering::Equal => winners.push(i),
                Ordering::Less => {}
            },
        }
    }

    winners
}

/// The hands tied for best, borrowed from the input in input order.
pub fn select_winners(hands: &[ScoredHand]) -> Vec<&ScoredHand> {
    winner_indices(hands).into_iter().map(|i| &hands[i]).collect()
}
