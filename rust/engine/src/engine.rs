use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::showdown::{winner_indices, ScoredHand};

/// Orchestrates one round of five-card showdown: shuffle, deal N hands,
/// evaluate them, and pick the winner(s).
///
/// # Examples
///
/// ```
/// use showdown_engine::engine::Engine;
///
/// let mut engine = Engine::new(Some(12345));
/// let result = engine.play_round(4).expect("4 hands fit in one deck");
///
/// assert_eq!(result.hands.len(), 4);
/// assert!(!result.winners.is_empty());
///
/// // 11 hands would need 55 cards; the round aborts before dealing.
/// assert!(engine.play_round(11).is_err());
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    seed: u64,
}

/// The outcome of one round: every scored hand in deal order and the indices
/// of the hands tied for best.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub hands: Vec<ScoredHand>,
    pub winners: Vec<usize>,
    pub seed: u64,
}

impl Engine {
    /// Creates an engine, drawing a random seed when none is given so that
    /// unseeded rounds stay reproducible after the fact via [`Engine::seed`].
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            deck: Deck::new_with_seed(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle();
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Deals `num_hands` disjoint five-card hands from the deck.
    ///
    /// Fails with [`GameError::NotEnoughCards`] before any card moves when
    /// the deck cannot cover the request.
    pub fn deal_hands(&mut self, num_hands: usize) -> Result<Vec<Hand>, GameError> {
        // Saturating so absurd requests report NotEnoughCards instead of
        // overflowing the card count.
        let required = num_hands.saturating_mul(Hand::SIZE);
        let available = self.deck.remaining();
        if required > available {
            return Err(GameError::NotEnoughCards {
                requested: num_hands,
                required,
                available,
            });
        }

        let mut hands = Vec::with_capacity(num_hands);
        for _ in 0..num_hands {
            let mut cards = [Card {
                suit: Suit::Clubs,
                rank: Rank::Two,
            }; Hand::SIZE];
            for slot in cards.iter_mut() {
                // Cannot fail after the up-front size check.
                *slot = self.deck.deal_card().ok_or(GameError::NotEnoughCards {
                    requested: num_hands,
                    required,
                    available,
                })?;
            }
            hands.push(Hand::new(cards));
        }

        Ok(hands)
    }

    /// Plays a full round: fresh shuffle, deal, score every hand, select the
    /// winner(s). Evaluation never runs when dealing fails.
    pub fn play_round(&mut self, num_hands: usize) -> Result<RoundResult, GameError> {
        self.shuffle();
        let hands = self.deal_hands(num_hands)?;

        let hands: Vec<ScoredHand> = hands.into_iter().map(ScoredHand::score).collect();
        let winners = winner_indices(&hands);

        Ok(RoundResult {
            hands,
            winners,
            seed: self.seed,
        })
    }
}
