use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "not enough cards in the deck: {requested} hand(s) need {required} cards, {available} available"
    )]
    NotEnoughCards {
        requested: usize,
        required: usize,
        available: usize,
    },
}
