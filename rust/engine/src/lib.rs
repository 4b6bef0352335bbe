//! # showdown-engine: Five-Card Poker Showdown Core
//!
//! A deterministic five-card poker engine: it classifies hands into
//! categories (high card through straight flush), derives tie-break
//! sequences for hands of equal category, and selects the winner(s) of a
//! round, including split pots. Reproducible RNG makes every round
//! replayable from its seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), deck construction, display names
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand classification and tie-break derivation
//! - [`showdown`] - Winner selection over scored hands
//! - [`engine`] - Round orchestration (shuffle, deal, score, select)
//! - [`logger`] - Round record serialization to JSONL
//! - [`errors`] - Error types for dealing
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_engine::hand::{evaluate_hand, Category};
//!
//! // Classify a five-card poker hand
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//! ];
//!
//! let strength = evaluate_hand(&cards);
//! assert_eq!(strength.category, Category::StraightFlush);
//! assert_eq!(strength.kickers, [14, 13, 12, 11, 10]);
//! ```
//!
//! ## Deterministic Rounds
//!
//! All outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use showdown_engine::engine::Engine;
//!
//! // Same seed produces the same deal and the same winners
//! let r1 = Engine::new(Some(42)).play_round(4).unwrap();
//! let r2 = Engine::new(Some(42)).play_round(4).unwrap();
//! assert_eq!(r1.winners, r2.winners);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod showdown;
