// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerhand cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = Card::new(Rank::Ten, Suit::Diamonds);
//! ```
//!
//! and to parse them from their string tokens:
//!
//! ```
//! # use pokerhand_cards::{Card, Rank, Suit};
//! let td: Card = "10D".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(td.to_string(), "10D");
//! ```
//!
//! The [Deck] type shuffles and deals cards:
//!
//! ```
//! # use pokerhand_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let pool = deck.deal_many(7);
//! assert_eq!(pool.len(), 7);
//! assert_eq!(deck.count(), Deck::SIZE - 7);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit};

mod deck;
pub use deck::Deck;
