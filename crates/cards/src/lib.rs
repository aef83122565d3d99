// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Street Odds cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use streetodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! assert_eq!(ah.rank().value(), 14);
//! ```
//!
//! and a [Deck] type for enumerating and sampling cards subsets from the deck.
//!
//! For example to iterate through all the 2 cards runouts after the flop:
//!
//! ```
//! # use streetodds_cards::{Card, Deck};
//! let mut deck = Deck::default();
//! for card in ["As", "Ah", "Kd", "9c", "4s"] {
//!     deck.remove(card.parse().unwrap());
//! }
//!
//! let mut counter = 0;
//! deck.for_each(2, |runout| {
//!     assert_eq!(runout.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_081);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use streetodds_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, nck};
