// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Street Odds hand classifier and odds engine.
//!
//! Given the two hole cards and the known board cards, the [OddsEngine]
//! computes the odds of making at least each hand category by the flop, the
//! turn, or the river. With at most two cards to come the odds are exact, all
//! the runouts are enumerated, with more cards to come the odds are estimated
//! from [MONTE_CARLO_TRIALS] random runouts.
//!
//! ```
//! # use streetodds_odds::*;
//! let hole = HoleCards::new("As".parse().unwrap(), "Ah".parse().unwrap());
//! let flop = ["Kd", "9c", "4s"].map(|c| c.parse::<Card>().unwrap());
//! let board = Board::with_cards(&flop);
//!
//! let odds = OddsEngine::default()
//!     .compute_odds(&hole, &board, Street::River)
//!     .unwrap();
//!
//! let result = odds.result().unwrap();
//! assert_eq!(result.runs(), 1_081);
//! assert_eq!(result.get(HandCategory::Pair), 100.0);
//! assert!(result.get(HandCategory::Trips) > result.get(HandCategory::FullHouse));
//! ```
//!
//! Once the seven cards are known [classify_best_hand] gives the hand
//! category.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod engine;
pub use engine::{
    EngineConfig, MAX_EXACT_DRAW, MONTE_CARLO_TRIALS, Odds, OddsEngine, OddsError, Report,
};

pub mod hand;
pub use hand::{CategoryInfo, HandCategory, MadeHands, classify_best_hand, is_straight};

pub mod stage;
pub use stage::{Board, HoleCards, ParseStreetError, Stage, Street};

pub mod tally;
pub use tally::{OddsResult, Tally};

// Reexport cards types.
pub use streetodds_cards::{Card, Deck, Rank, Suit};
