// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Streets, known cards, and stage resolution.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use streetodds_cards::Card;

/// The street the odds are computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Hole cards and three board cards.
    Flop,
    /// Hole cards and four board cards.
    Turn,
    /// Hole cards and five board cards.
    River,
}

impl Street {
    /// All the streets in dealing order.
    pub const ALL: [Street; 3] = [Street::Flop, Street::Turn, Street::River];

    /// The total number of cards, hole and board, known at this street.
    pub fn card_count(&self) -> usize {
        match self {
            Street::Flop => 5,
            Street::Turn => 6,
            Street::River => 7,
        }
    }

    /// The number of board slots dealt by this street.
    pub fn board_slots(&self) -> usize {
        self.card_count() - HoleCards::SLOTS
    }

    /// The next street to be dealt for a board.
    ///
    /// With the turn or the river on the board this is the river, with a
    /// complete flop it is the turn, and the flop otherwise.
    pub fn for_board(board: &Board) -> Street {
        match board.filled_count() {
            4.. => Street::River,
            3 => Street::Turn,
            _ => Street::Flop,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        write!(f, "{street}")
    }
}

/// Error returned when parsing an unknown street name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid street '{0}', expected flop, turn, or river")]
pub struct ParseStreetError(String);

impl FromStr for Street {
    type Err = ParseStreetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flop" => Ok(Street::Flop),
            "turn" => Ok(Street::Turn),
            "river" => Ok(Street::River),
            _ => Err(ParseStreetError(s.to_string())),
        }
    }
}

/// The two player hole cards, each slot may be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleCards([Option<Card>; 2]);

impl HoleCards {
    /// The number of hole cards.
    pub const SLOTS: usize = 2;

    /// Creates hole cards with both cards known.
    pub fn new(c1: Card, c2: Card) -> Self {
        Self([Some(c1), Some(c2)])
    }

    /// Creates hole cards from slots.
    pub fn from_slots(slots: [Option<Card>; 2]) -> Self {
        Self(slots)
    }

    /// The hole cards slots.
    pub fn slots(&self) -> &[Option<Card>; 2] {
        &self.0
    }

    /// Sets a slot, panics if `idx` is not 0 or 1.
    pub fn set(&mut self, idx: usize, card: Option<Card>) {
        self.0[idx] = card;
    }

    /// Returns both cards if they are known.
    pub fn cards(&self) -> Option<[Card; 2]> {
        match self.0 {
            [Some(c1), Some(c2)] => Some([c1, c2]),
            _ => None,
        }
    }

    /// Iterates the known cards.
    pub fn filled(&self) -> impl Iterator<Item = Card> {
        let slots = self.0;
        slots.into_iter().flatten()
    }
}

/// The five board slots in dealing order, three for the flop then the turn
/// and the river. Each slot may be empty independently from the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board([Option<Card>; 5]);

impl Board {
    /// The number of board slots.
    pub const SLOTS: usize = 5;

    /// Creates a board from slots.
    pub fn from_slots(slots: [Option<Card>; 5]) -> Self {
        Self(slots)
    }

    /// Creates a board filling the first slots with the given cards.
    ///
    /// Panics if there are more than 5 cards.
    pub fn with_cards(cards: &[Card]) -> Self {
        assert!(cards.len() <= Self::SLOTS, "too many board cards");

        let mut board = Self::default();
        for (slot, card) in board.0.iter_mut().zip(cards) {
            *slot = Some(*card);
        }

        board
    }

    /// The board slots.
    pub fn slots(&self) -> &[Option<Card>; 5] {
        &self.0
    }

    /// Sets a slot, panics if `idx` is not in 0..5.
    pub fn set(&mut self, idx: usize, card: Option<Card>) {
        self.0[idx] = card;
    }

    /// Iterates the known cards in slot order.
    pub fn filled(&self) -> impl Iterator<Item = Card> {
        let slots = self.0;
        slots.into_iter().flatten()
    }

    /// The number of known cards.
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }

    /// Checks if all the five board cards are known.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|c| c.is_some())
    }
}

/// The known cards relevant to a street and how many cards are still to come.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    street: Street,
    known: Vec<Card>,
    needed: usize,
}

impl Stage {
    /// Resolves the stage for a street.
    ///
    /// The known cards are the hole cards and the cards in the board slots
    /// dealt by the street, later slots are ignored even if they are filled.
    pub fn resolve(hole: [Card; 2], board: &Board, street: Street) -> Self {
        let mut known = Vec::with_capacity(street.card_count());
        known.extend(hole);
        known.extend(board.0[..street.board_slots()].iter().flatten());

        let needed = street.card_count().saturating_sub(known.len());
        Self {
            street,
            known,
            needed,
        }
    }

    /// The street this stage was resolved for.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The known cards relevant to the street.
    pub fn known(&self) -> &[Card] {
        &self.known
    }

    /// The number of cards still to come to reach the street.
    pub fn needed(&self) -> usize {
        self.needed
    }
}
