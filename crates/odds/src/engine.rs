// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds engine.
//!
//! The engine resolves the cards relevant to the target street, then either
//! enumerates every runout when at most two cards are missing or samples
//! [MONTE_CARLO_TRIALS] random runouts, and tallies the best category of each
//! completed hand.
use ahash::AHashSet;
use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::Serialize;
use thiserror::Error;

use streetodds_cards::{Card, Deck, nck};

use crate::{
    hand::{HandCategory, classify_best_hand},
    stage::{Board, HoleCards, Stage, Street},
    tally::{OddsResult, Tally},
};

/// The number of random runouts sampled when more than
/// [MAX_EXACT_DRAW] cards are missing.
pub const MONTE_CARLO_TRIALS: usize = 5_000;

/// The largest number of missing cards for which all runouts are enumerated.
pub const MAX_EXACT_DRAW: usize = 2;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The number of random runouts for the Monte Carlo path.
    pub trials: usize,
    /// The largest number of missing cards for the exact path.
    pub max_exact_draw: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trials: MONTE_CARLO_TRIALS,
            max_exact_draw: MAX_EXACT_DRAW,
        }
    }
}

/// Odds engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OddsError {
    /// The same card is in more than one slot.
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
}

/// The outcome of an odds computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum Odds {
    /// The hole cards are not both known yet.
    Indeterminate,
    /// The computed odds.
    Computed(OddsResult),
}

impl Odds {
    /// The computed odds if any.
    pub fn result(&self) -> Option<&OddsResult> {
        match self {
            Odds::Indeterminate => None,
            Odds::Computed(result) => Some(result),
        }
    }
}

/// Everything a front end shows for a hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The street the odds were computed for.
    pub street: Street,
    /// The odds for the street.
    pub odds: Odds,
    /// The hand category once all seven cards are known.
    pub best_hand: Option<HandCategory>,
}

/// Computes the odds of making each hand category by a street.
#[derive(Debug, Clone, Default)]
pub struct OddsEngine {
    config: EngineConfig,
}

impl OddsEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the odds of making at least each category by `street`.
    ///
    /// Returns [Odds::Indeterminate] if a hole card is missing. Board cards in
    /// slots after the street are ignored but they are not dealt again.
    pub fn compute_odds(
        &self,
        hole: &HoleCards,
        board: &Board,
        street: Street,
    ) -> Result<Odds, OddsError> {
        let mut rng = SmallRng::from_os_rng();
        self.compute_odds_with_rng(&mut rng, hole, board, street)
    }

    /// Same as [OddsEngine::compute_odds] with the given generator for the
    /// Monte Carlo path.
    pub fn compute_odds_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        hole: &HoleCards,
        board: &Board,
        street: Street,
    ) -> Result<Odds, OddsError> {
        let selected = selected_cards(hole, board)?;
        trace!("Computing {street} odds for {selected:?}");

        let Some(hole) = hole.cards() else {
            return Ok(Odds::Indeterminate);
        };

        let stage = Stage::resolve(hole, board, street);

        let mut deck = Deck::default();
        for card in selected {
            deck.remove(card);
        }

        let known = stage.known();
        let needed = stage.needed();
        let total = known.len() + needed;

        let mut hand = [hole[0]; 7];
        hand[..known.len()].copy_from_slice(known);

        let mut tally = Tally::default();
        let record = |runout: &[Card]| {
            hand[known.len()..total].copy_from_slice(runout);
            tally.record(classify_best_hand(&hand[..total]));
        };

        if needed <= self.config.max_exact_draw {
            debug!(
                "{street}: enumerating {} runouts of {needed} cards from {} cards",
                nck(deck.count(), needed),
                deck.count()
            );
            deck.for_each(needed, record);
        } else {
            debug!(
                "{street}: sampling {} runouts of {needed} cards from {} cards",
                self.config.trials,
                deck.count()
            );
            deck.sample_with(rng, self.config.trials, needed, record);
        }

        Ok(Odds::Computed(tally.finish()))
    }

    /// The hand category once both hole cards and the five board cards are
    /// known, `None` otherwise.
    pub fn best_hand(&self, hole: &HoleCards, board: &Board) -> Option<HandCategory> {
        let hole = hole.cards()?;
        if !board.is_complete() {
            return None;
        }

        let cards = hole.into_iter().chain(board.filled()).collect::<Vec<_>>();
        Some(classify_best_hand(&cards))
    }

    /// Computes the odds and the best hand, if `street` is `None` the street
    /// is chosen from the board with [Street::for_board].
    pub fn evaluate(
        &self,
        hole: &HoleCards,
        board: &Board,
        street: Option<Street>,
    ) -> Result<Report, OddsError> {
        let street = street.unwrap_or_else(|| Street::for_board(board));
        let odds = self.compute_odds(hole, board, street)?;
        let best_hand = self.best_hand(hole, board);

        Ok(Report {
            street,
            odds,
            best_hand,
        })
    }
}

/// Returns all the known cards checking that none is repeated.
fn selected_cards(hole: &HoleCards, board: &Board) -> Result<Vec<Card>, OddsError> {
    let mut seen = AHashSet::with_capacity(HoleCards::SLOTS + Board::SLOTS);
    let cards = hole.filled().chain(board.filled()).collect::<Vec<_>>();
    for card in &cards {
        if !seen.insert(*card) {
            return Err(OddsError::DuplicateCard(*card));
        }
    }

    Ok(cards)
}
