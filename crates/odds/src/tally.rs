// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cumulative category counters.
//!
//! Each run is credited to its best category and to every weaker category, so
//! the final percentages read as the odds of making *at least* a category. A
//! run that makes a flush counts toward the straight, trips, two pair, and pair
//! odds too, whether or not those categories are in the hand.
use serde::{Serialize, Serializer};

use crate::hand::HandCategory;

/// Position of an odds category in the counters, pair first.
fn slot(category: HandCategory) -> usize {
    debug_assert!(category != HandCategory::HighCard);
    category as usize - 1
}

/// Running counters for one odds computation.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    hits: [u64; 8],
    runs: u64,
}

impl Tally {
    /// Records a run given its best category.
    pub fn record(&mut self, best: HandCategory) {
        self.runs += 1;

        // HighCard is 0 so it credits nothing.
        for hits in &mut self.hits[..best as usize] {
            *hits += 1;
        }
    }

    /// The number of recorded runs.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// The number of runs that made at least the given category.
    pub fn hits(&self, category: HandCategory) -> u64 {
        match category {
            HandCategory::HighCard => self.runs,
            c => self.hits[slot(c)],
        }
    }

    /// Converts the counters to percentages.
    pub fn finish(self) -> OddsResult {
        let mut percentages = [0.0; 8];
        if self.runs > 0 {
            for (pct, hits) in percentages.iter_mut().zip(self.hits) {
                *pct = hits as f64 * 100.0 / self.runs as f64;
                assert!(
                    (0.0..=100.0).contains(&*pct),
                    "percentage {pct} out of range for {hits}/{} runs",
                    self.runs
                );
            }
        }

        OddsResult {
            percentages,
            runs: self.runs,
        }
    }
}

/// The odds of making at least each category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsResult {
    #[serde(serialize_with = "serialize_percentages")]
    percentages: [f64; 8],
    runs: u64,
}

impl OddsResult {
    /// The percentage, from 0 to 100, of runs that made at least `category`.
    ///
    /// Every run makes at least a high card.
    pub fn get(&self, category: HandCategory) -> f64 {
        match category {
            HandCategory::HighCard if self.runs > 0 => 100.0,
            HandCategory::HighCard => 0.0,
            c => self.percentages[slot(c)],
        }
    }

    /// The number of runs these odds were computed from.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Iterates the odds categories and their percentage, from the strongest
    /// to the weakest category.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, f64)> + '_ {
        HandCategory::ODDS.into_iter().map(move |c| (c, self.get(c)))
    }
}

fn serialize_percentages<S>(percentages: &[f64; 8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(
        HandCategory::ODDS
            .iter()
            .map(|c| (c, percentages[slot(*c)])),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use HandCategory::*;

    #[test]
    fn cascade_credits_weaker_categories() {
        let mut tally = Tally::default();
        tally.record(Flush);

        assert_eq!(tally.runs(), 1);
        for c in [Flush, Straight, Trips, TwoPair, Pair] {
            assert_eq!(tally.hits(c), 1, "{c}");
        }
        for c in [StraightFlush, Quads, FullHouse] {
            assert_eq!(tally.hits(c), 0, "{c}");
        }
    }

    #[test]
    fn high_card_credits_nothing() {
        let mut tally = Tally::default();
        tally.record(HighCard);
        tally.record(HighCard);

        assert_eq!(tally.runs(), 2);
        assert!(HandCategory::ODDS.iter().all(|c| tally.hits(*c) == 0));
        assert_eq!(tally.hits(HighCard), 2);

        let odds = tally.finish();
        assert!(odds.iter().all(|(_, pct)| pct == 0.0));
        assert_eq!(odds.get(HighCard), 100.0);
    }

    #[test]
    fn percentages() {
        let mut tally = Tally::default();
        tally.record(StraightFlush);
        tally.record(Pair);
        tally.record(Trips);
        tally.record(HighCard);

        let odds = tally.finish();
        assert_eq!(odds.runs(), 4);
        assert_eq!(odds.get(StraightFlush), 25.0);
        assert_eq!(odds.get(Quads), 25.0);
        assert_eq!(odds.get(Straight), 25.0);
        assert_eq!(odds.get(Trips), 50.0);
        assert_eq!(odds.get(TwoPair), 50.0);
        assert_eq!(odds.get(Pair), 75.0);

        let pcts = odds.iter().map(|(_, p)| p).collect::<Vec<_>>();
        assert!(pcts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn no_runs() {
        let odds = Tally::default().finish();
        assert_eq!(odds.runs(), 0);
        assert_eq!(odds.get(HighCard), 0.0);
        assert!(odds.iter().all(|(_, pct)| pct == 0.0));
    }

    #[test]
    fn odds_serde() {
        let mut tally = Tally::default();
        tally.record(TwoPair);
        tally.record(Pair);

        let json = serde_json::to_value(tally.finish()).unwrap();
        assert_eq!(json["runs"], 2);
        assert_eq!(json["percentages"]["PAIR"], 100.0);
        assert_eq!(json["percentages"]["TWO_PAIR"], 50.0);
        assert_eq!(json["percentages"]["STRAIGHT_FLUSH"], 0.0);
        assert_eq!(json["percentages"].as_object().unwrap().len(), 8);
    }
}
