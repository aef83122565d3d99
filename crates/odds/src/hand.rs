// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and classification.
//!
//! A hand of 2 to 7 cards is classified into a [MadeHands] set where each
//! category is detected independently from the others, so that a hand with a
//! flush and a straight contains both even when it is not a straight flush.
//! The strongest category in the set is the hand [MadeHands::best] category.
use serde::{Deserialize, Serialize};
use std::fmt;

use streetodds_cards::{Card, Suit};

/// A hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandCategory {
    /// No other category, only used as a classification fallback.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    Trips,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    Quads,
    /// Five consecutive ranks of the same suit.
    StraightFlush,
}

/// Display data for a hand category.
#[derive(Debug)]
pub struct CategoryInfo {
    /// The category name.
    pub name: &'static str,
    /// How often the category shows up in 7 cards hold 'em hands.
    pub frequency: &'static str,
}

/// Indexed by the category discriminant.
static CATEGORY_INFO: [CategoryInfo; 9] = [
    CategoryInfo {
        name: "High Card",
        frequency: "1 out of 5.7 hold 'em hands",
    },
    CategoryInfo {
        name: "Pair",
        frequency: "1 out of 2.4 hold 'em hands",
    },
    CategoryInfo {
        name: "Two Pair",
        frequency: "1 out of 4 hold 'em hands",
    },
    CategoryInfo {
        name: "Three of a Kind",
        frequency: "1 out of 20 hold 'em hands",
    },
    CategoryInfo {
        name: "Straight",
        frequency: "1 out of 21 hold 'em hands",
    },
    CategoryInfo {
        name: "Flush",
        frequency: "1 out of 33 hold 'em hands",
    },
    CategoryInfo {
        name: "Full House",
        frequency: "1 out of 39 hold 'em hands",
    },
    CategoryInfo {
        name: "Four of a Kind",
        frequency: "1 out of 594 hold 'em hands",
    },
    CategoryInfo {
        name: "Straight Flush",
        frequency: "1 out of 3,217 hold 'em hands",
    },
];

impl HandCategory {
    /// The categories tracked by the odds table, from the strongest to the
    /// weakest.
    pub const ODDS: [HandCategory; 8] = [
        HandCategory::StraightFlush,
        HandCategory::Quads,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::Trips,
        HandCategory::TwoPair,
        HandCategory::Pair,
    ];

    /// The category display data.
    pub fn info(&self) -> &'static CategoryInfo {
        &CATEGORY_INFO[*self as usize]
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The set of categories made by a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MadeHands(u16);

impl MadeHands {
    /// Classifies a hand of 2 to 7 cards.
    ///
    /// Hands with less than 2 cards make nothing.
    pub fn classify(cards: &[Card]) -> Self {
        let mut made = Self::default();
        if cards.len() < 2 {
            return made;
        }

        let mut suit_counts = [0usize; 4];
        let mut rank_counts = [0u8; 13];
        for card in cards {
            suit_counts[card.suit() as usize] += 1;
            rank_counts[card.rank() as usize] += 1;
        }

        for suit in Suit::suits() {
            if suit_counts[suit as usize] >= 5 {
                made.insert(HandCategory::Flush);

                let values = cards
                    .iter()
                    .filter(|c| c.suit() == suit)
                    .map(|c| c.rank().value());
                if is_straight(values) {
                    made.insert(HandCategory::StraightFlush);
                }
            }
        }

        if is_straight(cards.iter().map(|c| c.rank().value())) {
            made.insert(HandCategory::Straight);
        }

        rank_counts.sort_unstable_by(|a, b| b.cmp(a));
        match (rank_counts[0], rank_counts[1]) {
            (4.., _) => made.insert(HandCategory::Quads),
            (3, second) => {
                made.insert(HandCategory::Trips);
                if second >= 2 {
                    made.insert(HandCategory::FullHouse);
                }
            }
            (2, second) => {
                made.insert(HandCategory::Pair);
                if second >= 2 {
                    made.insert(HandCategory::TwoPair);
                }
            }
            _ => {}
        }

        made
    }

    /// Checks if the hand makes the given category.
    pub fn contains(&self, category: HandCategory) -> bool {
        self.0 & (1 << category as u16) != 0
    }

    /// Checks if the hand makes no category.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The strongest category made by the hand, or [HandCategory::HighCard].
    pub fn best(&self) -> HandCategory {
        HandCategory::ODDS
            .into_iter()
            .find(|c| self.contains(*c))
            .unwrap_or(HandCategory::HighCard)
    }

    /// Iterates the made categories from the strongest to the weakest.
    pub fn iter(&self) -> impl Iterator<Item = HandCategory> {
        let made = *self;
        HandCategory::ODDS
            .into_iter()
            .filter(move |c| made.contains(*c))
    }

    fn insert(&mut self, category: HandCategory) {
        self.0 |= 1 << category as u16;
    }
}

/// Classifies the cards and returns their strongest category.
///
/// ```
/// # use streetodds_odds::{Card, HandCategory, classify_best_hand};
/// let cards = ["As", "Ah", "Ad", "Ac", "2s", "2h", "2d"]
///     .iter()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
/// assert_eq!(classify_best_hand(&cards), HandCategory::Quads);
/// ```
pub fn classify_best_hand(cards: &[Card]) -> HandCategory {
    MadeHands::classify(cards).best()
}

/// Checks if the rank values (2 to 14) contain five consecutive ranks.
///
/// Duplicates are allowed and an ace also counts as 1 for the A-2-3-4-5
/// straight.
pub fn is_straight<I>(values: I) -> bool
where
    I: IntoIterator<Item = u8>,
{
    let mut mask = 0u32;
    for v in values {
        debug_assert!((2..=14).contains(&v), "invalid rank value {v}");
        mask |= 1 << v;
    }

    // Wheel.
    if mask & (1 << 14) != 0 {
        mask |= 1 << 1;
    }

    let mut run = 0;
    for v in (1..=14).rev() {
        if mask & (1 << v) != 0 {
            run += 1;
            if run == 5 {
                return true;
            }
        } else {
            run = 0;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn made(s: &str) -> Vec<HandCategory> {
        MadeHands::classify(&cards(s)).iter().collect()
    }

    #[test]
    fn straight_detector() {
        assert!(is_straight([10, 11, 12, 13, 14]));
        assert!(is_straight([14, 2, 3, 4, 5]));
        assert!(is_straight([5, 4, 3, 2, 14, 14, 9]));
        assert!(is_straight([2, 3, 4, 5, 6, 7, 8]));
        assert!(is_straight([9, 9, 8, 7, 6, 5, 5]));

        assert!(!is_straight(Vec::new()));
        assert!(!is_straight([2, 3, 4, 5]));
        assert!(!is_straight([2, 3, 4, 5, 7, 8, 9]));
        assert!(!is_straight([13, 14, 2, 3, 4]));
        assert!(!is_straight([14, 14, 14, 14, 2]));
    }

    #[test]
    fn classify_short_hands() {
        assert!(MadeHands::classify(&[]).is_empty());
        assert!(MadeHands::classify(&cards("As")).is_empty());
        assert_eq!(made("As Ah"), vec![HandCategory::Pair]);
        assert!(MadeHands::classify(&cards("As Kh")).is_empty());
    }

    #[test]
    fn classify_rank_categories() {
        use HandCategory::*;

        assert_eq!(made("As Ah Kd 9c 4s"), vec![Pair]);
        assert_eq!(made("As Ah Kd Kc 4s"), vec![TwoPair, Pair]);
        assert_eq!(made("As Ah Kd Kc 4s 4h"), vec![TwoPair, Pair]);
        assert_eq!(made("As Ah Ad 9c 4s"), vec![Trips]);
        assert_eq!(made("As Ah Ad 9c 9s"), vec![FullHouse, Trips]);
        assert_eq!(made("As Ah Ad 9c 9s 9d"), vec![FullHouse, Trips]);
        assert_eq!(made("As Ah Ad Ac 4s"), vec![Quads]);

        // Only the largest group counts.
        assert_eq!(made("As Ah Ad Ac 2s 2h 2d"), vec![Quads]);
    }

    #[test]
    fn classify_flush_and_straight() {
        use HandCategory::*;

        assert_eq!(made("2h 7h 9h Jh Kh"), vec![Flush]);
        assert_eq!(made("5c 6d 7h 8s 9c"), vec![Straight]);
        assert_eq!(made("5h 6h 7h 8h 9h"), vec![StraightFlush, Flush, Straight]);

        // A flush and a straight that are not a straight flush.
        assert_eq!(made("2h 7h 9h Jh Kh Qd Th"), vec![Flush, Straight]);
        assert_eq!(made("2h 7h 9h Jh Kh Qd Td"), vec![Flush, Straight]);
        assert_eq!(
            made("9h Th Jh Qh Kh 9d 9s"),
            vec![StraightFlush, Flush, Straight, Trips]
        );
    }

    #[test]
    fn classify_wheel() {
        let wheel = cards("As 2h 3d 4c 5s");
        let hands = MadeHands::classify(&wheel);
        assert!(hands.contains(HandCategory::Straight));
        assert!(!hands.contains(HandCategory::StraightFlush));
        assert!(!hands.contains(HandCategory::Flush));

        let steel = cards("Ad 2d 3d 4d 5d Kc");
        assert_eq!(classify_best_hand(&steel), HandCategory::StraightFlush);
    }

    #[test]
    fn best_hand() {
        assert_eq!(
            classify_best_hand(&cards("As Ah Ad Ac 2s 2h 2d")),
            HandCategory::Quads
        );
        assert_eq!(
            classify_best_hand(&cards("2h 7h 9h Jh Kh Qd Th")),
            HandCategory::Flush
        );
        assert_eq!(
            classify_best_hand(&cards("2h 7c 9h Jd Kh Qs 4d")),
            HandCategory::HighCard
        );
        assert_eq!(classify_best_hand(&[]), HandCategory::HighCard);
    }

    #[test]
    fn category_order() {
        assert!(HandCategory::ODDS.windows(2).all(|w| w[0] > w[1]));
        assert!(HandCategory::HighCard < HandCategory::Pair);
        assert!(!HandCategory::ODDS.contains(&HandCategory::HighCard));
    }

    #[test]
    fn category_info() {
        assert_eq!(HandCategory::Quads.to_string(), "Four of a Kind");
        assert_eq!(HandCategory::HighCard.name(), "High Card");
        assert_eq!(
            HandCategory::StraightFlush.info().frequency,
            "1 out of 3,217 hold 'em hands"
        );
    }

    #[test]
    fn category_serde() {
        let json = serde_json::to_string(&HandCategory::StraightFlush).unwrap();
        assert_eq!(json, "\"STRAIGHT_FLUSH\"");

        let c: HandCategory = serde_json::from_str("\"TWO_PAIR\"").unwrap();
        assert_eq!(c, HandCategory::TwoPair);
    }
}
