// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and ordering.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, cmp::Reverse, fmt};

use pokerhand_cards::{Card, Rank};

use crate::HAND_SIZE;

/// The category of a poker hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// High card.
    #[serde(rename = "High Card")]
    HighCard = 0,
    /// One pair.
    #[serde(rename = "One Pair")]
    OnePair,
    /// Two pair.
    #[serde(rename = "Two Pair")]
    TwoPair,
    /// Three of a kind.
    #[serde(rename = "Three of a Kind")]
    ThreeOfAKind,
    /// Straight.
    #[serde(rename = "Straight")]
    Straight,
    /// Flush.
    #[serde(rename = "Flush")]
    Flush,
    /// Full house.
    #[serde(rename = "Full House")]
    FullHouse,
    /// Four of a kind.
    #[serde(rename = "Four of a Kind")]
    FourOfAKind,
    /// Straight flush.
    #[serde(rename = "Straight Flush")]
    StraightFlush,
    /// Ten to ace straight flush.
    #[serde(rename = "Royal Flush")]
    RoyalFlush,
}

impl Category {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    fn is_straight(&self) -> bool {
        matches!(
            self,
            Category::Straight | Category::StraightFlush | Category::RoyalFlush
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of a 5-cards hand.
///
/// Values are ordered by category first and then by the tie-break signature,
/// a list of ranks compared from the most significant:
///
/// | Category                          | Signature                      |
/// |-----------------------------------|--------------------------------|
/// | Straight, Straight/Royal Flush    | top card (five for the wheel)  |
/// | Four of a Kind                    | quads, kicker                  |
/// | Full House                        | trips, pair                    |
/// | Flush, High Card                  | all ranks descending           |
/// | Three of a Kind                   | trips, kickers descending      |
/// | Two Pair                          | high pair, low pair, kicker    |
/// | One Pair                          | pair, kickers descending       |
///
/// Two values with the same category and signature are tied.
///
/// ```
/// # use pokerhand_eval::*;
/// let cards = ["AS", "AD", "KH", "KS", "2C"].map(|c| c.parse::<Card>().unwrap());
/// let v = HandValue::eval(&cards);
/// assert_eq!(v.category(), Category::TwoPair);
/// assert_eq!(v.signature(), &[Rank::Ace, Rank::King, Rank::Deuce]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandValue {
    category: Category,
    signature: Vec<Rank>,
}

impl HandValue {
    /// Evaluates a 5-cards hand.
    pub fn eval(hand: &[Card; HAND_SIZE]) -> HandValue {
        let counts = rank_counts(hand);

        // Ranks grouped by multiplicity, larger groups first and higher ranks
        // first for groups of the same size.
        let mut groups = Rank::ranks()
            .rev()
            .filter(|&r| counts[r as usize] > 0)
            .map(|r| (counts[r as usize], r))
            .collect::<Vec<_>>();
        groups.sort_by_key(|&(count, _)| Reverse(count));

        let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());
        let straight_top = straight_top(&groups);
        let shape = groups.iter().map(|&(count, _)| count).collect::<Vec<_>>();

        let category = match (straight_top, is_flush, shape.as_slice()) {
            (Some(Rank::Ace), true, _) => Category::RoyalFlush,
            (Some(_), true, _) => Category::StraightFlush,
            (_, _, [n, ..]) if *n >= 4 => Category::FourOfAKind,
            (_, _, [3, 2]) => Category::FullHouse,
            (_, true, _) => Category::Flush,
            (Some(_), false, _) => Category::Straight,
            (_, _, [3, ..]) => Category::ThreeOfAKind,
            (_, _, [2, 2, ..]) => Category::TwoPair,
            (_, _, [2, ..]) => Category::OnePair,
            _ => Category::HighCard,
        };

        let signature = match category {
            Category::Straight | Category::StraightFlush | Category::RoyalFlush => {
                straight_top.into_iter().collect()
            }
            Category::Flush | Category::HighCard => {
                // All five ranks, repeated ranks included.
                let mut ranks = hand.map(|c| c.rank());
                ranks.sort_by(|a, b| b.cmp(a));
                ranks.to_vec()
            }
            _ => groups.iter().map(|&(_, r)| r).collect(),
        };

        HandValue {
            category,
            signature,
        }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The tie-break signature ranks.
    pub fn signature(&self) -> &[Rank] {
        &self.signature
    }

    /// Checks if this is a five high straight.
    pub fn is_wheel(&self) -> bool {
        self.category.is_straight() && self.signature == [Rank::Five]
    }

    /// Reorders a hand by significance, cards in larger rank groups come first
    /// and then cards with higher ranks, the ace goes last in a wheel. Flush
    /// and high card hands are sorted by rank only.
    ///
    /// Cards that have the same rank keep their relative order.
    pub fn order_cards(&self, hand: &[Card; HAND_SIZE]) -> [Card; HAND_SIZE] {
        let counts = match self.category {
            Category::Flush | Category::HighCard => [1; 13],
            _ => rank_counts(hand),
        };
        let ace_low = self.is_wheel();

        let mut cards = *hand;
        cards.sort_by_key(|c| {
            let rank = c.rank();
            let value = if ace_low && rank == Rank::Ace {
                -1
            } else {
                rank.value() as i8
            };

            Reverse((counts[rank as usize], value))
        });

        cards
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.signature.cmp(&other.signature))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (idx, rank) in self.signature.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{rank}")?;
        }
        write!(f, "]")
    }
}

/// Number of cards for each rank indexed by rank value.
fn rank_counts(hand: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for card in hand {
        counts[card.rank() as usize] += 1;
    }
    counts
}

/// Returns the straight top rank if the groups are five consecutive ranks.
///
/// Groups must be sorted by descending rank, the wheel top rank is five.
fn straight_top(groups: &[(u8, Rank)]) -> Option<Rank> {
    if groups.len() != HAND_SIZE {
        return None;
    }

    let high = groups[0].1;
    let low = groups[HAND_SIZE - 1].1;

    if high.value() - low.value() == 4 {
        Some(high)
    } else if high == Rank::Ace && groups[1].1 == Rank::Five {
        // A 5 4 3 2, ranks are distinct so after the ace there must be 5 to 2.
        Some(Rank::Five)
    } else {
        None
    }
}
