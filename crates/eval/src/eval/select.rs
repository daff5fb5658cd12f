// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection.
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use pokerhand_cards::Card;

use super::{Category, HandValue};
use crate::{EvalError, HAND_SIZE, combos::Combinations};

/// The best hand found in a cards pool.
///
/// The cards are sorted by significance, cards in the hand defining groups
/// come first and kickers come last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// The best hand category.
    #[serde(rename = "combination")]
    pub category: Category,
    /// The best hand cards.
    #[serde(rename = "bestCards")]
    pub cards: [Card; HAND_SIZE],
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// Finds the best 5-cards hand in a pool of 5 to 7 cards.
///
/// All the hands in the pool are compared by category and signature, if two
/// hands have the same value the one that comes first in the pool order wins.
///
/// ```
/// # use pokerhand_eval::*;
/// let pool = ["AS", "KS", "2D", "QS", "JS", "10S", "2C"].map(|c| c.parse::<Card>().unwrap());
/// let best = best_hand(&pool).unwrap();
/// assert_eq!(best.category, Category::RoyalFlush);
/// assert_eq!(best.to_string(), "Royal Flush: AS KS QS JS 10S");
/// ```
pub fn best_hand(pool: &[Card]) -> Result<EvaluationResult, EvalError> {
    let mut hands = Combinations::new(pool)?;

    // A valid pool has at least one hand.
    let first = hands.next().ok_or(EvalError::InvalidHandSize(pool.len()))?;
    let first_value = HandValue::eval(&first);
    trace!("{first:?} {first_value}");

    let (hand, value) = hands.fold((first, first_value), |best, hand| {
        let value = HandValue::eval(&hand);
        trace!("{hand:?} {value}");

        if value > best.1 { (hand, value) } else { best }
    });

    let result = EvaluationResult {
        category: value.category(),
        cards: value.order_cards(&hand),
    };

    debug!("Best hand in {} cards pool: {value} {result}", pool.len());

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhand_cards::{Deck, Rank};
    use rand::{SeedableRng, rngs::StdRng};

    use crate::combos::combinations;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    fn tokens(result: &EvaluationResult) -> Vec<String> {
        result.cards.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn invalid_pool_size() {
        for n in [0, 3, 4, 8, 9] {
            let pool = Deck::default().into_iter().take(n).collect::<Vec<_>>();
            assert_eq!(best_hand(&pool), Err(EvalError::InvalidHandSize(n)));
        }
    }

    #[test]
    fn royal_flush() {
        let pool = cards(&["10S", "JS", "QS", "KS", "AS"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::RoyalFlush);
        assert_eq!(tokens(&best), ["AS", "KS", "QS", "JS", "10S"]);
    }

    #[test]
    fn wheel_with_fillers() {
        let pool = cards(&["AC", "2D", "3H", "4S", "5C", "9D", "JH"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::Straight);
        assert_eq!(tokens(&best), ["5C", "4S", "3H", "2D", "AC"]);

        let v = HandValue::eval(&best.cards);
        assert_eq!(v.signature(), &[Rank::Five]);

        let six_high = cards(&["2C", "3D", "4H", "5S", "6C", "9D", "JH"]);
        let six_high = best_hand(&six_high).unwrap();
        assert!(HandValue::eval(&six_high.cards) > v);
    }

    #[test]
    fn wheel_loses_to_higher_straight_in_pool() {
        let pool = cards(&["AC", "2D", "3H", "4S", "5C", "6D", "7H"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::Straight);
        assert_eq!(tokens(&best), ["7H", "6D", "5C", "4S", "3H"]);
    }

    #[test]
    fn quads_beat_flush() {
        // Seven distinct cards cannot hold both a flush and quads, the QH
        // duplicate makes room for both. The first hand in the pool is the
        // flush, the quads come later.
        let pool = cards(&["2H", "5H", "JH", "QH", "QH", "QC", "QD"]);
        let first = combinations(&pool).unwrap().next().unwrap();
        assert_eq!(HandValue::eval(&first).category(), Category::Flush);

        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::FourOfAKind);
        assert_eq!(tokens(&best), ["QH", "QH", "QC", "QD", "JH"]);

        let pool = cards(&["QD", "QC", "3D", "QH", "8D", "QS", "6D"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::FourOfAKind);
        assert_eq!(tokens(&best), ["QD", "QC", "QH", "QS", "8D"]);
    }

    #[test]
    fn flush_beats_trips() {
        let pool = cards(&["2H", "9H", "9C", "JH", "9D", "KH", "5H"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::Flush);
        assert_eq!(tokens(&best), ["KH", "JH", "9H", "5H", "2H"]);
    }

    #[test]
    fn straight_flush_over_flush() {
        let pool = cards(&["AH", "5H", "6H", "7H", "8H", "9H", "KH"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::StraightFlush);
        assert_eq!(tokens(&best), ["9H", "8H", "7H", "6H", "5H"]);
    }

    #[test]
    fn best_kickers_win_within_category() {
        // All hands are one pair of aces, the kickers decide.
        let pool = cards(&["AC", "AD", "2H", "3S", "KC", "QD", "7H"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::OnePair);
        assert_eq!(tokens(&best), ["AC", "AD", "KC", "QD", "7H"]);

        // Three pairs, best two with the best kicker.
        let pool = cards(&["4C", "4D", "JH", "JS", "9C", "9D", "2H"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::TwoPair);
        assert_eq!(tokens(&best), ["JH", "JS", "9C", "9D", "4C"]);

        // Two trips make a full house with the higher trips.
        let pool = cards(&["4C", "4D", "4H", "JS", "JC", "JD", "2H"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::FullHouse);
        assert_eq!(tokens(&best), ["JS", "JC", "JD", "4C", "4D"]);
    }

    #[test]
    fn ties_keep_first_hand() {
        // The 10D and 10H are interchangeable, the first in the pool wins.
        let pool = cards(&["AS", "KD", "QC", "JH", "10D", "10H"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::Straight);
        assert_eq!(tokens(&best), ["AS", "KD", "QC", "JH", "10D"]);
    }

    #[test]
    fn flush_with_repeated_ranks_wins() {
        // A A K K Q of spades beats the first flush A K Q J 9.
        let pool = cards(&["9S", "JS", "AS", "KS", "QS", "AS", "KS"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::Flush);
        assert_eq!(tokens(&best), ["AS", "AS", "KS", "KS", "QS"]);
    }

    #[test]
    fn duplicate_cards_are_evaluated() {
        let pool = cards(&["AS", "AS", "AS", "AS", "KD"]);
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::FourOfAKind);
    }

    #[test]
    fn deterministic() {
        let mut rng = StdRng::seed_from_u64(101);
        for n in 5..=7 {
            for _ in 0..100 {
                let pool = Deck::new_and_shuffled(&mut rng).deal_many(n);
                assert_eq!(best_hand(&pool), best_hand(&pool));
            }
        }
    }

    #[test]
    fn best_hand_beats_all_combinations() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let pool = Deck::new_and_shuffled(&mut rng).deal_many(7);
            let best = best_hand(&pool).unwrap();
            let best_value = HandValue::eval(&best.cards);
            assert_eq!(best_value.category(), best.category);

            for hand in combinations(&pool).unwrap() {
                assert!(HandValue::eval(&hand) <= best_value, "{pool:?}");
            }

            // The best cards are a permutation of a pool hand.
            assert!(best.cards.iter().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn five_cards_categories_count() {
        let cards = Deck::default().into_iter().collect::<Vec<_>>();
        let n = cards.len();
        let mut counts = [0usize; 10];

        for a in 0..n {
            for b in (a + 1)..n {
                for c in (b + 1)..n {
                    for d in (c + 1)..n {
                        for e in (d + 1)..n {
                            let hand = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                            counts[HandValue::eval(&hand).category() as usize] += 1;
                        }
                    }
                }
            }
        }

        assert_eq!(counts[Category::HighCard as usize], 1_302_540);
        assert_eq!(counts[Category::OnePair as usize], 1_098_240);
        assert_eq!(counts[Category::TwoPair as usize], 123_552);
        assert_eq!(counts[Category::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[Category::Straight as usize], 10_200);
        assert_eq!(counts[Category::Flush as usize], 5_108);
        assert_eq!(counts[Category::FullHouse as usize], 3_744);
        assert_eq!(counts[Category::FourOfAKind as usize], 624);
        assert_eq!(counts[Category::StraightFlush as usize], 36);
        assert_eq!(counts[Category::RoyalFlush as usize], 4);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }

    #[test]
    fn result_serde() {
        let pool = cards(&["AC", "AD", "KH", "KS", "2C"]);
        let best = best_hand(&pool).unwrap();
        let json = serde_json::to_string(&best).unwrap();
        assert_eq!(
            json,
            r#"{"combination":"Two Pair","bestCards":["AC","AD","KH","KS","2C"]}"#
        );

        let back: EvaluationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, best);
    }
}
