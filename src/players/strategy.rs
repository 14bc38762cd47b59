//! Decision strategies for bots.
//!
//! A strategy only looks at a hand and answers two questions: keep this
//! opening hand, and which house to declare. It never mutates anything, so
//! the same strategy value can drive any number of bots.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::zones::pile;

/// Policy for the decisions a bot makes on its own.
pub trait Strategy {
    /// Whether to throw back an opening hand.
    fn wants_mulligan(&self, hand: &[Card]) -> bool;

    /// House to declare for the turn. `None` only for an empty hand.
    fn choose_house(&self, hand: &[Card]) -> Option<String>;
}

/// The stock heuristics.
///
/// Keeps an opening hand when any of these hold:
/// - three or more creatures
/// - two or more creatures and the hand spans exactly two houses
/// - a seven-card (first turn) hand spanning exactly two houses
/// - more than two printed amber
///
/// Declares the house with the most cards in hand. Ties go to the house
/// seen first in hand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn wants_mulligan(&self, hand: &[Card]) -> bool {
        let houses = pile::houses(hand);
        let creatures = pile::creatures(hand).len();
        let amber = pile::total_amber(hand);

        let keep = creatures >= 3
            || (creatures >= 2 && houses.len() == 2)
            || (hand.len() == 7 && houses.len() == 2)
            || amber > 2;
        !keep
    }

    fn choose_house(&self, hand: &[Card]) -> Option<String> {
        let mut tally: SmallVec<[(String, usize); 8]> = SmallVec::new();
        for house in pile::houses(hand) {
            let count = hand.iter().filter(|c| c.is_house(&house)).count();
            tally.push((house, count));
        }

        // Strict comparison keeps the earliest house on ties.
        let mut best: Option<(String, usize)> = None;
        for (house, count) in tally {
            if best.as_ref().map_or(true, |(_, top)| count > *top) {
                best = Some((house, count));
            }
        }
        best.map(|(house, _)| house)
    }
}
