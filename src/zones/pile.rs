//! Pile operations.
//!
//! A pile is an ordered `Vec<Card>`. The top of a pile is its last element,
//! so drawing is a `pop` and placing on top is a `push`. Every function here
//! is a plain function over a slice or vec; piles carry no hidden state.
//!
//! Queries that can come back empty return `PileError::NotFound` so callers
//! can decide whether absence matters. Type filters such as `creatures`
//! never fail and may return an empty list.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};
use crate::core::error::PileError;
use crate::core::rng::GameRng;

/// Battlefield side for placing a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flank {
    /// Head of the creature line.
    Left,
    /// Tail of the creature line.
    Right,
}

/// Randomly reorder a pile in place.
pub fn shuffle(pile: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(pile);
}

/// Remove and return the top card.
pub fn pop(pile: &mut Vec<Card>) -> Result<Card, PileError> {
    pile.pop().ok_or(PileError::Empty)
}

/// Move the top card of `source` onto `destination`.
pub fn draw(source: &mut Vec<Card>, destination: &mut Vec<Card>) -> Result<(), PileError> {
    let card = pop(source)?;
    destination.push(card);
    Ok(())
}

/// Place a card on top of a pile.
pub fn add(pile: &mut Vec<Card>, card: Card) {
    pile.push(card);
}

/// Place a card at the bottom of a pile (the left flank of a battle line).
pub fn prepend(pile: &mut Vec<Card>, card: Card) {
    pile.insert(0, card);
}

/// Place a card on one side of a battle line.
pub fn place(pile: &mut Vec<Card>, card: Card, flank: Flank) {
    match flank {
        Flank::Left => prepend(pile, card),
        Flank::Right => add(pile, card),
    }
}

/// Remove the first card sharing `card`'s id.
///
/// A missing card leaves the pile untouched.
pub fn remove(pile: &mut Vec<Card>, card: &Card) -> Result<Card, PileError> {
    let index = pile
        .iter()
        .position(|c| c.same_id(card))
        .ok_or_else(|| PileError::NotFound(format!("ID {}", card.id)))?;
    Ok(pile.remove(index))
}

/// Whether a card with the same id is in the pile.
#[must_use]
pub fn contains(pile: &[Card], card: &Card) -> bool {
    pile.iter().any(|c| c.same_id(card))
}

/// First card with the given id.
pub fn find_by_id<'a>(pile: &'a [Card], id: &str) -> Result<&'a Card, PileError> {
    pile.iter()
        .find(|c| c.id == id)
        .ok_or_else(|| PileError::NotFound(format!("ID {id}")))
}

/// All cards with the given id, in pile order.
pub fn find_all_by_id<'a>(pile: &'a [Card], id: &str) -> Result<Vec<&'a Card>, PileError> {
    non_empty(
        pile.iter().filter(|c| c.id == id).collect(),
        || format!("ID {id}"),
    )
}

/// First card with the given expansion and collector number.
///
/// Mavericks carry their own ids, so this is how they are found.
pub fn find_by_number(pile: &[Card], expansion: u32, card_number: u32) -> Result<&Card, PileError> {
    pile.iter()
        .find(|c| c.expansion == expansion && c.card_number == card_number)
        .ok_or_else(|| number_not_found(expansion, card_number))
}

/// All cards with the given expansion and collector number, in pile order.
pub fn find_all_by_number(
    pile: &[Card],
    expansion: u32,
    card_number: u32,
) -> Result<Vec<&Card>, PileError> {
    non_empty(
        pile.iter()
            .filter(|c| c.expansion == expansion && c.card_number == card_number)
            .collect(),
        || format!("set #{expansion} and card #{card_number}"),
    )
}

/// All cards of a house (case-insensitive), in pile order.
pub fn find_all_by_house<'a>(pile: &'a [Card], house: &str) -> Result<Vec<&'a Card>, PileError> {
    non_empty(
        pile.iter().filter(|c| c.is_house(house)).collect(),
        || format!("house {house}"),
    )
}

/// All cards of a type, in pile order.
pub fn find_all_by_type(pile: &[Card], card_type: CardType) -> Result<Vec<&Card>, PileError> {
    non_empty(of_type(pile, card_type), || format!("type {card_type}"))
}

#[must_use]
pub fn creatures(pile: &[Card]) -> Vec<&Card> {
    of_type(pile, CardType::Creature)
}

#[must_use]
pub fn actions(pile: &[Card]) -> Vec<&Card> {
    of_type(pile, CardType::Action)
}

#[must_use]
pub fn artifacts(pile: &[Card]) -> Vec<&Card> {
    of_type(pile, CardType::Artifact)
}

#[must_use]
pub fn upgrades(pile: &[Card]) -> Vec<&Card> {
    of_type(pile, CardType::Upgrade)
}

/// Sum of printed amber bonuses. Does not account for card abilities.
#[must_use]
pub fn total_amber(pile: &[Card]) -> u32 {
    pile.iter().map(|c| c.amber).sum()
}

/// Sum of current armor.
#[must_use]
pub fn total_armor(pile: &[Card]) -> i32 {
    pile.iter().map(Card::current_armor).sum()
}

/// Sum of current creature power.
#[must_use]
pub fn total_power(pile: &[Card]) -> i32 {
    creature_powers(pile).sum()
}

/// Highest creature power, 0 without creatures.
#[must_use]
pub fn max_power(pile: &[Card]) -> i32 {
    creature_powers(pile).max().unwrap_or(0)
}

/// Lowest creature power, 0 without creatures.
#[must_use]
pub fn min_power(pile: &[Card]) -> i32 {
    creature_powers(pile).min().unwrap_or(0)
}

/// Distinct houses in first-seen order.
///
/// Houses differing only by case count once, spelled as first seen.
#[must_use]
pub fn houses(pile: &[Card]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    pile.iter()
        .filter(|c| seen.insert(c.house.to_ascii_lowercase()))
        .map(|c| c.house.clone())
        .collect()
}

/// Stable sort by expansion, then collector number.
pub fn sort_by_number(pile: &mut [Card]) {
    pile.sort_by_key(|c| (c.expansion, c.card_number));
}

/// Pick a card uniformly at random, e.g. for a random discard.
#[must_use]
pub fn choose_random<'a>(pile: &'a [Card], rng: &mut GameRng) -> Option<(usize, &'a Card)> {
    if pile.is_empty() {
        return None;
    }
    let index = rng.gen_range_usize(0..pile.len());
    Some((index, &pile[index]))
}

fn of_type(pile: &[Card], card_type: CardType) -> Vec<&Card> {
    pile.iter().filter(|c| c.card_type == card_type).collect()
}

fn creature_powers(pile: &[Card]) -> impl Iterator<Item = i32> + '_ {
    pile.iter().filter(|c| c.is_creature()).map(Card::current_power)
}

fn non_empty<'a>(
    found: Vec<&'a Card>,
    describe: impl FnOnce() -> String,
) -> Result<Vec<&'a Card>, PileError> {
    if found.is_empty() {
        Err(PileError::NotFound(describe()))
    } else {
        Ok(found)
    }
}

fn number_not_found(expansion: u32, card_number: u32) -> PileError {
    PileError::NotFound(format!("set #{expansion} and card #{card_number}"))
}
