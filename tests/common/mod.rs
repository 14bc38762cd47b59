//! Shared fixtures for integration tests.

#![allow(dead_code)]

use keyforge_sim::cards::{load_deck_from_file, Card, CardType, Deck};

/// Path of the 36-card fixture deck.
pub const TEST_DECK: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/test_deck.json");

/// Id shared by both copies of Coward's End in the fixture.
pub const COWARDS_END: &str = "d438faa9-7920-437a-8d1c-682fade5d350";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn test_deck() -> Deck {
    init_logging();
    load_deck_from_file(TEST_DECK).expect("fixture deck should load")
}

pub fn card(id: &str, house: &str, card_type: CardType, amber: u32) -> Card {
    Card::new(id, format!("Card {id}"), house, card_type).with_amber(amber)
}
