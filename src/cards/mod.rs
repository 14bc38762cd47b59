//! Card data: single cards and whole decks.
//!
//! ## Key Types
//!
//! - `Card`: vault catalog record plus transient `CombatState`
//! - `CardType`: creature, action, artifact, upgrade
//! - `Deck`: named card list with bookkeeping
//! - `DeckSource`: loader contract; `JsonDeckSource` reads files

pub mod card;
pub mod deck;

pub use card::{Card, CardType, CombatState};
pub use deck::{
    choose_random_deck, load_cards_from_file, load_deck_from_file, Deck, DeckSource,
    JsonDeckSource,
};
