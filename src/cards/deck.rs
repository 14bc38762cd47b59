//! Decks and deck sources.
//!
//! A `Deck` is the vault's deck record: a name, bookkeeping counters and
//! the ordered card list. The match only reads it, apart from copying
//! `chains` into each player.
//!
//! Where a deck comes from is behind `DeckSource`. The crate ships
//! `JsonDeckSource` for vault-format files on disk; a network client would
//! be another implementation with the same contract.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::card::{null_as_default, Card};
use crate::core::error::LoadError;
use crate::core::rng::GameRng;

/// A named, ordered bundle of cards with vault bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deck {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub expansion: u32,
    pub chains: u32,
    pub wins: u32,
    pub losses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub is_my_deck: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: Vec<String>,
    pub is_my_favorite: bool,
    #[serde(rename = "is_on_my_watchlist")]
    pub is_on_watch_list: bool,
    pub casual_wins: u32,
    pub casual_losses: u32,
    pub cards: Vec<Card>,
    #[serde(deserialize_with = "null_as_default")]
    pub houses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub card_list: Vec<String>,
}

impl Deck {
    /// Create a deck from a card list.
    #[must_use]
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
            ..Self::default()
        }
    }

    /// Set the chain count (builder pattern).
    #[must_use]
    pub fn with_chains(mut self, chains: u32) -> Self {
        self.chains = chains;
        self
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Anything that can produce a fully populated deck from a location.
pub trait DeckSource {
    /// Load the deck identified by `location`.
    fn load(&self, location: &str) -> Result<Deck, LoadError>;
}

/// Loads vault-format deck JSON from the filesystem.
///
/// Locations are file paths, resolved against `base_dir` when one is set.
#[derive(Clone, Debug, Default)]
pub struct JsonDeckSource {
    base_dir: Option<PathBuf>,
}

impl JsonDeckSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative locations against `dir`.
    #[must_use]
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(location),
            None => PathBuf::from(location),
        }
    }
}

impl DeckSource for JsonDeckSource {
    fn load(&self, location: &str) -> Result<Deck, LoadError> {
        load_deck_from_file(self.resolve(location))
    }
}

/// Load a deck from a vault-format JSON file.
///
/// A deck without cards is rejected: there is nothing to deal.
pub fn load_deck_from_file(path: impl AsRef<Path>) -> Result<Deck, LoadError> {
    let path = path.as_ref();
    let deck: Deck = read_json(path)?;
    if deck.is_empty() {
        return Err(LoadError::EmptyDeck {
            path: path.to_path_buf(),
        });
    }
    log::debug!("loaded deck {:?} with {} cards from {}", deck.name, deck.len(), path.display());
    Ok(deck)
}

/// Load a bare JSON array of cards, e.g. a catalog dump.
pub fn load_cards_from_file(path: impl AsRef<Path>) -> Result<Vec<Card>, LoadError> {
    read_json(path.as_ref())
}

/// Pick one deck uniformly at random, e.g. from search results.
#[must_use]
pub fn choose_random_deck<'a>(decks: &'a [Deck], rng: &mut GameRng) -> Option<&'a Deck> {
    rng.choose(decks)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
