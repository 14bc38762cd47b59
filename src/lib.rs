//! # keyforge-sim
//!
//! A deterministic simulator for two-bot KeyForge matches.
//!
//! ## Design Principles
//!
//! 1. **Reproducible**: one seeded `GameRng` per match drives every shuffle
//!    and coin flip, so a seed and a deck fully determine the outcome.
//!
//! 2. **Composition over inheritance**: a `Bot` is a `Player` plus a
//!    `Strategy`. Swapping the strategy swaps the decision making without
//!    touching the card-moving rules.
//!
//! 3. **Absence is ordinary**: pile queries return `Result` with a
//!    `NotFound` variant; only deck loading and phase misuse abort a match.
//!
//! ## Scope
//!
//! Piles, amber, keys and chains are modeled. Card abilities, reaping,
//! fighting and the battlefield beyond simple placement are not.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, errors
//! - `cards`: cards, decks, deck loading
//! - `zones`: pile operations
//! - `players`: `Player`, `Strategy`, `Bot`
//! - `rules`: rule constants, chain handicap, match results
//! - `game`: the match orchestrator

pub mod cards;
pub mod core;
pub mod game;
pub mod players;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, LoadError, MatchConfig, MissingCardPolicy, PileError,
    PlayerError, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, CardType, CombatState, Deck, DeckSource, JsonDeckSource};

pub use crate::zones::Flank;

pub use crate::players::{Bot, HeuristicStrategy, Player, Strategy};

pub use crate::rules::{GameResult, MatchSummary, SeatSummary};

pub use crate::game::{Game, MatchPhase};
