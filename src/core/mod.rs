//! Core match plumbing: seats, RNG, configuration, errors.
//!
//! Nothing in here knows about cards or rules. Higher layers build on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{MatchConfig, MissingCardPolicy};
pub use error::{GameError, LoadError, PileError, PlayerError};
pub use player::{PlayerId, PlayerMap, SEATS};
pub use rng::GameRng;
