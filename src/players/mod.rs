//! Match participants.
//!
//! - `Player`: piles, counters and the card-moving rules
//! - `Strategy`: the decisions a participant makes
//! - `Bot`: a `Player` composed with a `Strategy`

pub mod bot;
pub mod player;
pub mod strategy;

pub use bot::Bot;
pub use player::Player;
pub use strategy::{HeuristicStrategy, Strategy};
