//! Match orchestration.
//!
//! A `Game` takes one deck, deals it to two bots, and drives the match
//! through its phases:
//!
//! 1. **Setup**: both bots get the deck and shuffle; a coin flip picks who
//!    goes first.
//! 2. **Mulligan**: opening hands (six cards, seven for the coin-flip
//!    winner), then each bot may throw its hand back for one card fewer.
//! 3. **Turn loop**: seats alternate. Each turn forges a key when amber
//!    allows, checks for three keys, then declares a house, plays it out and
//!    refills the hand.
//! 4. **Finished**: only reached through a key win, or the opt-in turn cap.
//!
//! All randomness comes from the game's own `GameRng`, so a fixed seed
//! replays the same match.

mod phase;
mod runner;

pub use phase::MatchPhase;
pub use runner::Game;
