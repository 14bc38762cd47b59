//! Rule numbers and match outcomes.
//!
//! The simulator covers a small slice of the KeyForge rules: drawing up to
//! a hand size reduced by chains, gaining amber from played cards, and
//! forging keys. Everything else (reap, fight, card abilities) is out of
//! scope.

pub mod result;

pub use result::{GameResult, MatchSummary, SeatSummary};

/// Cards a player draws up to at the end of a turn, before chains.
pub const BASE_HAND_SIZE: usize = 6;

/// Amber spent to forge one key.
pub const KEY_COST: u32 = 6;

/// A key is forged only when amber is strictly greater than this.
pub const FORGE_THRESHOLD: u32 = KEY_COST;

/// Keys needed to win.
pub const KEYS_TO_WIN: u32 = 3;

/// Fresh hand after a mulligan, before the first-turn bonus.
pub const MULLIGAN_HAND_SIZE: usize = 5;

/// Extra card for the player who won the coin flip.
pub const FIRST_TURN_BONUS: usize = 1;

/// Chains per additional card of handicap.
pub const CHAINS_PER_CARD: u32 = 6;

/// Cards removed from the hand-size target for a chain count.
///
/// Every full multiple of six chains costs one card, and any nonzero count
/// below six costs exactly one.
///
/// ```
/// use keyforge_sim::rules::chain_handicap;
///
/// assert_eq!(chain_handicap(0), 0);
/// assert_eq!(chain_handicap(5), 1);
/// assert_eq!(chain_handicap(12), 2);
/// ```
#[must_use]
pub fn chain_handicap(chains: u32) -> usize {
    let mut handicap = chains / CHAINS_PER_CARD;
    if chains > 0 && chains < CHAINS_PER_CARD {
        handicap += 1;
    }
    handicap as usize
}

/// Hand size a player refills to, never below zero.
#[must_use]
pub fn hand_size_target(chains: u32) -> usize {
    BASE_HAND_SIZE.saturating_sub(chain_handicap(chains))
}
