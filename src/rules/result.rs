//! Match outcomes.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A seat forged enough keys.
    Winner(PlayerId),
    /// The configured turn cap ran out first.
    Stalemate,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Stalemate => None,
        }
    }
}

/// Final tallies for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSummary {
    pub name: String,
    pub first_turn: bool,
    pub amber: u32,
    pub keys: u32,
    pub chains: u32,
}

/// Everything worth keeping about a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub result: GameResult,
    /// Name of the winning seat, if any.
    pub winner_name: Option<String>,
    /// Half-turns taken.
    pub turns: u32,
    /// Completed pairs of turns.
    pub rounds: u32,
    /// Seed that reproduces this match.
    pub seed: u64,
    pub seats: PlayerMap<SeatSummary>,
}
