//! Match configuration.
//!
//! `MatchConfig` carries everything a caller may tune about a match without
//! touching the rules themselves:
//! - the RNG seed (fixed for replays, `None` for a fresh one)
//! - seat names used in narration
//! - an optional turn cap
//! - what to do when a bot tries to play a card it no longer holds
//!
//! Rule numbers (hand size, key cost) live in `crate::rules`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::LoadError;

/// What the turn loop does when a play or discard targets a card that is
/// not in hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCardPolicy {
    /// Log a warning and continue the turn.
    #[default]
    SkipAndLog,
    /// Abort the match with `GameError::Player`.
    Fail,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Random seed. Same seed and deck produce an identical match.
    /// `None` draws a seed from the operating system.
    pub seed: Option<u64>,

    /// Display names for seat 0 and seat 1.
    pub player_names: [String; 2],

    /// Optional cap on half-turns. `None` runs until a key win.
    pub max_turns: Option<u32>,

    /// Handling of plays that target a card not in hand.
    pub missing_card: MissingCardPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player_names: ["Player one".to_string(), "Player two".to_string()],
            max_turns: None,
            missing_card: MissingCardPolicy::default(),
        }
    }
}

impl MatchConfig {
    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set both seat names.
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Stop the match as a stalemate after this many half-turns.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Set the missing-card policy.
    #[must_use]
    pub fn with_missing_card_policy(mut self, policy: MissingCardPolicy) -> Self {
        self.missing_card = policy;
        self
    }

    /// Read a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
