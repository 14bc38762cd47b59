//! Error taxonomy.
//!
//! - `PileError`: a pile query found nothing, or a draw hit an empty pile.
//!   Absence is ordinary; callers match on it.
//! - `PlayerError`: a player operation targeted a card it does not hold.
//! - `LoadError`: a deck source was unreadable or malformed. Fatal to setup.
//! - `GameError`: anything that aborts a match.

use std::path::PathBuf;

use thiserror::Error;

use crate::game::MatchPhase;

/// Failure of a pile operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PileError {
    #[error("pile is empty")]
    Empty,
    #[error("no card found with {0}")]
    NotFound(String),
}

/// Failure of a player operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("card {title} ({id}) is not in hand")]
    CardNotInHand { id: String, title: String },
    #[error(transparent)]
    Pile(#[from] PileError),
}

/// Failure to produce a deck from a source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("deck {} contains no cards", .path.display())]
    EmptyDeck { path: PathBuf },
}

/// Failure that aborts a match.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("could not load deck: {0}")]
    Load(#[from] LoadError),
    #[error("player action failed: {0}")]
    Player(#[from] PlayerError),
    #[error("expected match phase {expected:?}, found {found:?}")]
    InvalidPhase {
        expected: MatchPhase,
        found: MatchPhase,
    },
}
