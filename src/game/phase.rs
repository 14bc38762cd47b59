//! Match phases.

use serde::{Deserialize, Serialize};

/// Where a match is in its lifecycle.
///
/// ```text
/// NotStarted -> Setup -> Mulligan -> TurnLoop -> Finished
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    NotStarted,
    /// Bots are being dealt decks and the coin is flipped.
    Setup,
    /// Opening hands are drawn and mulligans resolved.
    Mulligan,
    /// Players alternate turns.
    TurnLoop,
    /// A result has been reached.
    Finished,
}

impl MatchPhase {
    /// The phase that follows this one. `Finished` is terminal.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            MatchPhase::NotStarted => MatchPhase::Setup,
            MatchPhase::Setup => MatchPhase::Mulligan,
            MatchPhase::Mulligan => MatchPhase::TurnLoop,
            MatchPhase::TurnLoop | MatchPhase::Finished => MatchPhase::Finished,
        }
    }
}
