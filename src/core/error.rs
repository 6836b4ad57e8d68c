use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// poker_sim library. It uses `thiserror` to provide
/// readable error messages
///
/// Every error is local to one simulated hand; the caller decides
/// whether to retry, skip, or abort a batch.
#[derive(Error, Debug)]
pub enum PokerSimError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card rank {0} is outside of 2..=14")]
    InvalidRank(u8),
    #[error("Tried to draw from an empty deck")]
    DeckExhausted,
    #[error("Card {0} is not in the deck")]
    CardNotFound(Card),
    /// Phases are given by name.
    #[error("Phase {requested} requested while the game is at {current}")]
    PhaseOutOfOrder {
        current: &'static str,
        requested: &'static str,
    },
    #[error("There are no players in the scenario")]
    NoPlayers,
    #[error("More than one player is named {0:?}")]
    DuplicatePlayerName(String),
    #[error("{0:?} is reserved for tied hands and can't name a player")]
    ReservedPlayerName(String),
    #[cfg(feature = "serde")]
    #[error("Unable to read scenario: {0}")]
    ScenarioIo(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("Unable to parse scenario: {0}")]
    ScenarioParse(#[from] serde_json::Error),
}
