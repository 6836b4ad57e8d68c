//! This is the core module. It exports the non-game-flow
//! related code: cards, the deck, and hand evaluation.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Deck is the ordered pile of undealt cards.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Hand evaluation and the total order between evaluations.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Category, Evaluation, Rankable, evaluate};

/// Error types.
mod error;
pub use self::error::PokerSimError;
