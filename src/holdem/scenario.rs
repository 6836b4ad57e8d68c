use crate::core::Card;

use super::GameType;

/// One seat in a scenario.
///
/// `hand` holds the hole cards that are already known. When it's `None`
/// the player is dealt a random hand from the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSetup {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hand: Option<Vec<Card>>,
}

impl PlayerSetup {
    /// A player whose hole cards are dealt at random.
    pub fn random(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: None,
        }
    }

    /// A player holding these exact hole cards.
    pub fn with_hand(name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            hand: Some(hand),
        }
    }
}

/// The community cards that are already known.
///
/// Any street left as `None` is dealt from the deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSetup {
    #[cfg_attr(feature = "serde", serde(default))]
    pub flop: Option<Vec<Card>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn: Option<Vec<Card>>,
    /// Accepted for completeness, the river is always dealt from the deck.
    #[cfg_attr(feature = "serde", serde(default))]
    pub river: Option<Vec<Card>>,
}

/// Everything needed to set up one hand: the variant, the players in
/// seat order and the known board.
///
/// Duplicate cards across players and the board are not checked here,
/// keeping the scenario consistent is up to whoever builds it.
///
/// With the `serde` feature a scenario reads from JSON like:
///
/// ```json
/// {
///   "game_type": "texas",
///   "players": [
///     { "name": "Sam", "hand": [[14, "Hearts"], [13, "Hearts"]] },
///     { "name": "Arch", "hand": null }
///   ],
///   "table": { "flop": [[10, "Hearts"], [11, "Hearts"], [12, "Hearts"]], "turn": null, "river": null }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    #[cfg_attr(feature = "serde", serde(default))]
    pub game_type: GameType,
    pub players: Vec<PlayerSetup>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub table: TableSetup,
}

impl Scenario {
    /// The names of the players in seat order.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }
}

#[cfg(feature = "serde")]
impl Scenario {
    /// Parse a scenario from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, crate::core::PokerSimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario from a JSON file.
    pub fn from_json_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, crate::core::PokerSimError> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}
