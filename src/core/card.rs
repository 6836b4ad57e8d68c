use std::fmt;

use super::PokerSimError;

/// Card rank or value.
/// The discriminant is the face value, so `Two` is 2 and `Ace` is 14.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// The numeric face value, 2 through 14.
    ///
    /// ```
    /// use poker_sim::core::Value;
    ///
    /// assert_eq!(14, Value::Ace.rank());
    /// assert_eq!(2, Value::Two.rank());
    /// ```
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Convert a numeric face value (2 through 14) into a `Value`.
    ///
    /// ```
    /// use poker_sim::core::Value;
    ///
    /// assert_eq!(Some(Value::Jack), Value::from_rank(11));
    /// assert_eq!(None, Value::from_rank(1));
    /// assert_eq!(None, Value::from_rank(15));
    /// ```
    pub fn from_rank(rank: u8) -> Option<Value> {
        VALUES.get(usize::from(rank.checked_sub(2)?)).copied()
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is in the ascii range.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl TryFrom<u8> for Value {
    type Error = PokerSimError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Value::from_rank(rank).ok_or(PokerSimError::InvalidRank(rank))
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts
    #[cfg_attr(feature = "serde", serde(rename = "Hearts", alias = "Heart"))]
    Heart,
    /// Diamonds
    #[cfg_attr(feature = "serde", serde(rename = "Diamonds", alias = "Diamond"))]
    Diamond,
    /// Clubs
    #[cfg_attr(feature = "serde", serde(rename = "Clubs", alias = "Club"))]
    Club,
    /// Spades
    #[cfg_attr(feature = "serde", serde(rename = "Spades", alias = "Spade"))]
    Spade,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Given a character that represents a suit try and parse that char.
    /// If the char can represent a suit return it.
    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    /// This Suit to a char.
    pub fn to_char(self) -> char {
        match self {
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
            Suit::Spade => 's',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Two cards are the same card exactly when value and suit match.
///
/// With the `serde` feature a card is written as a `[rank, "Suit"]`
/// pair, for example `[14, "Hearts"]` for the ace of hearts.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u8, Suit)", into = "(u8, Suit)")
)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl TryFrom<(u8, Suit)> for Card {
    type Error = PokerSimError;

    fn try_from((rank, suit): (u8, Suit)) -> Result<Self, Self::Error> {
        Ok(Card::new(Value::try_from(rank)?, suit))
    }
}

impl From<Card> for (u8, Suit) {
    fn from(card: Card) -> Self {
        (card.value.rank(), card.suit)
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerSimError;

    /// Parse a two character card like `"Ah"` or `"td"`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let value_char = chars.next().ok_or(PokerSimError::TooFewChars)?;
        let suit_char = chars.next().ok_or(PokerSimError::TooFewChars)?;

        if chars.next().is_some() {
            return Err(PokerSimError::UnparsedCharsRemaining);
        }

        let value = Value::from_char(value_char).ok_or(PokerSimError::UnexpectedValueChar)?;
        let suit = Suit::from_char(suit_char).ok_or(PokerSimError::UnexpectedSuitChar)?;
        Ok(Card::new(value, suit))
    }
}
