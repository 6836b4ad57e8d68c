use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, PokerSimError, Suit, Value};

/// `Deck` is the ordered pile of cards that have not been dealt yet.
///
/// Cards are drawn from the end of the deck. A deck is built with all
/// 52 cards in a fixed order and must be shuffled once before the
/// first draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Create a full deck that has already been shuffled.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Given a card, is it still in the deck?
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Randomly shuffle the deck in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Remove and return the last card of the deck.
    /// None if the deck is empty
    ///
    /// ```
    /// use poker_sim::core::Deck;
    ///
    /// let mut deck = Deck::default();
    /// let card = deck.draw();
    ///
    /// assert!(card.is_some());
    /// assert_eq!(51, deck.len());
    /// ```
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Find the card with the given value and suit, take it out of the deck
    /// and return it.
    ///
    /// ```
    /// use poker_sim::core::{Deck, PokerSimError, Suit, Value};
    ///
    /// let mut deck = Deck::default();
    /// let card = deck.find_and_pop(Value::Ace, Suit::Heart).unwrap();
    /// assert_eq!(Value::Ace, card.value);
    ///
    /// // The ace of hearts is gone now.
    /// assert!(matches!(
    ///     deck.find_and_pop(Value::Ace, Suit::Heart),
    ///     Err(PokerSimError::CardNotFound(_))
    /// ));
    /// ```
    pub fn find_and_pop(&mut self, value: Value, suit: Suit) -> Result<Card, PokerSimError> {
        let target = Card::new(value, suit);
        let idx = self
            .cards
            .iter()
            .position(|c| *c == target)
            .ok_or(PokerSimError::CardNotFound(target))?;
        Ok(self.cards.remove(idx))
    }

    /// Iterate over the cards left, bottom of the deck first.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    /// Create the full 52 card deck in a fixed order.
    ///
    /// ```
    /// use poker_sim::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        let cards = Value::values()
            .into_iter()
            .flat_map(|v| Suit::suits().into_iter().map(move |s| Card::new(v, s)))
            .collect();
        Self { cards }
    }
}

impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_default_is_every_card_once() {
        let deck = Deck::default();
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(Deck::SIZE, deck.len());
        assert_eq!(Deck::SIZE, unique.len());
    }

    #[test]
    fn test_shuffle_rng() {
        let mut d_one = Deck::default();
        let mut d_two = Deck::default();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        d_one.shuffle(&mut rng_one);
        d_two.shuffle(&mut rng_two);

        assert_eq!(d_one, d_two);
        assert_ne!(Deck::default(), d_one);
    }

    #[test]
    fn test_draw_takes_last_card() {
        let c = Card::new(Value::Nine, Suit::Heart);
        let c2 = Card::new(Value::Ten, Suit::Heart);
        let mut deck: Deck = vec![c, c2].into();

        assert_eq!(Some(c2), deck.draw());
        assert_eq!(Some(c), deck.draw());
        assert!(deck.is_empty());
        assert_eq!(None, deck.draw());
    }

    #[test]
    fn test_find_and_pop() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let card = deck.find_and_pop(Value::Queen, Suit::Club).unwrap();

        assert_eq!(Card::new(Value::Queen, Suit::Club), card);
        assert_eq!(51, deck.len());
        assert!(!deck.contains(&card));
    }

    #[test]
    fn test_twice_pop_card() {
        let mut deck = Deck::default();
        deck.find_and_pop(Value::Ace, Suit::Heart).unwrap();

        let err = deck.find_and_pop(Value::Ace, Suit::Heart).unwrap_err();
        assert!(matches!(
            err,
            PokerSimError::CardNotFound(Card {
                value: Value::Ace,
                suit: Suit::Heart
            })
        ));
        // A miss doesn't change the deck.
        assert_eq!(51, deck.len());
    }

    #[test]
    fn test_find_and_pop_keeps_order() {
        let mut deck = Deck::default();
        let before: Vec<Card> = deck.iter().copied().collect();
        let removed = deck.find_and_pop(Value::Seven, Suit::Diamond).unwrap();

        let expected: Vec<Card> = before.into_iter().filter(|c| *c != removed).collect();
        assert_eq!(expected, deck.into_iter().collect::<Vec<_>>());
    }
}
