use std::cmp::Ordering;
use std::fmt;

use super::{Card, Suit, Value};

/// All the different possible hand categories.
/// The discriminant is the category number, high card lowest.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// The lowest rank.
    /// No matches
    HighCard = 1,
    /// One Card matches another.
    OnePair = 2,
    /// Two different pair of matching cards.
    TwoPair = 3,
    /// Three of the same value.
    ThreeOfAKind = 4,
    /// Five cards in a sequence
    Straight = 5,
    /// Five cards of the same suit
    Flush = 6,
    /// Three of one value and two of another value
    FullHouse = 7,
    /// Four of the same value.
    FourOfAKind = 8,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 9,
}

impl Category {
    /// The category number, 1 (high card) through 9 (straight flush).
    pub const fn number(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High card",
            Category::OnePair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        };
        f.write_str(name)
    }
}

/// The strength of one player's hand on a completed board.
///
/// `primary` holds the values that make up the category, in the order
/// they are compared (highest first, or the triple before the pair for a
/// full house). `kickers` holds the remaining values used only to break
/// ties, highest first.
///
/// Evaluations are totally ordered: the category decides first, then
/// the primary values element by element, then the kickers the same
/// way. Once the shorter of two sequences runs out without a difference
/// the two hands are equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation {
    category: Category,
    primary: Vec<Value>,
    kickers: Vec<Value>,
}

impl Evaluation {
    /// Create an evaluation. The kickers are sorted highest first.
    pub fn new(category: Category, primary: Vec<Value>, mut kickers: Vec<Value>) -> Self {
        kickers.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            category,
            primary,
            kickers,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn primary(&self) -> &[Value] {
        &self.primary
    }

    pub fn kickers(&self) -> &[Value] {
        &self.kickers
    }
}

/// Compare two value sequences element by element over their common prefix.
fn cmp_values(a: &[Value], b: &[Value]) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| cmp_values(&self.primary, &other.primary))
            .then_with(|| cmp_values(&self.kickers, &other.kickers))
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for v in &self.primary {
            write!(f, " {}", v.to_char())?;
        }
        if !self.kickers.is_empty() {
            write!(f, " (")?;
            for v in &self.kickers {
                write!(f, "{}", v.to_char())?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Can this turn into a hand evaluation?
pub trait Rankable {
    /// Evaluate every card as one pool, picking the best
    /// five of however many there are.
    fn evaluate(&self) -> Evaluation;
}

impl Rankable for [Card] {
    fn evaluate(&self) -> Evaluation {
        evaluate_pool(self)
    }
}

impl Rankable for Vec<Card> {
    fn evaluate(&self) -> Evaluation {
        evaluate_pool(self)
    }
}

/// Evaluate hole cards and community cards together as one pool.
///
/// ```
/// use poker_sim::core::{Card, Category, evaluate};
///
/// let hole = [Card::try_from("Ah").unwrap(), Card::try_from("Kh").unwrap()];
/// let board = ["Qh", "Jh", "Th", "2c", "3d"].map(|c| Card::try_from(c).unwrap());
///
/// assert_eq!(Category::StraightFlush, evaluate(&hole, &board).category());
/// ```
pub fn evaluate(hole: &[Card], board: &[Card]) -> Evaluation {
    let cards: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
    evaluate_pool(&cards)
}

/// The highest `n` values not in `exclude`, from values sorted highest first.
fn kickers(values: &[Value], exclude: &[Value], n: usize) -> Vec<Value> {
    values
        .iter()
        .copied()
        .filter(|v| !exclude.contains(v))
        .take(n)
        .collect()
}

/// Find the highest straight in a list of values.
/// The ace also plays low, so A-2-3-4-5 is a straight with five high.
fn straight_high(values: &[Value]) -> Option<Value> {
    let mut mask: u16 = 0;
    for v in values {
        mask |= 1 << v.rank();
        if *v == Value::Ace {
            mask |= 1 << 1;
        }
    }

    (5..=Value::Ace.rank())
        .rev()
        .find(|high| (mask >> (high - 4)) & 0b1_1111 == 0b1_1111)
        .and_then(Value::from_rank)
}

fn evaluate_pool(cards: &[Card]) -> Evaluation {
    let mut values: Vec<Value> = cards.iter().map(|c| c.value).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let mut counts = [0u8; 15];
    for v in &values {
        counts[usize::from(v.rank())] += 1;
    }
    // Values holding exactly `n` cards, highest first.
    let with_count = |n: u8| -> Vec<Value> {
        Value::values()
            .into_iter()
            .rev()
            .filter(|v| counts[usize::from(v.rank())] == n)
            .collect()
    };

    let flush_values: Option<Vec<Value>> = Suit::suits().into_iter().find_map(|suit| {
        let mut suited: Vec<Value> = cards
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.value)
            .collect();
        suited.sort_unstable_by(|a, b| b.cmp(a));
        (suited.len() >= 5).then_some(suited)
    });

    if let Some(high) = flush_values.as_deref().and_then(straight_high) {
        return Evaluation::new(Category::StraightFlush, vec![high], vec![]);
    }

    if let Some(&quads) = with_count(4).first() {
        return Evaluation::new(
            Category::FourOfAKind,
            vec![quads],
            kickers(&values, &[quads], 1),
        );
    }

    let mut repeated: Vec<u8> = counts.iter().copied().filter(|c| *c >= 2).collect();
    repeated.sort_unstable();
    if repeated == [2, 3] {
        let trips = with_count(3)[0];
        let pair = with_count(2)[0];
        return Evaluation::new(Category::FullHouse, vec![trips, pair], vec![]);
    }

    if let Some(suited) = flush_values {
        return Evaluation::new(Category::Flush, kickers(&suited, &[], 5), vec![]);
    }

    if let Some(high) = straight_high(&values) {
        return Evaluation::new(Category::Straight, vec![high], vec![]);
    }

    if let Some(&trips) = with_count(3).first() {
        return Evaluation::new(
            Category::ThreeOfAKind,
            vec![trips],
            kickers(&values, &[trips], 2),
        );
    }

    let pairs = with_count(2);
    if pairs.len() >= 2 {
        let both = [pairs[0], pairs[1]];
        return Evaluation::new(Category::TwoPair, both.to_vec(), kickers(&values, &both, 1));
    }

    if let [pair] = pairs.as_slice() {
        return Evaluation::new(
            Category::OnePair,
            vec![*pair],
            kickers(&values, &[*pair], 3),
        );
    }

    Evaluation::new(Category::HighCard, vec![], kickers(&values, &[], 5))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &[&str]) -> Vec<Card> {
        s.iter().map(|c| Card::try_from(*c).unwrap()).collect()
    }

    fn eval(s: &[&str]) -> Evaluation {
        cards(s).evaluate()
    }

    #[test]
    fn test_category_numbers() {
        assert_eq!(1, Category::HighCard.number());
        assert_eq!(9, Category::StraightFlush.number());
        assert!(Category::HighCard < Category::StraightFlush);
        assert!(Category::FourOfAKind < Category::StraightFlush);
    }

    #[test]
    fn test_high_card_hand() {
        let e = eval(&["Ad", "8h", "9c", "Tc", "5c", "2s", "3h"]);
        assert_eq!(Category::HighCard, e.category());
        assert!(e.primary().is_empty());
        assert_eq!(
            &[Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five],
            e.kickers()
        );
    }

    #[test]
    fn test_one_pair() {
        let e = eval(&["Ad", "Ac", "9d", "8c", "Ts", "2h", "4h"]);
        assert_eq!(Category::OnePair, e.category());
        assert_eq!(&[Value::Ace], e.primary());
        assert_eq!(&[Value::Ten, Value::Nine, Value::Eight], e.kickers());
    }

    #[test]
    fn test_two_pair_takes_highest_pairs() {
        let e = eval(&["Ad", "Ac", "9d", "9c", "Ts", "Th", "4h"]);
        assert_eq!(Category::TwoPair, e.category());
        assert_eq!(&[Value::Ace, Value::Ten], e.primary());
        // The third pair can still play as the kicker.
        assert_eq!(&[Value::Nine], e.kickers());
    }

    #[test]
    fn test_three_of_a_kind() {
        let e = eval(&["2c", "2s", "2h", "5s", "6d", "Kh", "9c"]);
        assert_eq!(Category::ThreeOfAKind, e.category());
        assert_eq!(&[Value::Two], e.primary());
        assert_eq!(&[Value::King, Value::Nine], e.kickers());
    }

    #[test]
    fn test_straight() {
        let e = eval(&["2c", "3s", "4h", "5s", "6d", "Kh", "Kc"]);
        assert_eq!(Category::Straight, e.category());
        assert_eq!(&[Value::Six], e.primary());
    }

    #[test]
    fn test_wheel_below_six_high() {
        let wheel = eval(&["Ad", "2c", "3s", "4h", "5s", "9d", "Jc"]);
        assert_eq!(Category::Straight, wheel.category());
        assert_eq!(&[Value::Five], wheel.primary());

        let six_high = eval(&["6d", "2c", "3s", "4h", "5s", "9d", "Jc"]);
        assert!(wheel < six_high);
    }

    #[test]
    fn test_flush_top_five() {
        let e = eval(&["Ad", "8d", "9d", "Td", "5d", "2d", "Kc"]);
        assert_eq!(Category::Flush, e.category());
        assert_eq!(
            &[Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five],
            e.primary()
        );
    }

    #[test]
    fn test_full_house() {
        let e = eval(&["9d", "9c", "9s", "Ad", "Ac", "2h", "4h"]);
        assert_eq!(Category::FullHouse, e.category());
        // The triple is compared before the pair.
        assert_eq!(&[Value::Nine, Value::Ace], e.primary());

        let aces_full = eval(&["Ad", "Ac", "As", "9d", "9c", "2h", "4h"]);
        assert!(aces_full > e);
    }

    #[test]
    fn test_full_house_needs_exactly_one_triple_and_one_pair() {
        // A second pair means the repeated counts are not exactly {3, 2}.
        let e = eval(&["9d", "9c", "9s", "Ad", "Ac", "2h", "2c"]);
        assert_eq!(Category::ThreeOfAKind, e.category());
        assert_eq!(&[Value::Nine], e.primary());
    }

    #[test]
    fn test_four_of_a_kind() {
        let e = eval(&["Ad", "Ac", "As", "Ah", "Ts", "Kd", "2c"]);
        assert_eq!(Category::FourOfAKind, e.category());
        assert_eq!(&[Value::Ace], e.primary());
        assert_eq!(&[Value::King], e.kickers());
    }

    #[test]
    fn test_straight_flush_over_flush() {
        let e = eval(&["9h", "Th", "Jh", "Qh", "Kh", "2h", "Ac"]);
        assert_eq!(Category::StraightFlush, e.category());
        assert_eq!(&[Value::King], e.primary());
    }

    #[test]
    fn test_straight_and_flush_in_different_cards_is_a_flush() {
        // 5-9 straight but the hearts are not consecutive.
        let e = eval(&["5h", "6h", "7c", "8h", "9d", "2h", "Kh"]);
        assert_eq!(Category::Flush, e.category());
    }

    #[test]
    fn test_category_dominates_kickers() {
        let low_straight_flush = eval(&["2s", "3s", "4s", "5s", "6s"]);
        let best_quads = eval(&["Ad", "Ac", "As", "Ah", "Ks"]);
        assert!(low_straight_flush > best_quads);

        let low_pair = eval(&["2s", "2d", "3c", "4h", "6s"]);
        let best_high = eval(&["As", "Kd", "Qc", "Jh", "9s"]);
        assert!(low_pair > best_high);
    }

    #[test]
    fn test_kicker_breaks_tie() {
        let a = eval(&["Ks", "Kd", "Ac", "7h", "6s"]);
        let b = eval(&["Kc", "Kh", "Qc", "7d", "6d"]);
        assert!(a > b);
    }

    #[test]
    fn test_identical_cards_compare_equal() {
        let hole = cards(&["As", "Kd"]);
        let board = cards(&["Qh", "Jd", "Tc", "2s", "2h"]);
        assert_eq!(evaluate(&hole, &board), evaluate(&hole, &board));
    }

    #[test]
    fn test_same_straight_different_suits_tie() {
        let board = cards(&["Qh", "Jd", "Tc", "3s", "7h"]);
        let a = evaluate(&cards(&["As", "Kd"]), &board);
        let b = evaluate(&cards(&["Ac", "Kh"]), &board);
        assert_eq!(Category::Straight, a.category());
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let e = eval(&["Ad", "Ac", "9d", "8c", "Ts"]);
        assert_eq!("One pair A (T98)", e.to_string());
    }
}
