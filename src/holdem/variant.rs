use crate::core::{Card, Evaluation, Rankable, evaluate};

/// Which poker variant a scenario is dealt and scored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GameType {
    /// Texas Hold'em, two hole cards.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "holdem"))]
    Texas,
    /// Omaha, four hole cards and exactly two of them must play.
    Omaha,
}

impl GameType {
    /// How many hole cards each player is dealt.
    pub const fn hole_cards(self) -> usize {
        match self {
            GameType::Texas => 2,
            GameType::Omaha => 4,
        }
    }

    /// The scoring strategy for this variant.
    pub fn evaluator(self) -> &'static dyn Evaluator {
        match self {
            GameType::Texas => &PoolEvaluator,
            GameType::Omaha => &OmahaEvaluator,
        }
    }
}

/// Turns a player's hole cards and the community cards into an evaluation.
pub trait Evaluator {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Evaluation;
}

/// Best five cards out of hole and board cards taken as one pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoolEvaluator;

impl Evaluator for PoolEvaluator {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Evaluation {
        evaluate(hole, board)
    }
}

/// Best hand using exactly two hole cards and exactly three board cards.
///
/// Every legal combination is scored and the best one is kept. With fewer
/// than two hole cards or three board cards there is no legal combination,
/// so the cards are scored as one pool instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct OmahaEvaluator;

/// Every way of choosing `k` cards out of `pool`, in order.
fn combinations(pool: &[Card], k: usize) -> Vec<Vec<Card>> {
    if k == 0 {
        return vec![vec![]];
    }
    if pool.len() < k {
        return vec![];
    }
    let (first, rest) = (pool[0], &pool[1..]);
    let mut with_first: Vec<Vec<Card>> = combinations(rest, k - 1)
        .into_iter()
        .map(|mut combo| {
            combo.insert(0, first);
            combo
        })
        .collect();
    with_first.extend(combinations(rest, k));
    with_first
}

impl Evaluator for OmahaEvaluator {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Evaluation {
        let hole_combos = combinations(hole, 2);
        let board_combos = combinations(board, 3);

        hole_combos
            .iter()
            .flat_map(|hc| {
                board_combos.iter().map(move |bc| {
                    let mut five = hc.clone();
                    five.extend_from_slice(bc);
                    five.evaluate()
                })
            })
            .max()
            .unwrap_or_else(|| evaluate(hole, board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Value};

    fn cards(s: &[&str]) -> Vec<Card> {
        s.iter().map(|c| Card::try_from(*c).unwrap()).collect()
    }

    #[test]
    fn test_hole_cards() {
        assert_eq!(2, GameType::Texas.hole_cards());
        assert_eq!(4, GameType::Omaha.hole_cards());
        assert_eq!(GameType::Texas, GameType::default());
    }

    #[test]
    fn test_combination_counts() {
        let hole = cards(&["Ah", "Kh", "Qh", "Jd"]);
        let board = cards(&["2h", "3h", "4h", "5h", "6h"]);
        assert_eq!(6, combinations(&hole, 2).len());
        assert_eq!(10, combinations(&board, 3).len());
        assert!(combinations(&hole[..1], 2).is_empty());
    }

    #[test]
    fn test_omaha_must_use_two_from_hand() {
        let hole = cards(&["Ah", "Kh", "Qh", "Jd"]);
        let board = cards(&["2h", "3h", "4h", "5h", "6h"]);

        // Taken as one pool the board alone is a straight flush.
        let pool = PoolEvaluator.evaluate(&hole, &board);
        assert_eq!(Category::StraightFlush, pool.category());

        // Two hole cards must play, so the best is an ace high flush.
        let omaha = OmahaEvaluator.evaluate(&hole, &board);
        assert_eq!(Category::Flush, omaha.category());
        assert_eq!(Value::Ace, omaha.primary()[0]);
        assert_eq!(Value::King, omaha.primary()[1]);
    }

    #[test]
    fn test_omaha_two_pair_limited_to_two_hole_cards() {
        let board = cards(&["7c", "8h", "9h", "Td", "Jc"]);
        let sam = OmahaEvaluator.evaluate(&cards(&["7h", "7d", "6h", "6d"]), &board);
        let arch = OmahaEvaluator.evaluate(&cards(&["8c", "8s", "5c", "5s"]), &board);

        // Sam plays 7-6 with 8-9-T for a straight, Arch's eights make trips.
        assert_eq!(Category::Straight, sam.category());
        assert_eq!(Category::ThreeOfAKind, arch.category());
        assert!(sam > arch);
    }

    #[test]
    fn test_omaha_full_house_beats_flush() {
        let board = cards(&["2h", "3h", "Th", "9c", "Td"]);
        let sam = OmahaEvaluator.evaluate(&cards(&["Ah", "Kh", "Qc", "Jd"]), &board);
        let arch = OmahaEvaluator.evaluate(&cards(&["Ts", "Tc", "9h", "9d"]), &board);

        assert_eq!(Category::Flush, sam.category());
        assert!(arch.category() > Category::Flush);
        assert!(arch > sam);
    }

    #[test]
    fn test_omaha_short_board_falls_back_to_pool() {
        let hole = cards(&["Ah", "Ad", "Kc", "Qs"]);
        let board = cards(&["As", "2c"]);
        let e = OmahaEvaluator.evaluate(&hole, &board);
        assert_eq!(Category::ThreeOfAKind, e.category());
    }

    #[test]
    fn test_evaluator_selection() {
        let hole = cards(&["Ah", "Kh", "Qh", "Jd"]);
        let board = cards(&["2h", "3h", "4h", "5h", "6h"]);
        assert_eq!(
            Category::StraightFlush,
            GameType::Texas.evaluator().evaluate(&hole, &board).category()
        );
        assert_eq!(
            Category::Flush,
            GameType::Omaha.evaluator().evaluate(&hole, &board).category()
        );
    }
}
