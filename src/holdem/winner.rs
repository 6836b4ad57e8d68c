use std::cmp::Ordering;

use crate::core::Evaluation;

/// Who took the hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(String),
    /// Every player sharing the best hand, in seat order.
    Tie(Vec<String>),
}

impl Outcome {
    /// The label a tied hand is counted under.
    pub const TIE: &'static str = "Tie";

    /// The winner's name, or `"Tie"`.
    pub fn label(&self) -> &str {
        match self {
            Outcome::Winner(name) => name,
            Outcome::Tie(_) => Self::TIE,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie(_))
    }
}

/// Pick the winner out of every player's evaluation.
///
/// Only players in the best category are considered. Among those the
/// best evaluation wins and everyone equal to it shares the outcome.
/// Returns `None` when there are no players at all.
///
/// ```
/// use poker_sim::core::{Card, Rankable};
/// use poker_sim::holdem::{Outcome, resolve_winner};
///
/// let hand = |s: &[&str]| -> Vec<Card> { s.iter().map(|c| Card::try_from(*c).unwrap()).collect() };
/// let evaluations = vec![
///     ("Sam".to_string(), hand(&["Ah", "Ad", "2c", "7s", "9h"]).evaluate()),
///     ("Arch".to_string(), hand(&["Kh", "Kd", "2d", "7c", "9s"]).evaluate()),
/// ];
/// assert_eq!(Some(Outcome::Winner("Sam".to_string())), resolve_winner(&evaluations));
/// ```
pub fn resolve_winner(evaluations: &[(String, Evaluation)]) -> Option<Outcome> {
    let best_category = evaluations.iter().map(|(_, e)| e.category()).max()?;
    let contenders: Vec<&(String, Evaluation)> = evaluations
        .iter()
        .filter(|(_, e)| e.category() == best_category)
        .collect();

    if let [(name, _)] = contenders.as_slice() {
        return Some(Outcome::Winner(name.clone()));
    }

    let mut best: Vec<&(String, Evaluation)> = vec![];
    for contender in contenders {
        match best.first().map(|(_, e)| contender.1.cmp(e)) {
            None | Some(Ordering::Greater) => best = vec![contender],
            Some(Ordering::Equal) => best.push(contender),
            Some(Ordering::Less) => {}
        }
    }

    match best.as_slice() {
        [(name, _)] => Some(Outcome::Winner(name.clone())),
        tied => Some(Outcome::Tie(
            tied.iter().map(|(name, _)| name.clone()).collect(),
        )),
    }
}
