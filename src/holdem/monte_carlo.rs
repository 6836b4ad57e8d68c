use std::collections::BTreeMap;

use rand::Rng;
use tracing::{Level, event, trace_span};

use crate::core::PokerSimError;

use super::{Game, Outcome, Scenario};

/// Tally of a batch of simulated hands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationReport {
    pub iterations: usize,
    /// How many hands each player won, ties counted under `"Tie"`.
    pub outcomes: BTreeMap<String, usize>,
}

impl SimulationReport {
    /// Start a report with every player and `"Tie"` at zero.
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let outcomes = names
            .into_iter()
            .chain(std::iter::once(Outcome::TIE))
            .map(|name| (name.to_string(), 0))
            .collect();
        Self {
            iterations: 0,
            outcomes,
        }
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.iterations += 1;
        *self.outcomes.entry(outcome.label().to_string()).or_insert(0) += 1;
    }

    pub fn wins(&self, label: &str) -> usize {
        self.outcomes.get(label).copied().unwrap_or(0)
    }

    /// The share of hands that ended with each label.
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        let total = self.iterations.max(1) as f64;
        self.outcomes
            .iter()
            .map(|(name, count)| (name.clone(), *count as f64 / total))
            .collect()
    }
}

/// How many times one trial is re-dealt before its error is returned.
pub const MAX_REDEALS: usize = 100;

/// Estimate how often each player wins a scenario by dealing it out
/// over and over.
///
/// Every trial gets its own `Game` and its own shuffle, nothing carries
/// over from one hand to the next.
#[derive(Debug, Clone)]
pub struct MonteCarloSim {
    scenario: Scenario,
}

impl MonteCarloSim {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Play `iterations` hands with the thread local rng.
    pub fn estimate(&self, iterations: usize) -> Result<SimulationReport, PokerSimError> {
        let mut rng = rand::rng();
        self.estimate_with_rng(iterations, &mut rng)
    }

    /// Play `iterations` hands shuffling with `rng`.
    ///
    /// A random board can deal a card the scenario places on a later
    /// street. Those deals are thrown away and the trial is dealt again,
    /// up to `MAX_REDEALS` times. Any other failure, including a known
    /// hole card missing at the start, stops the batch.
    pub fn estimate_with_rng<R: Rng>(
        &self,
        iterations: usize,
        rng: &mut R,
    ) -> Result<SimulationReport, PokerSimError> {
        let span = trace_span!("MonteCarloSim::estimate", iterations);
        let _enter = span.enter();

        let mut report = SimulationReport::new(self.scenario.player_names());
        for _ in 0..iterations {
            let outcome = self.play_trial(rng)?;
            report.record(&outcome);
        }

        event!(Level::DEBUG, outcomes = ?report.outcomes, "Simulation complete");
        Ok(report)
    }

    fn play_trial<R: Rng>(&self, rng: &mut R) -> Result<Outcome, PokerSimError> {
        let mut redeals = 0;
        loop {
            let mut game = Game::new_with_rng(self.scenario.clone(), rng)?;
            game.start()?;
            match deal_board(&mut game) {
                Ok(()) => return game.compute_winner(),
                Err(PokerSimError::CardNotFound(card)) if redeals < MAX_REDEALS => {
                    redeals += 1;
                    event!(Level::TRACE, %card, redeals, "Board used a known card, dealing again");
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn deal_board(game: &mut Game) -> Result<(), PokerSimError> {
    game.flop()?;
    game.turn()?;
    game.river()
}
