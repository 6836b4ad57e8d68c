/// Module with the game variants and their hand evaluators.
mod variant;
/// Export `GameType` and the evaluator strategies
pub use self::variant::{Evaluator, GameType, OmahaEvaluator, PoolEvaluator};

/// Module describing the known cards a hand starts from.
mod scenario;
/// Export `Scenario`
pub use self::scenario::{PlayerSetup, Scenario, TableSetup};

/// Module for `Game` that deals a single hand.
mod game;
/// Export `Game`
pub use self::game::{Game, Phase, Player, STREETS, Street};

/// Module that decides who won a hand.
mod winner;
/// Export `Outcome` and `resolve_winner`
pub use self::winner::{Outcome, resolve_winner};

/// Module that repeats a scenario to estimate win rates.
mod monte_carlo;
/// Export `MonteCarloSim`
pub use self::monte_carlo::{MAX_REDEALS, MonteCarloSim, SimulationReport};
