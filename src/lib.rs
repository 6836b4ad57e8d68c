//! # poker_sim
//!
//! Simulate Texas Hold'em and Omaha hands from a partially or fully known
//! card state and estimate who wins.
//!
//! A [`holdem::Scenario`] lists the players, any hole cards that are already
//! known, and any known flop or turn. A [`holdem::Game`] deals the rest from a
//! shuffled deck through the start, flop, turn and river phases, moving cards
//! out of players' hands or the burn pile when a known board card collides
//! with them. The showdown evaluates every hand and names the winner or a tie.
//!
//! ```
//! use poker_sim::core::Card;
//! use poker_sim::holdem::{Game, GameType, Outcome, PlayerSetup, Scenario, TableSetup};
//!
//! let cards = |s: &[&str]| s.iter().map(|c| Card::try_from(*c).unwrap()).collect::<Vec<_>>();
//! let scenario = Scenario {
//!     game_type: GameType::Texas,
//!     players: vec![
//!         PlayerSetup::with_hand("Sam", cards(&["As", "Kd"])),
//!         PlayerSetup::with_hand("Arch", cards(&["Ac", "Kh"])),
//!     ],
//!     table: TableSetup {
//!         flop: Some(cards(&["Qh", "Jd", "Tc"])),
//!         ..Default::default()
//!     },
//! };
//!
//! let mut game = Game::new(scenario).unwrap();
//! let outcome = game.run().unwrap();
//! assert_eq!(Outcome::TIE, outcome.label());
//! ```
//!
//! [`holdem::MonteCarloSim`] repeats that over many independent games and
//! reports how often each player wins.

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to the flow of a game.
pub mod core;
/// Scenarios, the game orchestrator, showdown and simulation.
pub mod holdem;
