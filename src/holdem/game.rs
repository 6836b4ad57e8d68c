use std::collections::HashSet;

use rand::Rng;
use tracing::{Level, event};

use crate::core::{Card, Deck, Evaluation, PokerSimError};

use super::{Outcome, Scenario, resolve_winner};

/// The phases of a hand, in the order they have to be dealt.
///
/// The game's phase is always the next one waiting to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Start,
    Flop,
    Turn,
    River,
    Done,
}

impl Phase {
    pub fn advance(&self) -> Self {
        match *self {
            Phase::Start => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River => Phase::Done,
            Phase::Done => Phase::Done,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Phase::Start => "Start",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Done => "Done",
        }
    }
}

/// How one community street is dealt.
///
/// Every street either honors a known value from the scenario or ignores
/// it. A street dealt at random always burns one card then draws `cards`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Street {
    pub phase: Phase,
    /// Number of cards this street adds to the table.
    pub cards: usize,
    /// Place the scenario's known cards instead of drawing.
    pub honor_known: bool,
    /// A known card may be taken back out of the burn pile.
    pub recover_burnt: bool,
    /// Burn after every known card rather than once after all of them.
    pub burn_per_card: bool,
}

/// The dealing plan for the three community streets.
pub const STREETS: [Street; 3] = [
    Street {
        phase: Phase::Flop,
        cards: 3,
        honor_known: true,
        recover_burnt: false,
        burn_per_card: false,
    },
    Street {
        phase: Phase::Turn,
        cards: 1,
        honor_known: true,
        recover_burnt: true,
        burn_per_card: true,
    },
    Street {
        phase: Phase::River,
        cards: 1,
        honor_known: false,
        recover_burnt: false,
        burn_per_card: false,
    },
];

impl Street {
    /// The plan for a community phase, `None` for `Start` and `Done`.
    pub fn for_phase(phase: Phase) -> Option<&'static Street> {
        STREETS.iter().find(|s| s.phase == phase)
    }
}

/// A seat at the table and the hole cards it holds right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
}

fn show(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single simulated hand.
///
/// `Game` owns the deck and is the only thing that moves cards between
/// the deck, the players, the table and the burn pile. Across all four
/// piles every one of the 52 cards is present exactly once.
///
/// A street that fails part way through leaves the game unusable, start
/// a fresh `Game` for the next attempt.
#[derive(Debug, Clone)]
pub struct Game {
    scenario: Scenario,
    deck: Deck,
    players: Vec<Player>,
    table: Vec<Card>,
    burnt: Vec<Card>,
    phase: Phase,
}

impl Game {
    /// Create a game for the scenario with a freshly shuffled deck.
    pub fn new(scenario: Scenario) -> Result<Self, PokerSimError> {
        let mut rng = rand::rng();
        Self::new_with_rng(scenario, &mut rng)
    }

    /// Create a game for the scenario, shuffling the deck with `rng`.
    ///
    /// Player names label the outcome, so they have to be unique and can't
    /// be `"Tie"`.
    pub fn new_with_rng<R: Rng>(scenario: Scenario, rng: &mut R) -> Result<Self, PokerSimError> {
        if scenario.players.is_empty() {
            return Err(PokerSimError::NoPlayers);
        }
        let mut names = HashSet::new();
        for name in scenario.player_names() {
            if name == Outcome::TIE {
                return Err(PokerSimError::ReservedPlayerName(name.to_string()));
            }
            if !names.insert(name) {
                return Err(PokerSimError::DuplicatePlayerName(name.to_string()));
            }
        }
        let players = scenario
            .players
            .iter()
            .map(|p| Player {
                name: p.name.clone(),
                hand: Vec::with_capacity(scenario.game_type.hole_cards()),
            })
            .collect();

        Ok(Self {
            deck: Deck::new_and_shuffled(rng),
            players,
            table: Vec::with_capacity(5),
            burnt: Vec::with_capacity(3),
            phase: Phase::Start,
            scenario,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The community cards dealt so far.
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn burnt(&self) -> &[Card] {
        &self.burnt
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Deal every phase then resolve the winner.
    pub fn run(&mut self) -> Result<Outcome, PokerSimError> {
        self.start()?;
        self.flop()?;
        self.turn()?;
        self.river()?;
        self.compute_winner()
    }

    /// Deal the hole cards.
    ///
    /// Known hands are taken out of the deck first, so a player dealt at
    /// random can never be handed somebody else's known card. A known card
    /// that isn't in the deck anymore fails with `CardNotFound`. Every
    /// known card is checked before any card moves, so a failed start
    /// leaves the deck and the hands untouched.
    pub fn start(&mut self) -> Result<(), PokerSimError> {
        self.expect_phase(Phase::Start)?;

        let hole_cards = self.scenario.game_type.hole_cards();
        let mut known = HashSet::new();
        let mut random_seats = 0;
        for setup in &self.scenario.players {
            match &setup.hand {
                Some(hand) => {
                    for card in hand {
                        if !known.insert(*card) || !self.deck.contains(card) {
                            return Err(PokerSimError::CardNotFound(*card));
                        }
                    }
                }
                None => random_seats += 1,
            }
        }
        if known.len() + random_seats * hole_cards > self.deck.len() {
            return Err(PokerSimError::DeckExhausted);
        }

        for (player, setup) in self.players.iter_mut().zip(&self.scenario.players) {
            if let Some(known) = &setup.hand {
                for card in known {
                    player.hand.push(self.deck.find_and_pop(card.value, card.suit)?);
                }
            }
        }

        for (player, setup) in self.players.iter_mut().zip(&self.scenario.players) {
            if setup.hand.is_none() {
                for _ in 0..hole_cards {
                    let card = self.deck.draw().ok_or(PokerSimError::DeckExhausted)?;
                    player.hand.push(card);
                }
            }
            event!(
                Level::DEBUG,
                player = %player.name,
                hand = %show(&player.hand),
                "Dealt hole cards"
            );
        }

        self.phase = self.phase.advance();
        Ok(())
    }

    pub fn flop(&mut self) -> Result<(), PokerSimError> {
        self.deal_street(Phase::Flop)
    }

    pub fn turn(&mut self) -> Result<(), PokerSimError> {
        self.deal_street(Phase::Turn)
    }

    pub fn river(&mut self) -> Result<(), PokerSimError> {
        self.deal_street(Phase::River)
    }

    /// Score every player with the evaluator of the scenario's game type.
    pub fn evaluations(&self) -> Vec<(String, Evaluation)> {
        let evaluator = self.scenario.game_type.evaluator();
        self.players
            .iter()
            .map(|p| (p.name.clone(), evaluator.evaluate(&p.hand, &self.table)))
            .collect()
    }

    /// Find the winner once the river has been dealt.
    pub fn compute_winner(&self) -> Result<Outcome, PokerSimError> {
        self.expect_phase(Phase::Done)?;

        let evaluations = self.evaluations();
        for (name, evaluation) in &evaluations {
            event!(Level::DEBUG, player = %name, %evaluation, "Showdown");
        }
        let outcome = resolve_winner(&evaluations).ok_or(PokerSimError::NoPlayers)?;
        event!(Level::DEBUG, outcome = outcome.label(), "Hand complete");
        Ok(outcome)
    }

    fn expect_phase(&self, requested: Phase) -> Result<(), PokerSimError> {
        if self.phase != requested {
            return Err(PokerSimError::PhaseOutOfOrder {
                current: self.phase.name(),
                requested: requested.name(),
            });
        }
        Ok(())
    }

    fn known_cards(&self, phase: Phase) -> Option<Vec<Card>> {
        let table = &self.scenario.table;
        match phase {
            Phase::Flop => table.flop.clone(),
            Phase::Turn => table.turn.clone(),
            Phase::River => table.river.clone(),
            Phase::Start | Phase::Done => None,
        }
    }

    fn draw(&mut self) -> Result<Card, PokerSimError> {
        self.deck.draw().ok_or(PokerSimError::DeckExhausted)
    }

    fn burn(&mut self) -> Result<(), PokerSimError> {
        let card = self.draw()?;
        self.burnt.push(card);
        Ok(())
    }

    fn deal_street(&mut self, phase: Phase) -> Result<(), PokerSimError> {
        self.expect_phase(phase)?;
        let Some(street) = Street::for_phase(phase) else {
            return Err(PokerSimError::PhaseOutOfOrder {
                current: self.phase.name(),
                requested: phase.name(),
            });
        };

        match self.known_cards(phase) {
            Some(known) if street.honor_known => {
                for card in known {
                    let placed = self.place_known(card, street.recover_burnt)?;
                    self.table.push(placed);
                    if street.burn_per_card {
                        self.burn()?;
                    }
                }
                if !street.burn_per_card {
                    self.burn()?;
                }
            }
            known => {
                if let Some(known) = known {
                    event!(
                        Level::WARN,
                        ?phase,
                        ignored = %show(&known),
                        "Known cards are not used for this street, dealing from the deck"
                    );
                }
                self.burn()?;
                for _ in 0..street.cards {
                    let card = self.draw()?;
                    self.table.push(card);
                }
            }
        }

        event!(Level::DEBUG, ?phase, table = %show(&self.table), "Dealt street");
        self.phase = self.phase.advance();
        Ok(())
    }

    /// Take a known community card from wherever it is right now.
    ///
    /// A player holding it gets a replacement from the deck. Then the burn
    /// pile is searched when the street allows it, then the deck.
    fn place_known(&mut self, card: Card, recover_burnt: bool) -> Result<Card, PokerSimError> {
        if let Some(player) = self.players.iter_mut().find(|p| p.hand.contains(&card)) {
            let replacement = self.deck.draw().ok_or(PokerSimError::DeckExhausted)?;
            player.hand.retain(|c| *c != card);
            player.hand.push(replacement);
            event!(
                Level::TRACE,
                %card,
                player = %player.name,
                %replacement,
                "Took card from a player's hand"
            );
            return Ok(card);
        }

        if recover_burnt {
            if let Some(idx) = self.burnt.iter().position(|c| *c == card) {
                self.burnt.remove(idx);
                event!(Level::TRACE, %card, "Took card back from the burn pile");
                return Ok(card);
            }
        }

        self.deck.find_and_pop(card.value, card.suit)
    }
}
