#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use poker_sim::core::Card;
use poker_sim::holdem::{GameType, MonteCarloSim, PlayerSetup, Scenario, TableSetup};
use rand::{SeedableRng, rngs::StdRng};

fn scenario(game_type: GameType, num_players: usize) -> Scenario {
    let hand = match game_type {
        GameType::Texas => vec!["Ad", "Ah"],
        GameType::Omaha => vec!["Ad", "Ah", "Kc", "Qs"],
    };
    let hand: Vec<Card> = hand
        .into_iter()
        .map(|c| Card::try_from(c).expect("Should be able to parse a card."))
        .collect();

    let mut players = vec![PlayerSetup::with_hand("Hero", hand)];
    players.extend((1..num_players).map(|i| PlayerSetup::random(format!("Villain{i}"))));
    Scenario {
        game_type,
        players,
        table: TableSetup::default(),
    }
}

fn simulate_hands(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo_100_hands");
    for game_type in [GameType::Texas, GameType::Omaha] {
        for num_players in [2, 4] {
            let sim = MonteCarloSim::new(scenario(game_type, num_players));
            group.bench_with_input(
                BenchmarkId::new(format!("{game_type:?}"), num_players),
                &sim,
                |b, sim| {
                    let mut rng = StdRng::seed_from_u64(420);
                    b.iter(|| {
                        sim.estimate_with_rng(100, &mut rng)
                            .expect("Should be able to simulate.")
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, simulate_hands);
criterion_main!(benches);
