use rust_uno::cards::Color;
use rust_uno::core::{PlayerId, PlayerMap};
use rust_uno::decision::{play_out, ActionChooser, GreedyChooser, RandomChooser};
use rust_uno::engine::{Game, GameBuilder};
use rust_uno::skills::{ChainAbsorber, ChainExtender, Purge};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        building_a_table,
        listing_legal_actions,
        playing_out_random_games,
        playing_out_greedy_games,
        playing_out_with_heroes,
}

fn random_seats(n: usize, seed: u64) -> PlayerMap<Box<dyn ActionChooser>> {
    PlayerMap::new(n, |p| Box::new(RandomChooser::new(seed + p.0 as u64)) as Box<dyn ActionChooser>)
}

fn building_a_table(c: &mut criterion::Criterion) {
    let mut seed = 0u64;
    c.bench_function("deal a 4-seat table", |b| {
        b.iter(|| {
            seed += 1;
            GameBuilder::new(4).seed(seed).build()
        })
    });
}

fn listing_legal_actions(c: &mut criterion::Criterion) {
    let game = GameBuilder::new(4).seed(7).build().unwrap();
    let actor = game.actor().unwrap();
    c.bench_function("list legal actions for the acting seat", |b| {
        b.iter(|| game.current_legal_actions(actor))
    });
}

fn playing_out_random_games(c: &mut criterion::Criterion) {
    let mut seed = 0u64;
    c.bench_function("play out a 4-seat random game", |b| {
        b.iter(|| {
            seed += 1;
            let mut game = GameBuilder::new(4).seed(seed).build().unwrap();
            play_out(&mut game, &mut random_seats(4, seed), 10_000)
        })
    });
}

fn playing_out_greedy_games(c: &mut criterion::Criterion) {
    let mut seed = 0u64;
    c.bench_function("play out a 6-seat greedy game", |b| {
        b.iter(|| {
            seed += 1;
            let mut game = GameBuilder::new(6).seed(seed).build().unwrap();
            let mut seats: PlayerMap<Box<dyn ActionChooser>> =
                PlayerMap::new(6, |_| Box::new(GreedyChooser) as Box<dyn ActionChooser>);
            play_out(&mut game, &mut seats, 10_000)
        })
    });
}

fn heroic_table(seed: u64) -> Game {
    GameBuilder::new(4)
        .seed(seed)
        .hero(PlayerId::new(0), ChainAbsorber::default())
        .hero(PlayerId::new(1), Purge::default())
        .hero(PlayerId::new(2), ChainExtender::new(Color::Red))
        .build()
        .unwrap()
}

fn playing_out_with_heroes(c: &mut criterion::Criterion) {
    let mut seed = 0u64;
    c.bench_function("play out a 4-seat game with heroes", |b| {
        b.iter(|| {
            seed += 1;
            let mut game = heroic_table(seed);
            play_out(&mut game, &mut random_seats(4, seed), 10_000)
        })
    });
}
