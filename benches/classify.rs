use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_hands::builder::BuilderChain;
use poker_hands::cards::{parse_cards, Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deal `count` seeded hands of `size` cards from fresh shuffled decks.
fn deal(size: usize, count: usize, seed: u64) -> Vec<Vec<Card>> {
    let deck: Vec<Card> =
        Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut cards = deck.clone();
            cards.shuffle(&mut rng);
            cards.truncate(size);
            cards
        })
        .collect()
}

fn bench_fixed_hands(c: &mut Criterion) {
    let chain = BuilderChain::standard();
    let high = parse_cards("Ah Kd 7s 5c 2d").expect("valid cards");
    let royal = parse_cards("Ah Kh Qh Jh Th").expect("valid cards");

    let mut g = c.benchmark_group("classify_fixed");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &high, |b, input| {
        b.iter(|| chain.classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "A-T hearts"), &royal, |b, input| {
        b.iter(|| chain.classify(black_box(input)))
    });
    g.finish();
}

fn bench_random_hands(c: &mut Criterion) {
    let chain = BuilderChain::standard();
    let mut g = c.benchmark_group("classify_random");
    for size in [5usize, 7] {
        let hands = deal(size, 1_000, 42);
        g.bench_with_input(BenchmarkId::from_parameter(size), &hands, |b, hands| {
            b.iter(|| {
                for hand in hands {
                    let _ = black_box(chain.classify(black_box(hand)));
                }
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_fixed_hands, bench_random_hands);
criterion_main!(benches);
