use aceoracle::Arbitrary;
use aceoracle::cards::deck::Deck;
use aceoracle::equity::river::River;
use aceoracle::evaluation::evaluator::Evaluator;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_five_card_hand,
        selecting_best_of_seven,
        exhausting_river_showdown,
}

fn evaluating_five_card_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 5-card Hand", |b| {
        let hand = Deck::new().deal(5);
        b.iter(|| Evaluator::try_from(hand).map(|e| e.strength()))
    });
}

fn selecting_best_of_seven(c: &mut criterion::Criterion) {
    c.bench_function("select the best 5 of a 7-card Hand", |b| {
        let hand = Deck::new().deal(7);
        b.iter(|| Evaluator::best(hand))
    });
}

fn exhausting_river_showdown(c: &mut criterion::Criterion) {
    let river = River::random();
    c.bench_function("exhaust all 990 River showdowns", |b| {
        b.iter(|| river.showdown())
    });
}
