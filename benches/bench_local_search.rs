use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metasearch::{
    objective::{Graph, GraphColoring},
    representation::Coloring,
    rng::RandomNumberGenerator,
    SearchDriver, SearchOutcome, SearchStrategy,
};

/// A ring of `n` vertices with chords to the vertex three steps ahead.
fn ring_with_chords(n: usize) -> Graph {
    let mut graph = Graph::new(n).unwrap();
    for i in 0..n {
        graph.add_edge(i, (i + 1) % n).unwrap();
        graph.add_edge(i, (i + 3) % n).unwrap();
    }
    graph
}

fn bench_strategies(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(7);

    let mut group = c.benchmark_group("coloring_local_search");
    for size in [20, 50, 100].iter() {
        let objective = GraphColoring::new(ring_with_chords(*size));
        for strategy in [
            SearchStrategy::RandomRestart,
            SearchStrategy::HillClimbing,
            SearchStrategy::IteratedLocalSearch,
        ] {
            let driver = SearchDriver::new(objective.clone(), strategy, 100)
                .unwrap()
                .with_max_neighbor_attempts(500)
                .unwrap();

            group.bench_function(&format!("{}_{}", strategy, size), |b| {
                b.iter(|| {
                    let outcome: SearchOutcome<Coloring> = driver.run(black_box(&mut rng)).unwrap();
                    black_box(outcome.cost)
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
