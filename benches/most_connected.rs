use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use follower_net::graph::Graph;

/// A ring of `n` vertices where each vertex also follows the vertex `stride` places ahead.
fn ring(n: u32, stride: u32) -> Graph<u32> {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_directed_edges(i, [(i + 1) % n, (i + stride) % n]);
    }

    graph
}

fn bench_most_connected(c: &mut Criterion) {
    let mut group = c.benchmark_group("most_connected");

    for n in [100, 400] {
        let graph = ring(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| black_box(graph.most_connected()))
        });
    }

    group.finish();
}

fn bench_reachable_subgraph(c: &mut Criterion) {
    let graph = ring(1_000, 7);

    c.bench_function("reachable_subgraph", |b| {
        b.iter(|| black_box(graph.reachable_subgraph(&0)))
    });
}

criterion_group!(benches, bench_most_connected, bench_reachable_subgraph);
criterion_main!(benches);
