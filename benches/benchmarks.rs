//! Criterion benchmarks for graphlet.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use graphlet::{AdjacencyList, Graph, NeighbourSpec};

/// A random connected-ish adjacency description.
fn make_description(vertex_count: usize, neighbours_per_vertex: usize) -> AdjacencyList {
    let mut rng = rand::thread_rng();
    let mut description: AdjacencyList = Vec::with_capacity(vertex_count);

    for i in 0..vertex_count {
        let mut specs = Vec::with_capacity(neighbours_per_vertex + 1);
        // Chain to the previous vertex so every vertex is reachable from v0.
        if i > 0 {
            specs.push(NeighbourSpec::to(format!("v{}", i - 1)).weight(1));
        }
        for _ in 0..neighbours_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            let weight = rng.gen_range(1..100);
            specs.push(NeighbourSpec::to(format!("v{target}")).weight(weight));
        }
        description.push((format!("v{i}"), specs));
    }

    description
}

fn bench_construction(c: &mut Criterion) {
    let description = make_description(1_000, 8);
    c.bench_function("build_1k_vertices", |b| {
        b.iter(|| Graph::from_adjacency(description.clone()).unwrap())
    });
}

fn bench_traversals(c: &mut Criterion) {
    let graph = Graph::from_adjacency(make_description(1_000, 8)).unwrap();

    c.bench_function("bfs_1k_vertices", |b| {
        b.iter(|| graph.breadth_first("v0").unwrap())
    });
    c.bench_function("dfs_iterative_1k_vertices", |b| {
        b.iter(|| graph.depth_first_iterative("v0").unwrap())
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = Graph::from_adjacency(make_description(1_000, 8)).unwrap();
    c.bench_function("dijkstra_1k_vertices", |b| {
        b.iter(|| graph.dijkstra("v0").unwrap())
    });
}

criterion_group!(benches, bench_construction, bench_traversals, bench_dijkstra);
criterion_main!(benches);
