//! Benchmark for the search engines on a synthetic grid network.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use transit_core::{search, shortest_path, Graph};

/// `size x size` grid with varying positive weights.
fn grid(size: usize) -> Graph<(usize, usize)> {
    let mut graph = Graph::new();
    for row in 0..size {
        for col in 0..size {
            let weight = 1.0 + ((row * 7 + col * 3) % 5) as f64;
            if col + 1 < size {
                graph
                    .add_edge((row, col), (row, col + 1), "h", weight)
                    .unwrap();
            }
            if row + 1 < size {
                graph
                    .add_edge((row, col), (row + 1, col), "v", weight + 0.5)
                    .unwrap();
            }
        }
    }
    graph
}

fn bench_single_source(c: &mut Criterion) {
    let graph = grid(30);
    c.bench_function("dijkstra_single_source_900", |b| {
        b.iter(|| black_box(shortest_path::single_source(&graph, &(0, 0)).unwrap()))
    });
}

fn bench_all_pairs(c: &mut Criterion) {
    let graph = grid(12);
    c.bench_function("dijkstra_all_pairs_144", |b| {
        b.iter(|| black_box(shortest_path::all_pairs(&graph).unwrap()))
    });
    c.bench_function("dijkstra_all_pairs_parallel_144", |b| {
        b.iter(|| black_box(shortest_path::all_pairs_parallel(&graph).unwrap()))
    });
}

fn bench_unweighted(c: &mut Criterion) {
    let graph = grid(30);
    c.bench_function("bfs_corner_to_corner_900", |b| {
        b.iter(|| black_box(search::bfs_path(&graph, &(0, 0), &(29, 29)).unwrap()))
    });
    c.bench_function("dfs_corner_to_corner_900", |b| {
        b.iter(|| black_box(search::dfs_path(&graph, &(0, 0), &(29, 29)).unwrap()))
    });
}

criterion_group!(benches, bench_single_source, bench_all_pairs, bench_unweighted);
criterion_main!(benches);
