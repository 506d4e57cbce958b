use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kspan::graph::Graph;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn planted_graph(n: i32, p: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<i32> = (1..=n).collect();
    order.shuffle(&mut rng);

    let mut edges: Vec<(i32, i32)> = order.windows(2).map(|w| (w[0], w[1])).collect();
    for u in 1..=n {
        for v in (u + 1)..=n {
            if rng.gen_bool(p) {
                edges.push((u, v));
            }
        }
    }
    edges.shuffle(&mut rng);
    Graph::from_edges(n as usize, edges)
}

fn bench_hamiltonian_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamiltonian_path");
    for &n in &[8, 12, 16] {
        let g = planted_graph(n, 0.3, 17);
        group.bench_with_input(BenchmarkId::new("planted", n), &g, |b, g| {
            b.iter(|| black_box(g.find_hamiltonian_path()))
        });
    }

    // Star graphs have no path and force the search to exhaust every start.
    for &n in &[6, 8, 10] {
        let g: Graph = Graph::from_edges(n as usize, (1..n).map(|v| (0, v)));
        group.bench_with_input(BenchmarkId::new("star", n), &g, |b, g| {
            b.iter(|| black_box(g.find_hamiltonian_path()))
        });
    }
    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let g = planted_graph(200, 0.02, 23);
    c.bench_function("to_k_spanning_k8", |b| {
        b.iter(|| black_box(g.to_k_spanning(black_box(8)).unwrap()))
    });

    let k8 = g.to_k_spanning(8).unwrap();
    c.bench_function("to_two_spanning_k8", |b| {
        b.iter(|| black_box(k8.to_two_spanning()))
    });
}

criterion_group!(benches, bench_hamiltonian_search, bench_transforms);
criterion_main!(benches);
