use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphkit::{AdjacencyList, AdjacencyMatrix, Graph, Traversal, Vertex};

const SIZES: [usize; 3] = [64, 256, 1024];

/// Each vertex links to its next four neighbours modulo `n`.
fn ring_edges(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |u| (1..=4).map(move |k| (u, (u + k) % n)))
}

fn populate<G: Graph<Data = usize>>(mut graph: G, n: usize) -> (G, Vec<Vertex<usize>>) {
    let vertices: Vec<_> = (0..n).map(|i| graph.create_vertex(i)).collect();
    for (u, v) in ring_edges(n) {
        graph.add_directed_edge(&vertices[u], &vertices[v], Some(1.0));
    }
    (graph, vertices)
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("adjacency_list", n), &n, |b, &n| {
            b.iter(|| black_box(populate(AdjacencyList::with_capacity(n), n)));
        });
        group.bench_with_input(BenchmarkId::new("adjacency_matrix", n), &n, |b, &n| {
            b.iter(|| black_box(populate(AdjacencyMatrix::with_capacity(n), n)));
        });
    }
    group.finish();
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for n in SIZES {
        let (list, lv) = populate(AdjacencyList::new(), n);
        let (matrix, mv) = populate(AdjacencyMatrix::new(), n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("bfs_list", n), &n, |b, _| {
            b.iter(|| black_box(list.breadth_first_search(&lv[0])));
        });
        group.bench_with_input(BenchmarkId::new("bfs_matrix", n), &n, |b, _| {
            b.iter(|| black_box(matrix.breadth_first_search(&mv[0])));
        });
        group.bench_with_input(BenchmarkId::new("dfs_list", n), &n, |b, _| {
            b.iter(|| black_box(list.depth_first_search(&lv[0])));
        });
        group.bench_with_input(BenchmarkId::new("dfs_matrix", n), &n, |b, _| {
            b.iter(|| black_box(matrix.depth_first_search(&mv[0])));
        });
        group.bench_with_input(BenchmarkId::new("has_cycle_list", n), &n, |b, _| {
            b.iter(|| black_box(list.has_cycle(&lv[0])));
        });
        group.bench_with_input(BenchmarkId::new("has_cycle_matrix", n), &n, |b, _| {
            b.iter(|| black_box(matrix.has_cycle(&mv[0])));
        });
    }
    group.finish();
}

fn bench_weight_lookup(c: &mut Criterion) {
    let n = 1024;
    let (list, lv) = populate(AdjacencyList::new(), n);
    let (matrix, mv) = populate(AdjacencyMatrix::new(), n);

    c.bench_function("weight_list", |b| {
        b.iter(|| {
            for u in 0..n {
                black_box(list.weight(&lv[u], &lv[(u + 4) % n]));
            }
        });
    });
    c.bench_function("weight_matrix", |b| {
        b.iter(|| {
            for u in 0..n {
                black_box(matrix.weight(&mv[u], &mv[(u + 4) % n]));
            }
        });
    });
}

criterion_group!(benches, bench_construction, bench_traversals, bench_weight_lookup);
criterion_main!(benches);
