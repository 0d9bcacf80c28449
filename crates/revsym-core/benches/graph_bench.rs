//! # Graph Benchmarks
//!
//! Performance benchmarks for revsym-core store operations.
//!
//! Run with: `cargo bench -p revsym-core`

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use revsym_core::{OrientedVertex, RevSymGraph, VertexIndex, connected_components};
use std::hint::black_box;

/// A chain of forward edges: `0 -> 1 -> .. -> size-1`.
fn create_linear_graph(size: usize) -> RevSymGraph {
    let mut graph = RevSymGraph::new();
    graph.add_vertices(size).expect("non-zero size");
    for raw in 1..size {
        graph
            .add_edge(
                OrientedVertex::forward(VertexIndex(raw - 1)),
                OrientedVertex::forward(VertexIndex(raw)),
            )
            .expect("edge");
    }
    graph
}

/// A chain whose last edge crosses strands, confusing the component.
fn create_confused_graph(size: usize) -> RevSymGraph {
    let mut graph = create_linear_graph(size);
    graph
        .add_edge(
            OrientedVertex::forward(VertexIndex(size - 1)),
            OrientedVertex::reverse(VertexIndex(0)),
        )
        .expect("edge");
    graph
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_vertex_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_insertion");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = RevSymGraph::new();
                graph.add_vertices(size).expect("non-zero size");
                black_box(graph)
            });
        });
    }

    group.finish();
}

fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(create_linear_graph(size)));
        });
    }

    group.finish();
}

fn bench_connected_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("connected_components");

    for size in [100, 1000, 10000].iter() {
        let linear = create_linear_graph(*size);
        group.bench_with_input(BenchmarkId::new("linear", size), &linear, |b, graph| {
            b.iter(|| black_box(connected_components(graph).expect("components")));
        });

        let confused = create_confused_graph(*size);
        group.bench_with_input(BenchmarkId::new("confused", size), &confused, |b, graph| {
            b.iter(|| black_box(connected_components(graph).expect("components")));
        });
    }

    group.finish();
}

fn bench_vertex_deletion(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_deletion");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || create_linear_graph(size),
                |mut graph| {
                    graph.delete(VertexIndex(size / 2)).expect("delete");
                    black_box(graph)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_vertex_insertion,
    bench_edge_insertion,
    bench_connected_components,
    bench_vertex_deletion
);
criterion_main!(benches);
