//! Graph generators for stepper property tests.
//!
//! Graphs stay small because the stepper targets illustrative walkthroughs.
//! Every generator is driven by a seeded [`SmallRng`] so rstest cases can pin
//! specific inputs.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{GraphFixture, GraphShape};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 16;

/// Signed zeros plus neighbours that collapse together in single precision.
const FINE_TIE_WEIGHTS: [f64; 6] = [
    0.0,
    -0.0,
    0.3,
    0.300_000_000_000_000_04,
    16_777_216.0,
    16_777_217.0,
];

/// Generates fixtures across every [`GraphShape`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let (node_count, edges) = match shape {
        GraphShape::Unique => random_graph(rng, |r| r.gen_range(0.0..100.0)),
        GraphShape::ManyIdentical => {
            let distinct = rng.gen_range(1_u8..=3);
            random_graph(rng, move |r| f64::from(r.gen_range(0..distinct)))
        }
        GraphShape::Sparse => sparse_graph(rng),
        GraphShape::Disconnected => disconnected_graph(rng),
        GraphShape::Degenerate => degenerate_graph(rng),
        GraphShape::FineTies => random_graph(rng, |r| {
            FINE_TIE_WEIGHTS[r.gen_range(0..FINE_TIE_WEIGHTS.len())]
        }),
    };
    GraphFixture {
        node_count,
        edges,
        shape,
    }
}

fn random_graph(
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> (usize, Vec<Edge>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let probability: f64 = rng.gen_range(0.2..=0.7);
    let mut edges = Vec::new();
    for from in 0..node_count {
        for to in (from + 1)..node_count {
            if rng.gen_bool(probability) {
                let weight = weight(rng);
                edges.push(oriented(rng, from, to, weight));
            }
        }
    }
    (node_count, edges)
}

fn sparse_graph(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(0.0..50.0)))
        .collect();
    for _ in 0..rng.gen_range(0..=node_count) {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        if from != to {
            edges.push(Edge::new(from, to, rng.gen_range(0.0..50.0)));
        }
    }
    (node_count, edges)
}

fn disconnected_graph(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=4))
        .map(|_| rng.gen_range(1..=5))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        for from in offset..offset + size {
            for to in (from + 1)..offset + size {
                if rng.gen_bool(0.6) {
                    edges.push(Edge::new(from, to, f64::from(rng.gen_range(0_u8..10))));
                }
            }
        }
        offset += size;
    }
    (offset, edges)
}

fn degenerate_graph(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let node_count = rng.gen_range(1..=8);
    let edges = (0..rng.gen_range(0..=12))
        .map(|_| {
            let from = rng.gen_range(0..node_count);
            let to = if rng.gen_bool(0.3) {
                from
            } else {
                rng.gen_range(0..node_count)
            };
            Edge::new(from, to, f64::from(rng.gen_range(0_u8..4)))
        })
        .collect();
    (node_count, edges)
}

fn oriented(rng: &mut SmallRng, a: usize, b: usize, weight: f64) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}
