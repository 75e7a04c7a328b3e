use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::graph::PeriodicGraph;

const C_MAX: u64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    AlmostLine,
    SinglePhase,
    PhaseSkewed,
}

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::AlmostLine => "almost_line",
            Self::SinglePhase => "single_phase",
            Self::PhaseSkewed => "phase_skewed",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: PeriodicGraph,
    pub source: u32,
    pub target: u32,
}

pub fn generate_case(case: GraphCase, size: usize, period: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(16), period, seed, 4),
        GraphCase::DenseRandom => dense_random_case(size.max(64), period, seed),
        GraphCase::AlmostLine => almost_line_case(size.max(16), period, seed),
        GraphCase::SinglePhase => sparse_random_case(size.max(16), 1, seed ^ 0x0F0F, 6),
        GraphCase::PhaseSkewed => phase_skewed_case(size.max(16), period.max(2), seed),
    }
}

fn sparse_random_case(n: usize, period: usize, seed: u64, edge_factor: usize) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = n.max(2);
    let m_target = (n.saturating_mul(edge_factor)).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v {
            continue;
        }
        let weights = random_weights(&mut rng, period);
        push_unique_edge(&mut edges, &mut used, u, v, weights);
    }

    let (source, target) = random_endpoints(&mut rng, n);
    build(n, period, edges, source, target)
}

fn dense_random_case(size: usize, period: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(4);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in 0..n {
            if u == v {
                continue;
            }
            edges.push((u as u32, v as u32, random_weights(&mut rng, period)));
        }
    }

    let (source, target) = random_endpoints(&mut rng, n);
    build(n, period, edges, source, target)
}

fn almost_line_case(n: usize, period: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = n.max(4);
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        let weights = random_weights(&mut rng, period);
        push_unique_edge(&mut edges, &mut used, i, i + 1, weights);
    }

    let m_target = (n.saturating_mul(2)).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let mut b = a + rng.random_range(2..=3);
        if b >= n {
            b = n - 1;
        }
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        let weights = random_weights(&mut rng, period);
        push_unique_edge(&mut edges, &mut used, u, v, weights);
    }

    build(n, period, edges, 0, (n - 1) as u32)
}

/// Every edge is cheap in exactly one phase and expensive in the rest, so
/// optimal routes depend on arriving at an edge in the right phase. Punishes
/// any search that collapses phases.
fn phase_skewed_case(n: usize, period: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = n.max(2);
    let m_target = (n.saturating_mul(6)).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v {
            continue;
        }
        let cheap = rng.random_range(0..period);
        let mut weights = Vec::with_capacity(period);
        for phase in 0..period {
            if phase == cheap {
                weights.push(rng.random_range(0..=10));
            } else {
                weights.push(rng.random_range((C_MAX / 2)..=C_MAX));
            }
        }
        push_unique_edge(&mut edges, &mut used, u, v, weights);
    }

    let (source, target) = random_endpoints(&mut rng, n);
    build(n, period, edges, source, target)
}

fn build(
    n: usize,
    period: usize,
    edges: Vec<(u32, u32, Vec<u64>)>,
    source: u32,
    target: u32,
) -> GeneratedGraph {
    let graph = PeriodicGraph::from_edges(n, period, &edges)
        .expect("generated edges are in range with matching period");
    GeneratedGraph {
        graph,
        source,
        target,
    }
}

fn random_weights(rng: &mut StdRng, period: usize) -> Vec<u64> {
    (0..period).map(|_| rng.random_range(0..=C_MAX)).collect()
}

fn random_endpoints(rng: &mut StdRng, n: usize) -> (u32, u32) {
    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }
    (source as u32, target as u32)
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut Vec<(u32, u32, Vec<u64>)>,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
    weights: Vec<u64>,
) -> bool {
    if u == v {
        return false;
    }
    let key = ((u as u64) << 32) | v as u64;
    if used.insert(key) {
        edges.push((u as u32, v as u32, weights));
        true
    } else {
        false
    }
}
