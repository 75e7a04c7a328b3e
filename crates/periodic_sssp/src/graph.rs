use crate::error::GraphError;

/// An outgoing edge with one weight per phase of the cycle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edge {
    to: u32,
    weights: Box<[u64]>,
}

impl Edge {
    #[inline]
    pub fn to(&self) -> u32 {
        self.to
    }

    /// Weight charged when this edge is taken at the given phase.
    /// Any phase value is accepted; the cycle length is applied internally.
    #[inline]
    pub fn weight_at(&self, phase: usize) -> u64 {
        self.weights[phase % self.weights.len()]
    }

    #[inline]
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }
}

/// Directed graph whose edge weights cycle with hop count.
///
/// All edges share the graph-wide period: every weight vector has exactly
/// `period` entries, enforced at insertion. The graph is built once and
/// read-only during queries.
#[derive(Clone, Debug)]
pub struct PeriodicGraph {
    period: usize,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl PeriodicGraph {
    pub fn new(vertex_count: usize, period: usize) -> Result<Self, GraphError> {
        if period == 0 {
            return Err(GraphError::InvalidPeriod);
        }
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            period,
            adjacency,
            edge_count: 0,
        })
    }

    pub fn from_edges(
        vertex_count: usize,
        period: usize,
        edges: &[(u32, u32, Vec<u64>)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count, period)?;
        for (from, to, weights) in edges {
            graph.add_edge(*from, *to, weights)?;
        }
        Ok(graph)
    }

    /// Appends an edge carrying a private copy of `weights` to `from`'s
    /// adjacency list. Both endpoints and the weight-vector length are
    /// checked; parallel edges and self-loops are allowed.
    pub fn add_edge(&mut self, from: u32, to: u32, weights: &[u64]) -> Result<(), GraphError> {
        let from_idx = self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weights.len() != self.period {
            return Err(GraphError::PeriodMismatch {
                expected: self.period,
                got: weights.len(),
            });
        }

        let list = &mut self.adjacency[from_idx];
        list.try_reserve(1)?;
        list.push(Edge {
            to,
            weights: weights.into(),
        });
        self.edge_count += 1;
        Ok(())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn period(&self) -> usize {
        self.period
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    #[inline]
    pub fn out_edges(&self, v: usize) -> &[Edge] {
        &self.adjacency[v]
    }

    #[inline]
    pub(crate) fn check_vertex(&self, v: u32) -> Result<usize, GraphError> {
        let idx = v as usize;
        if idx < self.adjacency.len() {
            Ok(idx)
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.adjacency.len(),
            })
        }
    }
}
