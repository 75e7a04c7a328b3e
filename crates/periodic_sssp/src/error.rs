use std::collections::TryReserveError;

/// Errors surfaced by graph construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex index is outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: u32, vertex_count: usize },

    /// The period must be at least 1.
    #[error("period must be at least 1")]
    InvalidPeriod,

    /// An edge's weight vector does not match the graph period.
    #[error("edge carries {got} weights but the graph period is {expected}")]
    PeriodMismatch { expected: usize, got: usize },

    /// An internal allocation failed; the query can be retried or dropped.
    #[error("allocation failed")]
    AllocationFailed,
}

impl From<TryReserveError> for GraphError {
    fn from(_: TryReserveError) -> Self {
        Self::AllocationFailed
    }
}
