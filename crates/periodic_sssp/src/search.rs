use crate::INF;
use crate::error::GraphError;
use crate::graph::PeriodicGraph;
use crate::heap::{MinHeap, QueueEntry};

const NO_PREDECESSOR: usize = usize::MAX;

/// A minimum-cost path reaching the target at phase 0.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPath {
    /// Total accumulated weight along `path`.
    pub cost: u64,
    /// Vertex sequence from source to target inclusive. The hop count
    /// (`path.len() - 1`) is always a multiple of the graph period.
    pub path: Vec<u32>,
}

/// Which of the two query outputs the caller wants rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputMode {
    /// Space-separated vertex indices of the path.
    Path,
    /// The minimum total weight as an integer.
    Distance,
}

/// Renders a query result for the external I/O layer to print.
/// An unreachable target renders as `no path found` in either mode.
pub fn render_result(result: Option<&ShortestPath>, mode: OutputMode) -> String {
    match result {
        None => "no path found".to_string(),
        Some(found) => match mode {
            OutputMode::Path => {
                let parts: Vec<String> = found.path.iter().map(|v| v.to_string()).collect();
                parts.join(" ")
            }
            OutputMode::Distance => found.cost.to_string(),
        },
    }
}

/// Phase-aware Dijkstra over the expanded state space `(vertex, phase)`.
///
/// A walk of `s` hops sits at phase `s % period`; taking an edge at that
/// phase charges `edge.weight_at(s % period)` and advances the phase by one.
/// The query asks for the cheapest walk ending at `target` **at phase 0**,
/// so a target reached at a non-zero phase does not terminate the search.
///
/// When several optimal paths have equal cost, which one is returned is
/// arbitrary (heap tie order). `Ok(None)` means the target is unreachable at
/// phase 0, a normal outcome rather than an error.
pub fn shortest_path(
    graph: &PeriodicGraph,
    source: u32,
    target: u32,
) -> Result<Option<ShortestPath>, GraphError> {
    let source_idx = graph.check_vertex(source)?;
    graph.check_vertex(target)?;

    let period = graph.period();
    let states = graph
        .vertex_count()
        .checked_mul(period)
        .ok_or(GraphError::AllocationFailed)?;

    let mut dist = try_filled_vec(states, INF)?;
    let mut pred = try_filled_vec(states, NO_PREDECESSOR)?;
    let mut heap = MinHeap::with_capacity(states)?;

    let start_state = source_idx * period;
    dist[start_state] = 0;
    heap.push(QueueEntry {
        weight: 0,
        vertex: source,
        step: 0,
    })?;

    while let Some(current) = heap.pop() {
        let phase = current.step % period;
        let state = current.vertex as usize * period + phase;
        if current.weight != dist[state] {
            // Superseded by a cheaper label pushed later.
            continue;
        }
        if current.vertex == target && phase == 0 {
            return Ok(Some(ShortestPath {
                cost: current.weight,
                path: reconstruct(&pred, period, state),
            }));
        }

        let next_phase = (phase + 1) % period;
        for edge in graph.out_edges(current.vertex as usize) {
            let next_state = edge.to() as usize * period + next_phase;
            let cand = current.weight.saturating_add(edge.weight_at(phase)).min(INF);
            if cand < dist[next_state] {
                dist[next_state] = cand;
                pred[next_state] = state;
                heap.push(QueueEntry {
                    weight: cand,
                    vertex: edge.to(),
                    step: current.step + 1,
                })?;
            }
        }
    }

    Ok(None)
}

fn reconstruct(pred: &[usize], period: usize, mut state: usize) -> Vec<u32> {
    let mut path = vec![(state / period) as u32];
    while pred[state] != NO_PREDECESSOR {
        state = pred[state];
        path.push((state / period) as u32);
    }
    path.reverse();
    path
}

fn try_filled_vec<T: Copy>(len: usize, value: T) -> Result<Vec<T>, GraphError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, value);
    Ok(v)
}
