mod error;
mod graph;
mod heap;
mod search;

pub mod generator;

pub use error::GraphError;
pub use graph::Edge;
pub use graph::PeriodicGraph;
pub use search::OutputMode;
pub use search::ShortestPath;
pub use search::render_result;
pub use search::shortest_path;

pub const INF: u64 = u64::MAX / 4;
