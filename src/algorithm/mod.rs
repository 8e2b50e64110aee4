pub mod astar;
pub mod bidirectional;
pub mod central;
pub mod dijkstra;
pub mod floyd_warshall;
pub(crate) mod frontier;
pub mod options;
pub mod state;
pub mod traits;

pub use options::{CancelToken, MeetingCriterion, SearchOptions};
pub use traits::{InspectedEdges, PointToPointSearch, Route, SearchMode};
