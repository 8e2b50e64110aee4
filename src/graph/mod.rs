pub mod edge;
pub mod generators;
pub mod loader;
pub mod position;
pub mod preprocess;
pub mod road_graph;
pub mod traits;
pub mod vertex;

pub use edge::Edge;
pub use loader::{EdgeRecord, GraphRecords, VertexRecord};
pub use position::Position;
pub use preprocess::PreprocessReport;
pub use road_graph::RoadGraph;
pub use traits::Network;
pub use vertex::Vertex;
