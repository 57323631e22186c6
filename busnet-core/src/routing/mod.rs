//! Compilation of the catalogue into a transit graph and itinerary search on it

pub mod dijkstra;
mod graph;
mod itinerary;
mod router;
mod settings;

pub use dijkstra::{GraphPath, shortest_path};
pub use graph::{StopVertexIds, TransitGraph};
pub use itinerary::{BusEdge, RouteEdge, RouteInfo, StopEdge};
pub use router::TransportRouter;
pub use settings::RouterSettings;
