mod state;
mod traced_dijkstra;

pub use traced_dijkstra::{GraphPath, shortest_path};
