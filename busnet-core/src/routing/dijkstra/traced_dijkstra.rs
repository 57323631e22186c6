use std::collections::BinaryHeap;

use hashbrown::HashMap;
use log::error;
use petgraph::{
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use super::state::State;
use crate::Minutes;

/// Minimal path between two vertices
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath {
    /// Sum of the edge weights
    pub weight: Minutes,
    /// Traversed edges from start to target
    pub edges: Vec<EdgeIndex>,
}

/// Dijkstra's algorithm for a single pair of vertices.
///
/// Edge weights must be non-negative. Returns `None` when `target` is
/// unreachable; a path from a vertex to itself is empty and weighs nothing.
pub fn shortest_path<N>(
    graph: &DiGraph<N, Minutes>,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<GraphPath> {
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, Minutes> = HashMap::with_capacity(estimated_nodes);
    // Edge through which each reached vertex was entered last
    let mut predecessors: HashMap<NodeIndex, EdgeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            let Some(edges) = unwind_path(graph, &predecessors, start, target) else {
                error!(
                    "Broken predecessor chain from vertex #{} to #{}",
                    start.index(),
                    target.index()
                );
                return None;
            };
            return Some(GraphPath {
                weight: cost,
                edges,
            });
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + *edge.weight();

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, edge.id());
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, edge.id());
                    }
                }
            }
        }
    }

    None
}

/// Follows predecessor edges backward from target to start
fn unwind_path<N>(
    graph: &DiGraph<N, Minutes>,
    predecessors: &HashMap<NodeIndex, EdgeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<EdgeIndex>> {
    let mut edges = Vec::new();
    let mut current = target;
    while current != start {
        let edge = *predecessors.get(&current)?;
        edges.push(edge);
        current = graph.edge_endpoints(edge)?.0;
    }
    edges.reverse(); // Now path is from start to target
    Some(edges)
}
