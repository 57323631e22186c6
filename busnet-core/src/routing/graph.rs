use itertools::Itertools;
use log::info;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use super::itinerary::{BusEdge, RouteEdge, StopEdge};
use super::settings::RouterSettings;
use crate::{Error, Meters, Minutes, StopId, TransitCatalogue};

/// Pair of graph vertices standing for one stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertexIds {
    /// Rider stands at the stop
    pub bus_wait_start: NodeIndex,
    /// Rider has boarded, or rides through the stop
    pub bus_wait_end: NodeIndex,
}

/// Directed weighted graph of the whole network.
///
/// Every stop is split into a wait vertex and a board vertex joined by an
/// edge weighing the wait time. Every route contributes one edge per
/// contiguous span of its stop sequence, from the board vertex of the first
/// stop of the span to the wait vertex of the last one, so that a rider can
/// stay on the bus past intermediate stops.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    /// Node weight is the stop the vertex belongs to, edge weight is minutes
    graph: DiGraph<StopId, Minutes>,
    /// Indexed by `StopId`
    stop_vertices: Vec<StopVertexIds>,
    /// Indexed by `EdgeIndex`
    edges: Vec<RouteEdge>,
}

impl TransitGraph {
    /// Builds the graph for the catalogue as it is now.
    ///
    /// # Errors
    ///
    /// `Error::InvalidSettings` for settings yielding negative or non-finite
    /// weights, `Error::EmptyNetwork` for a catalogue without stops.
    pub fn compile(catalogue: &TransitCatalogue, settings: &RouterSettings) -> Result<Self, Error> {
        settings.validate()?;
        if catalogue.stop_count() == 0 {
            return Err(Error::EmptyNetwork);
        }

        let span_edges: usize = catalogue
            .routes()
            .iter()
            .map(|route| route.stops.len() * route.stops.len().saturating_sub(1) / 2)
            .sum();
        let edge_capacity = catalogue.stop_count() + span_edges;

        let mut compiled = Self {
            graph: DiGraph::with_capacity(2 * catalogue.stop_count(), edge_capacity),
            stop_vertices: Vec::with_capacity(catalogue.stop_count()),
            edges: Vec::with_capacity(edge_capacity),
        };

        compiled.add_stop_edges(catalogue, settings);
        compiled.add_bus_edges(catalogue, settings);

        info!(
            "Compiled transit graph: {} vertices, {} edges ({} route spans)",
            compiled.graph.node_count(),
            compiled.graph.edge_count(),
            span_edges
        );
        Ok(compiled)
    }

    fn add_stop_edges(&mut self, catalogue: &TransitCatalogue, settings: &RouterSettings) {
        for stop in 0..catalogue.stop_count() {
            let vertices = StopVertexIds {
                bus_wait_start: self.graph.add_node(stop),
                bus_wait_end: self.graph.add_node(stop),
            };
            self.stop_vertices.push(vertices);
            self.add_edge(
                vertices.bus_wait_start,
                vertices.bus_wait_end,
                RouteEdge::Wait(StopEdge {
                    stop,
                    time: settings.bus_wait_time,
                }),
            );
        }
    }

    fn add_bus_edges(&mut self, catalogue: &TransitCatalogue, settings: &RouterSettings) {
        for (route_id, route) in catalogue.routes().iter().enumerate() {
            for (first, &board_stop) in route.stops.iter().enumerate() {
                let board = self.stop_vertices[board_stop].bus_wait_end;
                let mut distance: Meters = 0;

                let spans = route.stops[first..].iter().tuple_windows();
                for (hop, (&prev, &next)) in spans.enumerate() {
                    distance += catalogue.length_from_to(prev, next);
                    let alight = self.stop_vertices[next].bus_wait_start;
                    self.add_edge(
                        board,
                        alight,
                        RouteEdge::Bus(BusEdge {
                            route: route_id,
                            span_count: hop + 1,
                            time: settings.travel_time(distance),
                        }),
                    );
                }
            }
        }
    }

    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, record: RouteEdge) {
        let id = self.graph.add_edge(from, to, record.time());
        debug_assert_eq!(id.index(), self.edges.len());
        self.edges.push(record);
    }

    /// Underlying petgraph graph
    pub fn graph(&self) -> &DiGraph<StopId, Minutes> {
        &self.graph
    }

    pub fn stop_vertices(&self, stop: StopId) -> Option<StopVertexIds> {
        self.stop_vertices.get(stop).copied()
    }

    /// Domain record of a graph edge
    pub fn edge(&self, id: EdgeIndex) -> Option<&RouteEdge> {
        self.edges.get(id.index())
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
