use log::{debug, error};

use super::dijkstra::{GraphPath, shortest_path};
use super::graph::TransitGraph;
use super::itinerary::{RouteEdge, RouteInfo};
use super::settings::RouterSettings;
use crate::{Error, StopId, TransitCatalogue};

/// Itinerary resolver over a compiled transit graph
#[derive(Debug, Clone)]
pub struct TransportRouter {
    settings: RouterSettings,
    graph: TransitGraph,
}

impl TransportRouter {
    /// Compiles the transit graph of the catalogue
    ///
    /// # Errors
    ///
    /// Propagates [`TransitGraph::compile`] errors
    pub fn new(catalogue: &TransitCatalogue, settings: RouterSettings) -> Result<Self, Error> {
        let graph = TransitGraph::compile(catalogue, &settings)?;
        Ok(Self { settings, graph })
    }

    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Fastest itinerary between two named stops.
    ///
    /// `Ok(None)` means the stops are not connected.
    ///
    /// # Errors
    ///
    /// `Error::StopNotFound` if either name is unknown to the catalogue
    pub fn route_info(
        &self,
        catalogue: &TransitCatalogue,
        from: &str,
        to: &str,
    ) -> Result<Option<RouteInfo>, Error> {
        let from_id = catalogue
            .stop_id(from)
            .ok_or_else(|| Error::StopNotFound(from.to_string()))?;
        let to_id = catalogue
            .stop_id(to)
            .ok_or_else(|| Error::StopNotFound(to.to_string()))?;
        self.route_info_between(from_id, to_id)
    }

    /// Fastest itinerary between two stops, starting and ending at rest
    ///
    /// # Errors
    ///
    /// `Error::StopNotFound` if a stop was added after the graph was compiled
    pub fn route_info_between(&self, from: StopId, to: StopId) -> Result<Option<RouteInfo>, Error> {
        let start = self
            .graph
            .stop_vertices(from)
            .ok_or_else(|| Error::StopNotFound(format!("#{from}")))?
            .bus_wait_start;
        let end = self
            .graph
            .stop_vertices(to)
            .ok_or_else(|| Error::StopNotFound(format!("#{to}")))?
            .bus_wait_start;

        let Some(path) = shortest_path(self.graph.graph(), start, end) else {
            debug!("No path between stops #{from} and #{to}");
            return Ok(None);
        };

        Ok(Some(RouteInfo {
            total_time: path.weight,
            edges: self.edge_records(&path)?,
        }))
    }

    /// Records of the path edges, in travel order
    fn edge_records(&self, path: &GraphPath) -> Result<Vec<RouteEdge>, Error> {
        path.edges
            .iter()
            .map(|&edge| {
                self.graph.edge(edge).copied().ok_or_else(|| {
                    error!("Path edge #{} has no record in the transit graph", edge.index());
                    Error::InvalidData(format!("path edge #{} has no record", edge.index()))
                })
            })
            .collect()
    }
}
