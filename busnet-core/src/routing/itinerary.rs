use crate::{Minutes, RouteId, StopId};

/// Waiting at a stop before boarding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopEdge {
    pub stop: StopId,
    pub time: Minutes,
}

/// Riding a route for `span_count` consecutive hops
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusEdge {
    pub route: RouteId,
    pub span_count: usize,
    pub time: Minutes,
}

/// Domain meaning of a transit graph edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteEdge {
    Wait(StopEdge),
    Bus(BusEdge),
}

impl RouteEdge {
    pub fn time(&self) -> Minutes {
        match self {
            RouteEdge::Wait(edge) => edge.time,
            RouteEdge::Bus(edge) => edge.time,
        }
    }
}

/// Fastest itinerary between two stops.
///
/// `edges` holds one record per traversed graph edge, in travel order.
/// Consecutive rides on the same route are not merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteInfo {
    pub total_time: Minutes,
    pub edges: Vec<RouteEdge>,
}

impl RouteInfo {
    /// Number of buses boarded along the itinerary
    pub fn rides(&self) -> usize {
        self.edges
            .iter()
            .filter(|edge| matches!(edge, RouteEdge::Bus(_)))
            .count()
    }
}
