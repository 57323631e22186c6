//! Shape of the request document read at the start of a run

use busnet_core::{loading::BaseRequest, routing::RouterSettings};
use serde::Deserialize;

/// Whole input of a run
#[derive(Debug, Clone, Deserialize)]
pub struct RequestDocument {
    /// Stop and route declarations
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    pub routing_settings: Option<RouterSettings>,
    /// Map drawing parameters, accepted for compatibility and not used
    #[serde(default)]
    pub render_settings: Option<serde_json::Value>,
    /// Queries to answer, in output order
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Entry of the `stat_requests` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Statistics of a route
    Bus { id: i64, name: String },
    /// Routes serving a stop
    Stop { id: i64, name: String },
    /// Fastest itinerary between two stops
    Route { id: i64, from: String, to: String },
    /// Rendered map of the network
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}
