use std::collections::BTreeMap;

use serde::Deserialize;

use crate::Meters;

/// Entry of the `base_requests` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopDeclaration),
    Bus(RouteDeclaration),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopDeclaration {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Road distances from this stop, keyed by destination stop name
    #[serde(default)]
    pub road_distances: BTreeMap<String, Meters>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteDeclaration {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}
