//! Data model of the bus network
//!
//! Contains the catalogue of stops and routes and the run-wide transit model.

pub mod catalogue;
pub mod transit_model;

pub use catalogue::data::TransitCatalogue;
pub use catalogue::types::{PLACEHOLDER_GEOMETRY, Route, RouteStats, Stop, StopPair};
pub use transit_model::TransitModel;
