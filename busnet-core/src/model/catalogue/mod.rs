//! Stops, routes and the directed road distance table

pub mod data;
pub mod types;

pub use data::TransitCatalogue;
pub use types::{Route, RouteStats, Stop, StopPair};
