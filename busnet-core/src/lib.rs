//! Core of the bus network model.
//!
//! The crate holds the transit catalogue (stops, routes and road distances),
//! compiles it into a directed weighted graph and resolves shortest paths on
//! that graph back into itineraries made of waiting and riding legs.

pub mod algo;
mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::create_catalogue;
pub use model::{TransitCatalogue, TransitModel};

/// Index of a stop in the catalogue arena
pub type StopId = usize;
/// Index of a route in the catalogue arena
pub type RouteId = usize;
/// Road distance in meters
pub type Meters = u64;
/// Travel time in minutes
pub type Minutes = f64;
