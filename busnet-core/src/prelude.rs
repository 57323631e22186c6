// Re-export key components
pub use crate::algo::compute_distance;
pub use crate::loading::{BaseRequest, RouteDeclaration, StopDeclaration, create_catalogue};
pub use crate::model::{Route, RouteStats, Stop, TransitCatalogue, TransitModel};
pub use crate::routing::{
    BusEdge, RouteEdge, RouteInfo, RouterSettings, StopEdge, StopVertexIds, TransitGraph,
    TransportRouter,
};

// Identities and units
pub use crate::Meters;
pub use crate::Minutes;
pub use crate::RouteId;
pub use crate::StopId;
