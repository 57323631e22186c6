use busnet_core::prelude::*;
use log::info;

use crate::{RequestDocument, RequestError};

/// Builds the transit model described by the document.
///
/// Routing settings of the document take precedence over `fallback_settings`.
///
/// # Errors
///
/// Returns an error if the declarations are inconsistent, if no routing
/// settings are available or if the network has no stops.
pub fn create_transit_model(
    document: &RequestDocument,
    fallback_settings: Option<RouterSettings>,
) -> Result<TransitModel, RequestError> {
    let settings = document
        .routing_settings
        .or(fallback_settings)
        .ok_or(RequestError::MissingRoutingSettings)?;

    info!(
        "Loading {} base requests (wait {} min, velocity {} km/h)",
        document.base_requests.len(),
        settings.bus_wait_time,
        settings.bus_velocity
    );
    let catalogue = create_catalogue(&document.base_requests)?;

    Ok(TransitModel::new(catalogue, settings)?)
}
