//! JSON request handling for the bus network model.
//!
//! A run reads one request document, builds the transit model from its
//! `base_requests` and answers every entry of `stat_requests`, keeping the
//! request order in the response array.

use std::io::Read;

use busnet_core::{TransitModel, routing::RouterSettings};
use log::{info, warn};
use rayon::prelude::*;

mod document;
mod error;
pub mod model;
mod response;
pub mod routing;
pub mod stats;

pub use document::{RequestDocument, StatRequest};
pub use error::RequestError;
pub use model::create_transit_model;
pub use response::{NOT_FOUND, NOT_SUPPORTED, Response, RouteItem};

/// Answers a single stat request
pub fn answer_request(model: &TransitModel, request: &StatRequest) -> Response {
    match request {
        StatRequest::Bus { id, name } => stats::bus_stats(model, *id, name),
        StatRequest::Stop { id, name } => stats::stop_buses(model, *id, name),
        StatRequest::Route { id, from, to } => routing::find_route(model, *id, from, to),
        StatRequest::Map { id } => {
            warn!("Request {id}: map rendering is not supported");
            Response::not_supported(*id)
        }
    }
}

/// Answers all requests in parallel, responses keep the request order
pub fn answer_requests(model: &TransitModel, requests: &[StatRequest]) -> Vec<Response> {
    requests
        .par_iter()
        .map(|request| answer_request(model, request))
        .collect()
}

/// Builds the model and answers every stat request of the document
///
/// # Errors
///
/// Returns an error if the transit model cannot be built
pub fn process_document(
    document: &RequestDocument,
    fallback_settings: Option<RouterSettings>,
) -> Result<Vec<Response>, RequestError> {
    let model = create_transit_model(document, fallback_settings)?;
    info!("Answering {} stat requests", document.stat_requests.len());
    Ok(answer_requests(&model, &document.stat_requests))
}

/// Reads a JSON request document and returns the JSON response array
///
/// # Errors
///
/// Returns an error on unreadable input, malformed JSON or an inconsistent
/// network description
pub fn process_json<R: Read>(
    reader: R,
    fallback_settings: Option<RouterSettings>,
) -> Result<serde_json::Value, RequestError> {
    let document: RequestDocument = serde_json::from_reader(reader)?;
    let responses = process_document(&document, fallback_settings)?;
    Ok(serde_json::to_value(responses)?)
}
