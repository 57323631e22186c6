//! Shape of the response array written at the end of a run

use serde::Serialize;

pub const NOT_FOUND: &str = "not found";
pub const NOT_SUPPORTED: &str = "not supported";

/// Answer to a single stat request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItem>,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

impl Response {
    pub fn not_found(request_id: i64) -> Self {
        Response::Error {
            request_id,
            error_message: NOT_FOUND.to_string(),
        }
    }

    pub fn not_supported(request_id: i64) -> Self {
        Response::Error {
            request_id,
            error_message: NOT_SUPPORTED.to_string(),
        }
    }
}

/// Leg of an itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}
