use busnet_core::TransitModel;

use crate::response::Response;

/// Answers a `Bus` request with the route statistics
pub fn bus_stats(model: &TransitModel, request_id: i64, name: &str) -> Response {
    match model.route_stats(name) {
        Some(stats) => Response::Bus {
            request_id,
            curvature: stats.curvature(),
            route_length: stats.route_length,
            stop_count: stats.stops_count,
            unique_stop_count: stats.unique_stops_count,
        },
        None => Response::not_found(request_id),
    }
}

/// Answers a `Stop` request with the sorted routes serving the stop
pub fn stop_buses(model: &TransitModel, request_id: i64, name: &str) -> Response {
    match model.buses_on_stop(name) {
        Some(buses) => Response::Stop {
            request_id,
            buses: buses.into_iter().map(str::to_string).collect(),
        },
        None => Response::not_found(request_id),
    }
}
