use busnet_core::{
    Error, TransitCatalogue, TransitModel,
    routing::{RouteEdge, RouteInfo},
};
use log::{debug, error};

use crate::response::{Response, RouteItem};

/// Answers a `Route` request with the fastest itinerary
pub fn find_route(model: &TransitModel, request_id: i64, from: &str, to: &str) -> Response {
    let info = match model.route_info(from, to) {
        Ok(Some(info)) => info,
        Ok(None) => {
            debug!("Request {request_id}: {from:?} and {to:?} are not connected");
            return Response::not_found(request_id);
        }
        Err(Error::StopNotFound(stop)) => {
            debug!("Request {request_id}: unknown stop {stop:?}");
            return Response::not_found(request_id);
        }
        Err(e) => {
            error!("Request {request_id}: route search failed: {e}");
            return Response::not_found(request_id);
        }
    };

    match route_items(model.catalogue(), &info) {
        Ok(items) => Response::Route {
            request_id,
            total_time: info.total_time,
            items,
        },
        Err(e) => {
            error!("Request {request_id}: {e}");
            Response::not_found(request_id)
        }
    }
}

/// Names the stops and routes of the itinerary records
fn route_items(catalogue: &TransitCatalogue, info: &RouteInfo) -> Result<Vec<RouteItem>, Error> {
    info.edges
        .iter()
        .map(|edge| match edge {
            RouteEdge::Wait(wait) => catalogue
                .stop(wait.stop)
                .map(|stop| RouteItem::Wait {
                    stop_name: stop.name.clone(),
                    time: wait.time,
                })
                .ok_or_else(|| {
                    Error::InvalidData(format!("itinerary waits at stop #{}", wait.stop))
                }),
            RouteEdge::Bus(ride) => catalogue
                .route(ride.route)
                .map(|route| RouteItem::Bus {
                    bus: route.name.clone(),
                    span_count: ride.span_count,
                    time: ride.time,
                })
                .ok_or_else(|| {
                    Error::InvalidData(format!("itinerary rides route #{}", ride.route))
                }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use busnet_core::routing::{BusEdge, StopEdge};
    use geo::Point;

    use super::*;

    fn catalogue() -> TransitCatalogue {
        let mut catalogue = TransitCatalogue::new();
        catalogue.add_stop("A", Point::new(0.0, 0.0), [("B", 1000)]);
        catalogue.add_route("R1", &["A", "B"], true).unwrap();
        catalogue
    }

    #[test]
    fn records_are_named() {
        let info = RouteInfo {
            total_time: 7.0,
            edges: vec![
                RouteEdge::Wait(StopEdge { stop: 0, time: 6.0 }),
                RouteEdge::Bus(BusEdge {
                    route: 0,
                    span_count: 1,
                    time: 1.0,
                }),
            ],
        };

        assert_eq!(
            route_items(&catalogue(), &info).unwrap(),
            vec![
                RouteItem::Wait {
                    stop_name: "A".to_string(),
                    time: 6.0
                },
                RouteItem::Bus {
                    bus: "R1".to_string(),
                    span_count: 1,
                    time: 1.0
                },
            ]
        );
    }

    #[test]
    fn unknown_record_ids_are_errors() {
        let catalogue = catalogue();
        let waits_nowhere = RouteInfo {
            total_time: 6.0,
            edges: vec![RouteEdge::Wait(StopEdge { stop: 42, time: 6.0 })],
        };
        let rides_nothing = RouteInfo {
            total_time: 1.0,
            edges: vec![RouteEdge::Bus(BusEdge {
                route: 7,
                span_count: 1,
                time: 1.0,
            })],
        };

        assert!(matches!(
            route_items(&catalogue, &waits_nowhere),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            route_items(&catalogue, &rides_nothing),
            Err(Error::InvalidData(_))
        ));
    }
}
