use geo::Point;
use log::{info, warn};

use super::raw_types::{BaseRequest, RouteDeclaration, StopDeclaration};
use crate::{Error, TransitCatalogue};

/// Creates a catalogue from stop and route declarations.
///
/// All stops are registered before any route, so a route may mention a stop
/// declared further down the list.
///
/// # Errors
///
/// Returns an error on invalid coordinates, on a route referencing a stop
/// that was never mentioned, or on a repeated route name. A partially built
/// catalogue is never returned.
pub fn create_catalogue(requests: &[BaseRequest]) -> Result<TransitCatalogue, Error> {
    let mut catalogue = TransitCatalogue::new();

    for stop in requests.iter().filter_map(|request| match request {
        BaseRequest::Stop(stop) => Some(stop),
        BaseRequest::Bus(_) => None,
    }) {
        add_stop(&mut catalogue, stop)?;
    }

    for route in requests.iter().filter_map(|request| match request {
        BaseRequest::Bus(route) => Some(route),
        BaseRequest::Stop(_) => None,
    }) {
        add_route(&mut catalogue, route)?;
    }

    for stop in catalogue.latent_stops() {
        warn!(
            "Stop {:?} appears only as a road distance target and has no coordinates",
            stop.name
        );
    }

    info!(
        "Catalogue created: {} stops, {} routes",
        catalogue.stop_count(),
        catalogue.route_count()
    );
    Ok(catalogue)
}

fn add_stop(catalogue: &mut TransitCatalogue, stop: &StopDeclaration) -> Result<(), Error> {
    validate_coordinates(stop)?;
    catalogue.add_stop(
        &stop.name,
        Point::new(stop.longitude, stop.latitude),
        stop.road_distances
            .iter()
            .map(|(to, &length)| (to.as_str(), length)),
    );
    Ok(())
}

fn add_route(catalogue: &mut TransitCatalogue, route: &RouteDeclaration) -> Result<(), Error> {
    catalogue.add_route(&route.name, &route.stops, route.is_roundtrip)?;
    Ok(())
}

fn validate_coordinates(stop: &StopDeclaration) -> Result<(), Error> {
    if !(-90.0..=90.0).contains(&stop.latitude) || !(-180.0..=180.0).contains(&stop.longitude) {
        return Err(Error::InvalidData(format!(
            "Stop {:?} has coordinates out of range: ({}, {})",
            stop.name, stop.latitude, stop.longitude
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::TransitModel;
    use crate::routing::RouterSettings;

    fn stop(name: &str, latitude: f64, longitude: f64, distances: &[(&str, u64)]) -> BaseRequest {
        BaseRequest::Stop(StopDeclaration {
            name: name.to_string(),
            latitude,
            longitude,
            road_distances: distances
                .iter()
                .map(|&(to, length)| (to.to_string(), length))
                .collect::<BTreeMap<_, _>>(),
        })
    }

    fn bus(name: &str, stops: &[&str], is_roundtrip: bool) -> BaseRequest {
        BaseRequest::Bus(RouteDeclaration {
            name: name.to_string(),
            stops: stops.iter().map(|s| (*s).to_string()).collect(),
            is_roundtrip,
        })
    }

    #[test]
    fn routes_may_precede_their_stops() {
        let requests = vec![
            bus("256", &["A", "B"], false),
            stop("A", 55.6, 37.2, &[("B", 3900)]),
            stop("B", 55.59, 37.21, &[]),
        ];

        let catalogue = create_catalogue(&requests).unwrap();

        assert_eq!(catalogue.route_count(), 1);
        assert_eq!(catalogue.find_route("256").unwrap().stops, vec![0, 1, 0]);
        assert_eq!(catalogue.route_stats("256").unwrap().route_length, 7800);
    }

    #[test]
    fn undeclared_stop_aborts_loading() {
        let requests = vec![stop("A", 0.0, 0.0, &[]), bus("1", &["A", "Z"], true)];
        assert!(matches!(
            create_catalogue(&requests),
            Err(Error::UnknownStop { .. })
        ));
    }

    #[test]
    fn route_may_use_stop_known_only_from_distances() {
        let requests = vec![
            stop("A", 0.0, 0.0, &[("Ghost", 1000)]),
            bus("1", &["A", "Ghost"], false),
        ];

        let catalogue = create_catalogue(&requests).unwrap();

        let latent: Vec<_> = catalogue.latent_stops().map(|s| s.name.as_str()).collect();
        assert_eq!(latent, vec!["Ghost"]);
        assert_eq!(
            catalogue.find_buses_on_stop("Ghost").into_iter().collect::<Vec<_>>(),
            vec!["1"]
        );

        let stats = catalogue.route_stats("1").unwrap();
        assert_eq!(stats.stops_count, 3);
        assert_eq!(stats.unique_stops_count, 2);
        assert_eq!(stats.route_length, 2000);

        let model = TransitModel::new(catalogue, RouterSettings::new(2.0, 60.0)).unwrap();
        let info = model.route_info("A", "Ghost").unwrap().unwrap();
        assert!((info.total_time - 3.0).abs() < 1e-9);
        assert_eq!(info.rides(), 1);
        assert!(model.route_info("Ghost", "A").unwrap().is_some());
    }

    #[test]
    fn duplicate_route_aborts_loading() {
        let requests = vec![
            stop("A", 0.0, 0.0, &[]),
            bus("1", &["A"], true),
            bus("1", &["A"], false),
        ];
        assert!(matches!(
            create_catalogue(&requests),
            Err(Error::DuplicateRoute(_))
        ));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let requests = vec![stop("A", 95.0, 0.0, &[])];
        assert!(matches!(
            create_catalogue(&requests),
            Err(Error::InvalidData(_))
        ));
    }
}
