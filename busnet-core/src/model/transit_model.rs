use std::collections::BTreeSet;

use log::info;

use super::catalogue::{RouteStats, TransitCatalogue};
use crate::{
    Error,
    routing::{RouteInfo, RouterSettings, TransportRouter},
};

/// Catalogue together with the router compiled from it.
///
/// Immutable once built, so it can be shared between query threads.
#[derive(Debug, Clone)]
pub struct TransitModel {
    catalogue: TransitCatalogue,
    router: TransportRouter,
}

impl TransitModel {
    /// Compiles the transit graph and takes ownership of the catalogue
    ///
    /// # Errors
    ///
    /// Returns an error if the graph cannot be compiled
    pub fn new(catalogue: TransitCatalogue, settings: RouterSettings) -> Result<Self, Error> {
        let router = TransportRouter::new(&catalogue, settings)?;
        info!(
            "Transit model created: {} stops, {} routes",
            catalogue.stop_count(),
            catalogue.route_count()
        );
        Ok(Self { catalogue, router })
    }

    pub fn catalogue(&self) -> &TransitCatalogue {
        &self.catalogue
    }

    pub fn router(&self) -> &TransportRouter {
        &self.router
    }

    pub fn stop_count(&self) -> usize {
        self.catalogue.stop_count()
    }

    pub fn route_count(&self) -> usize {
        self.catalogue.route_count()
    }

    pub fn route_stats(&self, route: &str) -> Option<RouteStats> {
        self.catalogue.route_stats(route)
    }

    /// Routes serving the stop, `None` if the stop does not exist
    pub fn buses_on_stop(&self, stop: &str) -> Option<BTreeSet<&str>> {
        self.catalogue.find_stop(stop)?;
        Some(self.catalogue.find_buses_on_stop(stop))
    }

    /// Fastest itinerary between two named stops
    ///
    /// # Errors
    ///
    /// `Error::StopNotFound` if either stop is unknown
    pub fn route_info(&self, from: &str, to: &str) -> Result<Option<RouteInfo>, Error> {
        self.router.route_info(&self.catalogue, from, to)
    }
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn model_is_shareable_between_threads() {
        assert_send_sync::<TransitModel>();
    }

    #[test]
    fn stop_without_buses_differs_from_missing_stop() {
        let mut catalogue = TransitCatalogue::new();
        catalogue.add_stop("A", Point::new(0.0, 0.0), [("B", 100)]);
        catalogue.add_stop("B", Point::new(0.0, 0.001), [("C", 100)]);
        catalogue.add_route("1", &["A", "B"], false).unwrap();
        let model = TransitModel::new(catalogue, RouterSettings::new(1.0, 30.0)).unwrap();

        assert!(model.buses_on_stop("C").unwrap().is_empty());
        assert!(model.buses_on_stop("D").is_none());
        assert_eq!(model.buses_on_stop("A").unwrap().into_iter().collect::<Vec<_>>(), vec!["1"]);
    }

    #[test]
    fn empty_catalogue_cannot_be_modelled() {
        let result = TransitModel::new(TransitCatalogue::new(), RouterSettings::new(1.0, 30.0));
        assert!(matches!(result, Err(Error::EmptyNetwork)));
    }
}
