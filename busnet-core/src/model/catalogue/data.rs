//! Transit catalogue and the queries answered directly from it

use std::collections::BTreeSet;

use geo::Point;
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use log::debug;

use super::types::{PLACEHOLDER_GEOMETRY, Route, RouteStats, Stop, StopPair};
use crate::{Error, Meters, RouteId, StopId, algo::compute_distance};

/// Owner of every stop, route and road distance of the network.
///
/// Stops and routes live in append-only arenas, their indices
/// (`StopId`, `RouteId`) are stable for the lifetime of the catalogue.
#[derive(Debug, Clone, Default)]
pub struct TransitCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,
    routes: Vec<Route>,
    route_index: HashMap<String, RouteId>,
    /// Directed road distances, the reverse direction is stored independently
    distances: HashMap<StopPair, Meters>,
}

impl TransitCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stop or updates the coordinates of an existing one.
    ///
    /// `distances` are road distances from this stop to its neighbours.
    /// A neighbour that is not known yet is created with placeholder
    /// coordinates and keeps them until it is declared itself.
    pub fn add_stop<I, S>(&mut self, name: &str, geometry: Point<f64>, distances: I) -> StopId
    where
        I: IntoIterator<Item = (S, Meters)>,
        S: AsRef<str>,
    {
        let id = match self.stop_index.get(name) {
            Some(&id) => {
                self.stops[id].geometry = geometry;
                id
            }
            None => self.push_stop(name, geometry),
        };

        for (to, length) in distances {
            let to = self.get_or_insert_stop(to.as_ref());
            self.distances.insert(StopPair::new(id, to), length);
        }

        id
    }

    /// Stores a single directed road distance
    pub fn set_length_from_to(&mut self, from: &str, to: &str, length: Meters) {
        let from = self.get_or_insert_stop(from);
        let to = self.get_or_insert_stop(to);
        self.distances.insert(StopPair::new(from, to), length);
    }

    /// Registers a route over already known stops.
    ///
    /// A route that is not a round trip is expanded into its out-and-back
    /// sequence.
    ///
    /// # Errors
    ///
    /// `Error::DuplicateRoute` if the name is taken,
    /// `Error::UnknownStop` if a stop name was never referenced before.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<RouteId, Error> {
        if self.route_index.contains_key(name) {
            return Err(Error::DuplicateRoute(name.to_string()));
        }

        let stops = stop_names
            .iter()
            .map(|stop| {
                self.stop_id(stop.as_ref()).ok_or_else(|| Error::UnknownStop {
                    route: name.to_string(),
                    stop: stop.as_ref().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let id = self.routes.len();
        self.routes
            .push(Route::new(name.to_string(), stops, is_roundtrip));
        self.route_index.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id])
    }

    pub fn find_route(&self, name: &str) -> Option<&Route> {
        self.route_id(name).map(|id| &self.routes[id])
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn route_id(&self, name: &str) -> Option<RouteId> {
        self.route_index.get(name).copied()
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    /// All stops, indexed by `StopId`
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All routes, indexed by `RouteId`
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Stops that are still waiting for a declaration with real coordinates
    pub fn latent_stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(|stop| stop.is_latent())
    }

    /// Sorted names of the routes passing through the stop.
    ///
    /// Returns an empty set both for a stop without routes and for an unknown
    /// name, callers tell them apart with [`Self::find_stop`].
    pub fn find_buses_on_stop(&self, name: &str) -> BTreeSet<&str> {
        let Some(stop) = self.stop_id(name) else {
            return BTreeSet::new();
        };

        self.routes
            .iter()
            .filter(|route| route.stops.contains(&stop))
            .map(|route| route.name.as_str())
            .collect()
    }

    /// Statistics of the named route, `None` if there is no such route
    pub fn route_stats(&self, name: &str) -> Option<RouteStats> {
        self.find_route(name)
            .map(|route| self.compute_route_stats(route))
    }

    pub(crate) fn compute_route_stats(&self, route: &Route) -> RouteStats {
        let geo_distance: f64 = route
            .stops
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| {
                compute_distance(self.stops[from].geometry, self.stops[to].geometry)
            })
            .sum();

        let mut route_length: Meters = route
            .stops
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| self.length_from_to(from, to))
            .sum();
        // A road distance declared from the first stop to itself counts once
        if let Some(&first) = route.stops.first() {
            route_length += self.length_from_to(first, first);
        }

        let unique_stops_count = route.stops.iter().collect::<HashSet<_>>().len();

        RouteStats {
            geo_distance,
            route_length,
            stops_count: route.stops.len(),
            unique_stops_count,
        }
    }

    /// Road distance between two stops.
    ///
    /// Falls back to the reverse direction when the forward one was never
    /// declared, and to zero when neither was.
    pub fn length_from_to(&self, from: StopId, to: StopId) -> Meters {
        let pair = StopPair::new(from, to);
        self.distances
            .get(&pair)
            .or_else(|| self.distances.get(&pair.reversed()))
            .copied()
            .unwrap_or(0)
    }

    /// Name based variant of [`Self::length_from_to`], `None` for unknown stops
    pub fn length_between(&self, from: &str, to: &str) -> Option<Meters> {
        Some(self.length_from_to(self.stop_id(from)?, self.stop_id(to)?))
    }

    fn get_or_insert_stop(&mut self, name: &str) -> StopId {
        match self.stop_index.get(name) {
            Some(&id) => id,
            None => {
                debug!("Stop {name:?} referenced before its declaration");
                self.push_stop(name, PLACEHOLDER_GEOMETRY)
            }
        }
    }

    fn push_stop(&mut self, name: &str, geometry: Point<f64>) -> StopId {
        let id = self.stops.len();
        self.stops.push(Stop {
            name: name.to_string(),
            geometry,
        });
        self.stop_index.insert(name.to_string(), id);
        id
    }
}
