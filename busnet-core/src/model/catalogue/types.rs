use geo::{Coord, Point};

use crate::{Meters, StopId};

/// Coordinates given to a stop that is known only as a road distance target.
/// Both components lie outside the valid range, so the value never collides
/// with a declared position.
pub const PLACEHOLDER_GEOMETRY: Point<f64> = Point(Coord { x: 181.0, y: 91.0 });

/// Bus stop
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique stop name
    pub name: String,
    /// Stop coordinates, `x` is longitude and `y` is latitude
    pub geometry: Point<f64>,
}

impl Stop {
    /// Whether the stop was referenced but never declared with coordinates
    pub fn is_latent(&self) -> bool {
        self.geometry == PLACEHOLDER_GEOMETRY
    }
}

/// Bus route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Unique route name
    pub name: String,
    /// Stops in travel order. Out-and-back routes are already expanded,
    /// so `[a, b, c]` is stored as `[a, b, c, b, a]`.
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Route {
    pub(crate) fn new(name: String, mut stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        if !is_roundtrip {
            let way_back: Vec<StopId> = stops.iter().rev().skip(1).copied().collect();
            stops.extend(way_back);
        }
        Self {
            name,
            stops,
            is_roundtrip,
        }
    }
}

/// Directed key of the road distance table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopPair {
    pub from: StopId,
    pub to: StopId,
}

impl StopPair {
    pub fn new(from: StopId, to: StopId) -> Self {
        Self { from, to }
    }

    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// Aggregated statistics of a single route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStats {
    /// Sum of great-circle distances between consecutive stops, meters
    pub geo_distance: f64,
    /// Sum of road distances between consecutive stops, meters
    pub route_length: Meters,
    /// Number of stops in the expanded sequence
    pub stops_count: usize,
    /// Number of distinct stops
    pub unique_stops_count: usize,
}

impl RouteStats {
    /// Ratio of road length to geographic length, zero for a degenerate route
    #[allow(clippy::cast_precision_loss)]
    pub fn curvature(&self) -> f64 {
        if self.geo_distance > 0.0 {
            self.route_length as f64 / self.geo_distance
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_and_back_route_is_a_palindrome() {
        let route = Route::new("14".to_string(), vec![0, 1, 2], false);
        assert_eq!(route.stops, vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn roundtrip_route_is_kept_as_declared() {
        let route = Route::new("14".to_string(), vec![0, 1, 2, 0], true);
        assert_eq!(route.stops, vec![0, 1, 2, 0]);
    }

    #[test]
    fn degenerate_out_and_back_routes() {
        assert!(Route::new("e".to_string(), vec![], false).stops.is_empty());
        assert_eq!(Route::new("s".to_string(), vec![7], false).stops, vec![7]);
    }

    #[test]
    fn curvature_of_zero_length_route() {
        let stats = RouteStats {
            geo_distance: 0.0,
            route_length: 0,
            stops_count: 1,
            unique_stops_count: 1,
        };
        assert_eq!(stats.curvature(), 0.0);
    }

    #[test]
    fn curvature_is_road_over_geo() {
        let stats = RouteStats {
            geo_distance: 1000.0,
            route_length: 1500,
            stops_count: 3,
            unique_stops_count: 3,
        };
        assert!((stats.curvature() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn placeholder_marks_latent_stop() {
        let stop = Stop {
            name: "Ghost".to_string(),
            geometry: PLACEHOLDER_GEOMETRY,
        };
        assert!(stop.is_latent());
    }
}
