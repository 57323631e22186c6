use geo::Point;

/// Mean Earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points,
/// using the spherical law of cosines.
///
/// Points follow the `geo` convention: `x` is longitude, `y` is latitude.
pub fn compute_distance(from: Point<f64>, to: Point<f64>) -> f64 {
    let (from_lat, to_lat) = (from.y().to_radians(), to.y().to_radians());
    let delta_lng = (from.x() - to.x()).abs().to_radians();

    let cos_angle = from_lat.sin() * to_lat.sin() + from_lat.cos() * to_lat.cos() * delta_lng.cos();

    // Rounding can push the cosine of identical points slightly above 1
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let point = Point::new(37.6, 55.7);
        assert_eq!(compute_distance(point, point), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let distance = compute_distance(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let expected = EARTH_RADIUS * std::f64::consts::PI / 180.0;
        assert!((distance - expected).abs() < 1e-3, "got {distance}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(37.20829, 55.611087);
        let b = Point::new(37.209755, 55.595884);
        assert!((compute_distance(a, b) - compute_distance(b, a)).abs() < 1e-9);
    }

    #[test]
    fn wraps_around_antimeridian() {
        let across = compute_distance(Point::new(-179.5, 10.0), Point::new(179.5, 10.0));
        let regular = compute_distance(Point::new(0.0, 10.0), Point::new(1.0, 10.0));
        assert!((across - regular).abs() < 1e-3);
    }
}
