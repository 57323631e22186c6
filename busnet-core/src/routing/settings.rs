use serde::Deserialize;

use crate::{Error, Meters, Minutes};

const METERS_PER_KILOMETER: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Parameters of the travel time model
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RouterSettings {
    /// Minutes spent at a stop before boarding
    pub bus_wait_time: Minutes,
    /// Bus speed in km/h
    pub bus_velocity: f64,
}

impl RouterSettings {
    pub fn new(bus_wait_time: Minutes, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Edge weights must stay finite and non-negative for the path search
    pub fn validate(&self) -> Result<(), Error> {
        if !self.bus_wait_time.is_finite() || self.bus_wait_time < 0.0 {
            return Err(Error::InvalidSettings(format!(
                "bus_wait_time must be a non-negative number, got {}",
                self.bus_wait_time
            )));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "bus_velocity must be a positive number, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Bus speed in meters per minute
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * METERS_PER_KILOMETER / MINUTES_PER_HOUR
    }

    /// Minutes needed to ride the given road distance
    #[allow(clippy::cast_precision_loss)]
    pub fn travel_time(&self, distance: Meters) -> Minutes {
        distance as f64 / self.meters_per_minute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_kmh_is_a_kilometer_per_minute() {
        let settings = RouterSettings::new(6.0, 60.0);
        assert!((settings.meters_per_minute() - 1000.0).abs() < f64::EPSILON);
        assert!((settings.travel_time(2500) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_positive_velocity() {
        assert!(RouterSettings::new(6.0, 0.0).validate().is_err());
        assert!(RouterSettings::new(6.0, -40.0).validate().is_err());
        assert!(RouterSettings::new(6.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn rejects_negative_wait_time() {
        assert!(RouterSettings::new(-1.0, 40.0).validate().is_err());
        assert!(RouterSettings::new(0.0, 40.0).validate().is_ok());
    }
}
