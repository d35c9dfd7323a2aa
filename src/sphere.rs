use crate::coordinate::Coordinate;
use crate::error::{NavError, NavResult};
use crate::geomath;
use crate::parse::{self, Value};
use log::debug;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const EARTH: Sphere = Sphere::new(EARTH_RADIUS_KM);

/// A spherical model of the Earth (or any other body).
///
/// Distances passed to and returned from a `Sphere` are in the unit of its
/// radius. [`Sphere::earth`] uses kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    pub const fn new(radius: f64) -> Self {
        Sphere { radius }
    }

    /// The sphere used by the methods on [`Coordinate`].
    pub const fn earth() -> Self {
        EARTH
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angular distance in radians covered by a linear distance.
    pub fn angular_distance(&self, distance: f64) -> f64 {
        distance / self.radius
    }

    /// Point reached from `origin` after travelling `distance` along the
    /// great circle that leaves it on `bearing` (degrees).
    ///
    /// Textual distances are trimmed and must parse completely.
    pub fn destination<'a, D: Into<Value<'a>>>(
        &self,
        origin: &Coordinate,
        bearing: f64,
        distance: D,
    ) -> NavResult<Coordinate> {
        let d = self.angular_distance(parse::parse_distance(distance));
        let brng = geomath::to_radians(bearing);
        let lat1 = geomath::to_radians(origin.latitude());
        let lon1 = geomath::to_radians(origin.longitude());

        let lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * brng.cos()).asin();
        let lon2 = lon1
            + (brng.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat2.sin());
        let lon2 = geomath::normalize_longitude(lon2);

        finish_position(lat2, lon2, "great circle destination", origin, bearing)
    }

    /// Great-circle (haversine) distance between two points.
    pub fn distance(&self, from: &Coordinate, to: &Coordinate) -> NavResult<f64> {
        let lat1 = geomath::to_radians(from.latitude());
        let lat2 = geomath::to_radians(to.latitude());
        let dlat = lat2 - lat1;
        let dlon = geomath::to_radians(to.longitude() - from.longitude());

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // clamp rounding overshoot without letting f64::min swallow NaN
        let s = a.sqrt();
        let c = 2.0 * (if s > 1.0 { 1.0 } else { s }).asin();
        finish_scalar(c * self.radius, "great circle distance")
    }

    /// Initial bearing in degrees [0, 360) of the great circle from `from`
    /// to `to`.
    pub fn initial_bearing(&self, from: &Coordinate, to: &Coordinate) -> NavResult<f64> {
        let lat1 = geomath::to_radians(from.latitude());
        let lat2 = geomath::to_radians(to.latitude());
        let dlon = geomath::to_radians(to.longitude() - from.longitude());

        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
        finish_scalar(geomath::normalize_bearing(y.atan2(x)), "great circle bearing")
    }

    /// Bearing in degrees [0, 360) on arrival at `to`.
    ///
    /// For coincident points no path exists. `initial_bearing` then gives 0
    /// and this gives its reverse, 180.
    pub fn final_bearing(&self, from: &Coordinate, to: &Coordinate) -> NavResult<f64> {
        let reverse = self.initial_bearing(to, from)?;
        Ok((reverse + 180.0) % 360.0)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::earth()
    }
}

// Convert a computed position from radians, rejecting NaN components.
pub(crate) fn finish_position(
    lat2: f64,
    lon2: f64,
    operation: &str,
    origin: &Coordinate,
    bearing: f64,
) -> NavResult<Coordinate> {
    if lat2.is_nan() || lon2.is_nan() {
        debug!(
            "{} from {} on bearing {} is degenerate: ({}, {})",
            operation, origin, bearing, lat2, lon2
        );
        return Err(NavError::Degenerate {
            latitude: lat2,
            longitude: lon2,
        });
    }
    Ok(Coordinate::from_degrees(
        geomath::to_degrees(lat2),
        geomath::to_degrees(lon2),
    ))
}

pub(crate) fn finish_scalar(value: f64, quantity: &'static str) -> NavResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("{} came out as {}", quantity, value);
        Err(NavError::NotFinite { quantity })
    }
}
