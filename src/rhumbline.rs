//! Rhumb lines (loxodromes): paths of constant compass bearing.
//!
//! A rhumb line is a straight line on a Mercator chart, so latitudes are
//! compared through [`geomath::mercator_stretch`] rather than directly.

use crate::coordinate::Coordinate;
use crate::error::NavResult;
use crate::geomath;
use crate::parse::{self, Value};
use crate::sphere::{finish_position, finish_scalar, Sphere};

impl Sphere {
    /// Point reached from `origin` after travelling `distance` on the
    /// constant `bearing` (degrees).
    ///
    /// Runs that carry the path over a pole, and any NaN input, give
    /// [`NavError::Degenerate`](crate::NavError::Degenerate).
    pub fn rhumb_destination<'a, D: Into<Value<'a>>>(
        &self,
        origin: &Coordinate,
        bearing: f64,
        distance: D,
    ) -> NavResult<Coordinate> {
        let d = self.angular_distance(parse::parse_distance(distance));
        let lat1 = geomath::to_radians(origin.latitude());
        let lon1 = geomath::to_radians(origin.longitude());
        let brng = geomath::to_radians(bearing);

        let lat2 = lat1 + d * brng.cos();
        let dlat = lat2 - lat1;
        let dphi = geomath::mercator_stretch(lat1, lat2);
        // E-W lines have dlat/dphi of 0/0
        let q = if dlat.abs() > geomath::RHUMB_EPSILON {
            dlat / dphi
        } else {
            lat1.cos()
        };
        let dlon = d * brng.sin() / q;

        let lat2 = geomath::reflect_past_pole(lat2);
        let lon2 = geomath::normalize_longitude(lon1 + dlon);

        finish_position(lat2, lon2, "rhumb destination", origin, bearing)
    }

    /// Constant bearing in degrees [0, 360) of the rhumb line from `from`
    /// to `to`, taking the shorter way round the antimeridian.
    pub fn rhumb_bearing(&self, from: &Coordinate, to: &Coordinate) -> NavResult<f64> {
        let dlon = geomath::to_radians(to.longitude() - from.longitude());
        let dphi = geomath::mercator_stretch(
            geomath::to_radians(from.latitude()),
            geomath::to_radians(to.latitude()),
        );
        let dlon = geomath::shorter_longitude_delta(dlon);

        finish_scalar(geomath::normalize_bearing(dlon.atan2(dphi)), "rhumb bearing")
    }

    /// Length of the rhumb line from `from` to `to`.
    pub fn rhumb_distance(&self, from: &Coordinate, to: &Coordinate) -> NavResult<f64> {
        let lat1 = geomath::to_radians(from.latitude());
        let lat2 = geomath::to_radians(to.latitude());
        let dlat = lat2 - lat1;
        let dphi = geomath::mercator_stretch(lat1, lat2);
        let q = if dphi.abs() > geomath::RHUMB_STRETCH_EPSILON {
            dlat / dphi
        } else {
            lat1.cos()
        };
        let dlon = geomath::shorter_longitude_delta(geomath::to_radians(
            to.longitude() - from.longitude(),
        ));

        let delta = (dlat * dlat + q * q * dlon * dlon).sqrt();
        finish_scalar(delta * self.radius(), "rhumb distance")
    }
}

#[cfg(test)]
mod tests {
    extern crate utilities;

    use super::*;
    use crate::error::NavError;
    use assert_approx_eq::assert_approx_eq;
    use utilities::assert_delta;
    use utilities::util::test_basic;

    #[test]
    fn test_rhumb_destination_due_east() {
        let origin = Coordinate::from_degrees(0.0, 0.0);
        let dest = Sphere::earth().rhumb_destination(&origin, 90.0, 111.2).unwrap();
        assert_approx_eq!(dest.latitude(), 0.0, 1e-9);
        assert_approx_eq!(dest.longitude(), 1.0, 1e-3);
    }

    #[test]
    fn test_rhumb_destination_due_west_at_latitude() {
        // along a parallel the distance per degree shrinks with cos(lat)
        let origin = Coordinate::from_degrees(60.0, 10.0);
        let earth = Sphere::earth();
        let per_degree = earth.radius() * std::f64::consts::PI / 180.0 * 0.5;
        let dest = earth.rhumb_destination(&origin, 270.0, per_degree).unwrap();
        assert_approx_eq!(dest.latitude(), 60.0, 1e-9);
        assert_approx_eq!(dest.longitude(), 9.0, 1e-9);
    }

    #[test]
    fn test_rhumb_destination_due_north() {
        let origin = Coordinate::from_degrees(10.0, 20.0);
        let earth = Sphere::earth();
        let per_degree = earth.radius() * std::f64::consts::PI / 180.0;
        let dest = earth.rhumb_destination(&origin, 0.0, 5.0 * per_degree).unwrap();
        assert_approx_eq!(dest.latitude(), 15.0, 1e-9);
        assert_approx_eq!(dest.longitude(), 20.0, 1e-9);
    }

    #[test]
    fn test_rhumb_destination_zero_distance() {
        let earth = Sphere::earth();
        let origin = Coordinate::from_degrees(51.127, 1.338);
        for &bearing in &[0.0, 33.0, 90.0, 180.0, 250.0, 359.0] {
            let dest = earth.rhumb_destination(&origin, bearing, 0.0).unwrap();
            assert_approx_eq!(dest.latitude(), origin.latitude(), 1e-12);
            assert_approx_eq!(dest.longitude(), origin.longitude(), 1e-12);
        }
    }

    #[test]
    fn test_rhumb_destination_crosses_antimeridian() {
        let earth = Sphere::earth();
        let origin = Coordinate::from_degrees(0.0, -179.5);
        let per_degree = earth.radius() * std::f64::consts::PI / 180.0;
        let dest = earth.rhumb_destination(&origin, 270.0, per_degree).unwrap();
        assert_approx_eq!(dest.longitude(), 179.5, 1e-9);

        let origin = Coordinate::from_degrees(0.0, 179.5);
        let dest = earth.rhumb_destination(&origin, 90.0, per_degree).unwrap();
        assert_approx_eq!(dest.longitude(), -179.5, 1e-9);
    }

    #[test]
    fn test_rhumb_destination_past_pole() {
        let origin = Coordinate::from_degrees(89.0, 0.0);
        let result = Sphere::earth().rhumb_destination(&origin, 0.0, 500.0);
        assert!(matches!(result, Err(NavError::Degenerate { .. })));
    }

    #[test]
    fn test_rhumb_destination_nan_input() {
        let earth = Sphere::earth();
        let origin = Coordinate::new("not a latitude", 0.0);
        assert!(earth.rhumb_destination(&origin, 45.0, 10.0).is_err());

        let origin = Coordinate::from_degrees(0.0, 0.0);
        assert!(earth.rhumb_destination(&origin, 45.0, "ten").is_err());
        assert!(earth.rhumb_destination(&origin, 45.0, "10").is_ok());
    }

    #[test]
    fn test_rhumb_bearing_antimeridian() {
        let earth = Sphere::earth();
        let from = Coordinate::from_degrees(0.0, 179.0);
        let to = Coordinate::from_degrees(0.0, -179.0);
        assert_approx_eq!(earth.rhumb_bearing(&from, &to).unwrap(), 90.0, 1e-12);
        assert_approx_eq!(earth.rhumb_bearing(&to, &from).unwrap(), 270.0, 1e-12);
    }

    #[test]
    fn test_rhumb_bearing_cardinal() {
        let earth = Sphere::earth();
        let origin = Coordinate::from_degrees(10.0, 10.0);
        let cases = [
            ((11.0, 10.0), 0.0),
            ((10.0, 11.0), 90.0),
            ((9.0, 10.0), 180.0),
            ((10.0, 9.0), 270.0),
        ];
        for &((lat, lon), expected) in &cases {
            let dest = Coordinate::from_degrees(lat, lon);
            assert_approx_eq!(earth.rhumb_bearing(&origin, &dest).unwrap(), expected, 1e-12);
        }
    }

    #[test]
    fn test_rhumb_bearing_range() {
        let earth = Sphere::earth();
        let origin = Coordinate::from_degrees(-20.0, 170.0);
        let mut lat = -80.0;
        while lat <= 80.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let dest = Coordinate::from_degrees(lat, lon);
                let b = earth.rhumb_bearing(&origin, &dest).unwrap();
                assert!(b >= 0.0 && b < 360.0, "bearing {} to {} out of range", b, dest);
                lon += 15.0;
            }
            lat += 10.0;
        }
    }

    #[test]
    fn test_rhumb_bearing_not_finite() {
        let from = Coordinate::new("", 0.0);
        let to = Coordinate::from_degrees(1.0, 1.0);
        assert_eq!(
            Sphere::earth().rhumb_bearing(&from, &to),
            Err(NavError::NotFinite {
                quantity: "rhumb bearing"
            })
        );
    }

    #[test]
    fn test_rhumb_round_trip() {
        let earth = Sphere::earth();
        let origin = Coordinate::from_degrees(50.0664, -5.7147);
        for &bearing in &[15.0, 80.0, 90.0, 160.0, 225.0, 300.0] {
            let dest = earth.rhumb_destination(&origin, bearing, 350.0).unwrap();
            assert_approx_eq!(earth.rhumb_bearing(&origin, &dest).unwrap(), bearing, 1e-6);
            assert_approx_eq!(earth.rhumb_distance(&origin, &dest).unwrap(), 350.0, 1e-6);
        }
    }

    #[test]
    fn test_rhumb_distance() {
        let earth = Sphere::earth();
        let a = Coordinate::from_degrees(0.0, 0.0);
        let b = Coordinate::from_degrees(0.0, 1.0);
        assert_approx_eq!(earth.rhumb_distance(&a, &b).unwrap(), 111.19492664455873, 1e-9);
        assert_eq!(earth.rhumb_distance(&a, &a).unwrap(), 0.0);
        // never shorter than the great circle
        let c = Coordinate::from_degrees(50.0, -60.0);
        let d = Coordinate::from_degrees(55.0, 20.0);
        assert!(earth.rhumb_distance(&c, &d).unwrap() > earth.distance(&c, &d).unwrap());
    }

    #[test]
    fn test_rhumb_destination_vs_fixture() {
        // Format: lat1 lon1 bearing distance lat2 lon2
        test_basic("Rhumb_Destination", 6, |line_num, items| {
            let origin = Coordinate::from_degrees(items[0], items[1]);
            let result = Sphere::earth().rhumb_destination(&origin, items[2], items[3]);
            if items[4].is_nan() {
                assert!(result.is_err(), "line {}: expected a degenerate result", line_num);
            } else {
                let dest = result.unwrap();
                assert_delta("lat2", line_num, items[4], dest.latitude(), 1e-9);
                assert_delta("lon2", line_num, items[5], dest.longitude(), 1e-9);
            }
        });
    }

    #[test]
    fn test_rhumb_inverse_vs_fixture() {
        // Format: lat1 lon1 lat2 lon2 bearing distance
        test_basic("Rhumb_Inverse", 6, |line_num, items| {
            let earth = Sphere::earth();
            let from = Coordinate::from_degrees(items[0], items[1]);
            let to = Coordinate::from_degrees(items[2], items[3]);
            assert_delta("bearing", line_num, items[4], earth.rhumb_bearing(&from, &to).unwrap(), 1e-9);
            assert_delta("distance", line_num, items[5], earth.rhumb_distance(&from, &to).unwrap(), 1e-6);
        });
    }
}
