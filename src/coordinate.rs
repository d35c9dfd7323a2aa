use crate::error::NavResult;
use crate::parse::{self, Value};
use crate::sphere::Sphere;
use std::fmt;

/// A position on the sphere in degrees.
///
/// Neither component is range checked. Text that does not parse becomes
/// NaN, and a NaN component makes every navigation method return an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate from numbers or text.
    ///
    /// ```
    /// use sphere_nav::Coordinate;
    ///
    /// let a = Coordinate::new("53.3206", -1.7297);
    /// assert_eq!(a, Coordinate::from_degrees(53.3206, -1.7297));
    /// assert!(Coordinate::new("north", 0).latitude().is_nan());
    /// ```
    pub fn new<'a, 'b, A, B>(latitude: A, longitude: B) -> Self
    where
        A: Into<Value<'a>>,
        B: Into<Value<'b>>,
    {
        Coordinate {
            latitude: parse::parse_float(latitude),
            longitude: parse::parse_float(longitude),
        }
    }

    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// True when both components are finite numbers.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Follow a rhumb line on `bearing` (degrees) for `distance` km.
    pub fn rhumb_destination_point<'a, D: Into<Value<'a>>>(
        &self,
        bearing: f64,
        distance: D,
    ) -> NavResult<Coordinate> {
        Sphere::earth().rhumb_destination(self, bearing, distance)
    }

    /// Constant bearing in degrees [0, 360) of the rhumb line to `dest`.
    pub fn rhumb_bearing_to(&self, dest: &Coordinate) -> NavResult<f64> {
        Sphere::earth().rhumb_bearing(self, dest)
    }

    /// Rhumb-line distance to `dest` in km.
    pub fn rhumb_distance_to(&self, dest: &Coordinate) -> NavResult<f64> {
        Sphere::earth().rhumb_distance(self, dest)
    }

    /// Follow a great circle leaving on `bearing` (degrees) for `distance` km.
    pub fn destination_point<'a, D: Into<Value<'a>>>(
        &self,
        bearing: f64,
        distance: D,
    ) -> NavResult<Coordinate> {
        Sphere::earth().destination(self, bearing, distance)
    }

    pub fn distance_to(&self, dest: &Coordinate) -> NavResult<f64> {
        Sphere::earth().distance(self, dest)
    }

    pub fn bearing_to(&self, dest: &Coordinate) -> NavResult<f64> {
        Sphere::earth().initial_bearing(self, dest)
    }

    pub fn final_bearing_to(&self, dest: &Coordinate) -> NavResult<f64> {
        Sphere::earth().final_bearing(self, dest)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinate::from_degrees(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
