//! Great-circle and rhumb-line navigation on a spherical Earth.
//!
//! ```
//! use sphere_nav::Coordinate;
//!
//! let origin = Coordinate::new(0.0, 0.0);
//! let dest = origin.rhumb_destination_point(90.0, 111.2).unwrap();
//! assert!((dest.longitude() - 1.0).abs() < 1e-3);
//!
//! let bearing = Coordinate::new(0, 179)
//!     .rhumb_bearing_to(&Coordinate::new(0, -179))
//!     .unwrap();
//! assert!((bearing - 90.0).abs() < 1e-9);
//! ```
//!
//! All computations use a sphere of radius [`EARTH_RADIUS_KM`] unless they
//! are called on a [`Sphere`] built with another radius.

mod coordinate;
mod error;
pub mod geomath;
pub mod parse;
mod rhumbline;
mod sphere;

pub use coordinate::Coordinate;
pub use error::{NavError, NavResult};
pub use geomath::AngleExt;
pub use parse::Value;
pub use sphere::{Sphere, EARTH_RADIUS_KM};
