use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Below this latitude difference (radians) a rhumb line is treated as
/// running due east or west.
pub const RHUMB_EPSILON: f64 = 1e-10;

/// Below this Mercator stretch a rhumb line's length is measured along its
/// starting parallel.
pub const RHUMB_STRETCH_EPSILON: f64 = 1e-12;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert a heading in radians to compass degrees in [0, 360).
pub fn normalize_bearing(radians: f64) -> f64 {
    let degrees = (to_degrees(radians) + 360.0).rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Wrap a longitude in radians into (-π, π].
pub fn normalize_longitude(radians: f64) -> f64 {
    let lon = (radians + PI).rem_euclid(2.0 * PI) - PI;
    if lon <= -PI {
        PI
    } else {
        lon
    }
}

/// Projected latitude difference between two latitudes (radians) on a
/// Mercator chart.
pub fn mercator_stretch(lat1: f64, lat2: f64) -> f64 {
    ((lat2 / 2.0 + FRAC_PI_4).tan() / (lat1 / 2.0 + FRAC_PI_4).tan()).ln()
}

/// Reflect a latitude (radians) that has run past a pole back onto the
/// sphere.
pub fn reflect_past_pole(lat: f64) -> f64 {
    if lat.abs() <= FRAC_PI_2 {
        lat
    } else if lat > 0.0 {
        PI - lat
    } else {
        -PI - lat
    }
}

/// Pick the shorter way round when a longitude difference (radians)
/// crosses the antimeridian.
pub fn shorter_longitude_delta(dlon: f64) -> f64 {
    if dlon.abs() <= PI {
        dlon
    } else if dlon > 0.0 {
        -(2.0 * PI - dlon)
    } else {
        2.0 * PI + dlon
    }
}

/// Angle conversions callable as methods on any float type.
pub trait AngleExt: Sized {
    fn to_rad(self) -> Self;
    fn to_deg(self) -> Self;
    /// Radians to a compass bearing in degrees, [0, 360).
    fn to_brng(self) -> Self;
}

impl AngleExt for f64 {
    fn to_rad(self) -> Self {
        to_radians(self)
    }

    fn to_deg(self) -> Self {
        to_degrees(self)
    }

    fn to_brng(self) -> Self {
        normalize_bearing(self)
    }
}

impl AngleExt for f32 {
    fn to_rad(self) -> Self {
        self * std::f32::consts::PI / 180.0
    }

    fn to_deg(self) -> Self {
        self * 180.0 / std::f32::consts::PI
    }

    fn to_brng(self) -> Self {
        let degrees = normalize_bearing(self as f64) as f32;
        // values just under 360 in f64 round up to 360 in f32
        if degrees >= 360.0 {
            0.0
        } else {
            degrees
        }
    }
}
