//! # Geodetic / geocentric coordinate conversions
//!
//! Conversions between **geodetic** (latitude/longitude/altitude on the WGS84
//! ellipsoid), **geocentric** (ECEF Cartesian) and **local Cartesian**
//! coordinates, plus the construction of local tangent-plane frames
//! (direction-cosine rotation and ECEF translation) used by both the radar
//! site resolution and the stereographic projector.
//!
//! ## Conventions
//!
//! - Latitude/longitude in **degrees**, altitude in **meters** above the ellipsoid.
//! - ECEF axes: x toward (0°, 0°), y toward (0°, 90°E), z toward the north pole.
//! - Local frames are east/north/up at the frame center.
//!
//! The geodetic → geocentric direction is closed form. The reverse direction
//! has no closed form on the ellipsoid and is solved by **fixed-point
//! iteration** on the latitude, capped at [`MAX_GEODETIC_ITERATIONS`]; the cap
//! is a precision ceiling, never an error.

use crate::constants::{
    Degree, Meter, EARTH_MAJOR_AXIS, ECCENTRICITY_SQUARED, GEODETIC_CONVERGENCE,
    MAX_GEODETIC_ITERATIONS,
};
use crate::matrix::Matrix;

/// A position on the WGS84 ellipsoid. Immutable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPosition {
    /// Geodetic latitude in degrees, north positive
    pub latitude: Degree,
    /// Geodetic longitude in degrees, east positive
    pub longitude: Degree,
    /// Height above the ellipsoid in meters
    pub altitude: Meter,
}

/// Earth-Centered-Earth-Fixed Cartesian position in meters.
///
/// Always derived from a [`GeodeticPosition`], never constructed independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPosition {
    pub x: Meter,
    pub y: Meter,
    pub z: Meter,
}

/// Cartesian position in a local tangent-plane frame (east/north/up), in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalCartesian {
    pub x: Meter,
    pub y: Meter,
    pub z: Meter,
}

impl GeodeticPosition {
    pub fn new(latitude: Degree, longitude: Degree, altitude: Meter) -> Self {
        GeodeticPosition {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Closed-form geodetic → ECEF conversion.
    ///
    /// Uses the radius of curvature in the prime vertical
    /// ν = a / √(1 − e²·sin²lat). Deterministic, no iteration, no failure case.
    pub fn to_geocentric(&self) -> GeocentricPosition {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        let nu = prime_vertical_radius(lat);

        GeocentricPosition {
            x: (nu + self.altitude) * lat.cos() * lon.cos(),
            y: (nu + self.altitude) * lat.cos() * lon.sin(),
            z: (nu * (1.0 - ECCENTRICITY_SQUARED) + self.altitude) * lat.sin(),
        }
    }
}

/// Radius of curvature in the prime vertical at geodetic latitude `lat` (radians).
pub(crate) fn prime_vertical_radius(lat: f64) -> Meter {
    EARTH_MAJOR_AXIS / (1.0 - ECCENTRICITY_SQUARED * lat.sin() * lat.sin()).sqrt()
}

/// Direction-cosine rotation matrix of the local east/north/up frame at `center`.
///
/// The matrix maps ECEF offsets from the center into local coordinates:
/// row 0 is the east unit vector, row 1 north, row 2 up. Pure function of the
/// center's geodetic coordinates.
pub fn site_rotation(center: &GeodeticPosition) -> Matrix {
    let lat = center.latitude.to_radians();
    let lon = center.longitude.to_radians();

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    Matrix::from([
        [-sin_lon, cos_lon, 0.0],
        [-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat],
        [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat],
    ])
}

/// ECEF position of `center` as a 3×1 translation vector.
///
/// Pure function of the center's geodetic coordinates; together with
/// [`site_rotation`] it defines the local tangent-plane frame.
pub fn site_translation(center: &GeodeticPosition) -> Matrix {
    let ecef = center.to_geocentric();
    Matrix::from([ecef.x, ecef.y, ecef.z])
}

/// ECEF → geodetic conversion by fixed-point iteration on the latitude.
///
/// The longitude is direct (`atan2(y, x)`); latitude and height are coupled
/// through the prime-vertical radius ν and are iterated from an initial
/// closed-form estimate until the latitude moves by less than
/// [`GEODETIC_CONVERGENCE`] radians or [`MAX_GEODETIC_ITERATIONS`] steps have
/// elapsed. Exhausting the cap returns the best available estimate — it is a
/// deliberate precision/robustness trade-off, not an error, and bounds the
/// loop on degenerate input such as points near the polar axis.
///
/// Arguments
/// -----------------
/// * `ecef`: the geocentric position to resolve.
///
/// Return
/// ----------
/// * The geodetic position, accurate to ~1e-8 rad of latitude for the
///   mid-latitude domain the supported sites produce.
pub fn geocentric_to_geodetic(ecef: &GeocentricPosition) -> GeodeticPosition {
    let (x, y, z) = (ecef.x, ecef.y, ecef.z);
    let d_xy = (x * x + y * y).sqrt();

    // Initial latitude estimate, then refine latitude and height together.
    let mut lat = (z / d_xy
        / (1.0 - (EARTH_MAJOR_AXIS * ECCENTRICITY_SQUARED) / (d_xy * d_xy + z * z).sqrt()))
    .atan();
    let mut nu = prime_vertical_radius(lat);
    let mut height = d_xy / lat.cos() - nu;

    // Seed the previous guess away from the first estimate so the loop runs at least once.
    let mut previous = if lat >= 0.0 { -0.1 } else { 0.1 };

    let mut count = 0;
    while (lat - previous).abs() > GEODETIC_CONVERGENCE && count < MAX_GEODETIC_ITERATIONS {
        count += 1;
        previous = lat;
        lat = ((z * (1.0 + height / nu)) / (d_xy * (1.0 - ECCENTRICITY_SQUARED + height / nu)))
            .atan();
        nu = prime_vertical_radius(lat);
        height = d_xy / lat.cos() - nu;
    }

    GeodeticPosition {
        latitude: lat.to_degrees(),
        longitude: y.atan2(x).to_degrees(),
        altitude: height,
    }
}

#[cfg(test)]
mod geodesy_test {
    use super::*;

    #[test]
    fn geocentric_at_equator_prime_meridian() {
        let p = GeodeticPosition::new(0.0, 0.0, 0.0);
        let g = p.to_geocentric();
        assert!((g.x - EARTH_MAJOR_AXIS).abs() < 1e-6);
        assert!(g.y.abs() < 1e-6);
        assert!(g.z.abs() < 1e-6);
    }

    #[test]
    fn roundtrip_recovers_geodetic_position() {
        // Both hemispheres and the equator; exact poles are excluded by design.
        let points = [
            (41.3007023, 2.1020588, 27.257), // supported radar site
            (51.5, -0.1, 100.0),
            (-33.9, 18.4, 20.0),
            (0.0, 139.7, 40.0),
            (-0.5, -74.0, 1500.0),
            (68.2, 15.4, 350.0),
        ];

        for (lat, lon, alt) in points {
            let p = GeodeticPosition::new(lat, lon, alt);
            let back = geocentric_to_geodetic(&p.to_geocentric());
            assert!(
                (back.latitude - lat).abs() < 1e-6,
                "latitude mismatch: {} vs {}",
                back.latitude,
                lat
            );
            assert!(
                (back.longitude - lon).abs() < 1e-6,
                "longitude mismatch: {} vs {}",
                back.longitude,
                lon
            );
            assert!(
                (back.altitude - alt).abs() < 1e-2,
                "altitude mismatch: {} vs {}",
                back.altitude,
                alt
            );
        }
    }

    #[test]
    fn near_pole_terminates_and_stays_finite() {
        let p = GeodeticPosition::new(89.999, 12.0, 500.0);
        let back = geocentric_to_geodetic(&p.to_geocentric());
        assert!(back.latitude.is_finite());
        assert!(back.longitude.is_finite());
        assert!(back.altitude.is_finite());
        assert!((back.latitude - 89.999).abs() < 1e-3);
    }

    #[test]
    fn southern_seed_offset_converges() {
        let p = GeodeticPosition::new(-41.3, 174.8, 12.0);
        let back = geocentric_to_geodetic(&p.to_geocentric());
        assert!((back.latitude - -41.3).abs() < 1e-6);
        assert!((back.longitude - 174.8).abs() < 1e-6);
    }

    #[test]
    fn rotation_rows_are_orthonormal() {
        let center = GeodeticPosition::new(41.3007023, 2.1020588, 27.257);
        let rot = site_rotation(&center);
        let identity = rot.multiply(&rot.transpose()).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!((identity.at(r, c) - expected).abs() < 1e-12);
            }
        }
    }
}
