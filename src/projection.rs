//! # Local stereographic projection
//!
//! A [`ProjectionFrame`] is a local tangent-plane frame anchored at a
//! configured center point. Geocentric positions are first expressed in the
//! frame's east/north/up Cartesian coordinates, then mapped onto the
//! **conformal stereographic plane** about the local vertical. The plane is
//! the common space in which inter-aircraft distances are measured: over the
//! terminal-area ranges this analysis covers, planar Euclidean distance in
//! (u, v) approximates the geodesic distance well.
//!
//! The frame owns its rotation matrix, translation vector and local
//! earth-radius scalar, all derived once at construction and immutable
//! thereafter. Invariant: the center point itself projects to exactly (0, 0).

use crate::constants::{Meter, EARTH_MAJOR_AXIS, ECCENTRICITY_SQUARED};
use crate::geodesy::{
    site_rotation, site_translation, GeocentricPosition, GeodeticPosition, LocalCartesian,
};
use crate::matrix::Matrix;
use crate::minsep_errors::MinsepError;

/// A point on the local stereographic plane: plane coordinates plus height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereographicPosition {
    pub u: Meter,
    pub v: Meter,
    pub height: Meter,
}

impl StereographicPosition {
    /// Planar Euclidean distance to another projected point, in meters.
    ///
    /// Heights are deliberately ignored: the separation statistic is the
    /// horizontal distance.
    pub fn distance_to(&self, other: &StereographicPosition) -> Meter {
        let du = other.u - self.u;
        let dv = other.v - self.v;
        (du * du + dv * dv).sqrt()
    }
}

/// Local tangent-plane frame anchored at a center point.
#[derive(Debug, Clone)]
pub struct ProjectionFrame {
    center: GeodeticPosition,
    rotation: Matrix,
    translation: Matrix,
    earth_radius: Meter,
}

impl ProjectionFrame {
    /// Build the frame at `center`.
    ///
    /// The rotation/translation are the same direction-cosine frame used for
    /// radar sites; the radius scalar is the radius of curvature in the
    /// meridian at the center latitude, `R = a(1−e²) / (1 − e²·sin²lat)^1.5`.
    pub fn new(center: GeodeticPosition) -> Self {
        let sin_lat = center.latitude.to_radians().sin();

        ProjectionFrame {
            center,
            rotation: site_rotation(&center),
            translation: site_translation(&center),
            earth_radius: (EARTH_MAJOR_AXIS * (1.0 - ECCENTRICITY_SQUARED))
                / (1.0 - ECCENTRICITY_SQUARED * sin_lat * sin_lat).powf(1.5),
        }
    }

    /// Center the frame is anchored at.
    pub fn center(&self) -> &GeodeticPosition {
        &self.center
    }

    /// Express a geocentric position in the frame's east/north/up coordinates:
    /// `rotation · (geocentric − translation)`.
    pub fn geocentric_to_local(
        &self,
        geocentric: &GeocentricPosition,
    ) -> Result<LocalCartesian, MinsepError> {
        let input = Matrix::from([geocentric.x, geocentric.y, geocentric.z]);
        let local = self.rotation.multiply(&input.subtract(&self.translation)?)?;

        Ok(LocalCartesian {
            x: local.at(0, 0),
            y: local.at(1, 0),
            z: local.at(2, 0),
        })
    }

    /// Map a local Cartesian point onto the stereographic plane.
    ///
    /// With `d² = x² + y²` and R the frame radius:
    /// `height = √(d² + (z + alt_c + R)²) − R` and the conformal scale
    /// `k = 2R / (2R + alt_c + z + height)`, giving `(u, v) = k·(x, y)`.
    pub fn local_to_stereographic(&self, local: &LocalCartesian) -> StereographicPosition {
        let d_xy2 = local.x * local.x + local.y * local.y;
        let lifted = local.z + self.center.altitude + self.earth_radius;
        let height = (d_xy2 + lifted * lifted).sqrt() - self.earth_radius;
        let k = (2.0 * self.earth_radius)
            / (2.0 * self.earth_radius + self.center.altitude + local.z + height);

        StereographicPosition {
            u: k * local.x,
            v: k * local.y,
            height,
        }
    }

    /// Composition of [`geocentric_to_local`](ProjectionFrame::geocentric_to_local)
    /// and [`local_to_stereographic`](ProjectionFrame::local_to_stereographic).
    pub fn geocentric_to_stereographic(
        &self,
        geocentric: &GeocentricPosition,
    ) -> Result<StereographicPosition, MinsepError> {
        let local = self.geocentric_to_local(geocentric)?;
        Ok(self.local_to_stereographic(&local))
    }
}
