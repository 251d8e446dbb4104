//! # Radar sites and slant-range resolution
//!
//! A [`RadarSite`] ties a SAC/SIC identifier pair to a fixed geodetic location
//! and owns the local-frame rotation and translation matrices, computed once
//! at construction and immutable thereafter. Sites are resolved through a
//! [`SiteCatalog`]: a lookup table pre-seeded with the single surveillance
//! radar this analysis was built around, extensible at runtime with
//! [`SiteCatalog::register`]. Resolution of an unregistered pair fails with
//! [`MinsepError::UnknownSite`]; there is no partial or default site.
//!
//! The slant → geodetic path recovers the elevation angle from range, measured
//! height and site altitude, converts the measurement to site-local Cartesian
//! coordinates, lifts them to ECEF through the transposed rotation, and hands
//! the result to the iterative solver in [`geodesy`](crate::geodesy).

use ahash::RandomState;
use std::collections::HashMap;

use crate::constants::{Degree, Meter, EARTH_MAJOR_AXIS};
use crate::geodesy::{
    geocentric_to_geodetic, site_rotation, site_translation, GeocentricPosition, GeodeticPosition,
    LocalCartesian,
};
use crate::matrix::Matrix;
use crate::minsep_errors::MinsepError;

/// Raw sensor-frame measurement: slant range, azimuth and barometric height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarSlant {
    /// Slant range ρ in meters
    pub range: Meter,
    /// Azimuth θ in degrees, clockwise from north
    pub azimuth: Degree,
    /// Measured height H in meters
    pub height: Meter,
}

/// One surveillance radar: identity, geodetic location and precomputed local frame.
///
/// Construction is the only place the rotation/translation matrices are
/// computed; the site is read-only for the remainder of the run.
#[derive(Debug, Clone)]
pub struct RadarSite {
    pub sac: u8,
    pub sic: u8,
    location: GeodeticPosition,
    rotation: Matrix,
    translation: Matrix,
}

impl RadarSite {
    /// Build a site at a known geodetic location, precomputing its local frame.
    pub fn new(sac: u8, sic: u8, location: GeodeticPosition) -> Self {
        RadarSite {
            sac,
            sic,
            location,
            rotation: site_rotation(&location),
            translation: site_translation(&location),
        }
    }

    /// Geodetic location of the antenna.
    pub fn location(&self) -> &GeodeticPosition {
        &self.location
    }

    /// Resolve a slant measurement into a geodetic position.
    ///
    /// The elevation angle ε is recovered from the law-of-cosines relation
    /// between slant range, measured height and site altitude:
    /// `ε = asin((2a(H−h) + H² − h² − ρ²) / (2ρ(a+h)))`, then the measurement
    /// becomes a site-local Cartesian point
    /// `(ρ·sinθ·cosε, ρ·cosθ·cosε, ρ·sinε)` which
    /// [`cartesian_to_geodetic`](RadarSite::cartesian_to_geodetic) resolves.
    pub fn slant_to_geodetic(&self, slant: &RadarSlant) -> Result<GeodeticPosition, MinsepError> {
        let rho = slant.range;
        let theta = slant.azimuth.to_radians();
        let measured = slant.height;
        let site_alt = self.location.altitude;

        let elevation = ((2.0 * EARTH_MAJOR_AXIS * (measured - site_alt) + measured * measured
            - site_alt * site_alt
            - rho * rho)
            / (2.0 * rho * (EARTH_MAJOR_AXIS + site_alt)))
            .asin();

        let local = LocalCartesian {
            x: rho * theta.sin() * elevation.cos(),
            y: rho * theta.cos() * elevation.cos(),
            z: rho * elevation.sin(),
        };

        self.cartesian_to_geodetic(&local)
    }

    /// Resolve a site-local Cartesian point into a geodetic position.
    ///
    /// The point is lifted to ECEF via `transpose(rotation)·local + translation`
    /// and handed to the iterative ECEF → geodetic solver. The matrix shapes
    /// are fixed at construction, so a dimension error here indicates a logic
    /// bug and is propagated rather than handled.
    pub fn cartesian_to_geodetic(
        &self,
        local: &LocalCartesian,
    ) -> Result<GeodeticPosition, MinsepError> {
        let input = Matrix::from([local.x, local.y, local.z]);
        let ecef = self
            .rotation
            .transpose()
            .multiply(&input)?
            .add(&self.translation)?;

        Ok(geocentric_to_geodetic(&GeocentricPosition {
            x: ecef.at(0, 0),
            y: ecef.at(1, 0),
            z: ecef.at(2, 0),
        }))
    }
}

/// Lookup table from SAC/SIC identifier pairs to radar locations.
///
/// The default catalog contains the single site the recorded data comes from;
/// more sites can be registered without code changes.
#[derive(Debug, Clone)]
pub struct SiteCatalog {
    sites: HashMap<(u8, u8), GeodeticPosition, RandomState>,
}

impl Default for SiteCatalog {
    fn default() -> Self {
        let mut catalog = SiteCatalog {
            sites: HashMap::default(),
        };
        // LEBL terminal-area radar (SAC 0x14, SIC 0x81), antenna at 2.007 m
        // above a 25.25 m site elevation.
        catalog.register(
            0x14,
            0x81,
            GeodeticPosition::new(41.3007023, 2.1020588, 2.007 + 25.25),
        );
        catalog
    }
}

impl SiteCatalog {
    /// Register (or replace) the location of a site identifier pair.
    pub fn register(&mut self, sac: u8, sic: u8, location: GeodeticPosition) {
        self.sites.insert((sac, sic), location);
    }

    /// Resolve an identifier pair into a fully-constructed [`RadarSite`].
    ///
    /// Return
    /// ----------
    /// * The site with its local frame precomputed, or
    ///   [`MinsepError::UnknownSite`] if the pair is not in the catalog.
    pub fn resolve(&self, sac: u8, sic: u8) -> Result<RadarSite, MinsepError> {
        let location = self
            .sites
            .get(&(sac, sic))
            .ok_or(MinsepError::UnknownSite { sac, sic })?;
        Ok(RadarSite::new(sac, sic, *location))
    }
}
