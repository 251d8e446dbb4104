//! # Constants and type definitions for minsep
//!
//! This module centralizes the **geodetic constants**, **conversion factors**, and **common type
//! definitions** used throughout the `minsep` library.
//!
//! ## Overview
//!
//! - WGS84 ellipsoid parameters
//! - Unit conversions (meters ↔ nautical miles)
//! - Tolerances of the iterative geodetic solver and the trajectory aligner
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the coordinate converters,
//! the stereographic projector and the separation analysis.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// WGS84 semi-major axis (equatorial radius) in meters
pub const EARTH_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared
pub const ECCENTRICITY_SQUARED: f64 = 0.00669437999013;

/// Meters in one nautical mile
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Algorithm bounds
// -------------------------------------------------------------------------------------------------

/// Convergence threshold of the ECEF → geodetic fixed-point iteration, in radians of latitude
pub const GEODETIC_CONVERGENCE: f64 = 1e-8;

/// Hard cap on the ECEF → geodetic iteration count.
///
/// Reaching the cap is not an error: the best available estimate is returned. The cap
/// guarantees termination on degenerate input such as points on the polar axis.
pub const MAX_GEODETIC_ITERATIONS: usize = 50;

/// Maximum timestamp difference, in seconds, for two surveillance reports to be
/// considered time-aligned by the trajectory aligner
pub const COORDINATION_TOLERANCE: f64 = 2.0;

/// Inter-report gap, in seconds, above which a callsign's track is considered to span
/// two different flights and is truncated at ingestion
pub const FLIGHT_GAP_LIMIT: f64 = 3600.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Distance in nautical miles
pub type NauticalMile = f64;
/// Time of day or duration in seconds
pub type Seconds = f64;
