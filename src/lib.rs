//! # minsep
//!
//! Batch analysis of radar-track recordings of departing aircraft: estimates
//! the minimum horizontal separation between temporally-adjacent departures
//! from a single airport and correlates it with flight-plan metadata (wake
//! category, aircraft class, departure-route group).
//!
//! The numerical core converts surveillance positions — geodetic or
//! radar-slant — into a common local stereographic plane
//! ([`geodesy`], [`radar`], [`projection`]) and computes time-aligned
//! inter-aircraft distances in that plane ([`separation`]). Around it sit the
//! readers for the recorded tracks and the classification tables ([`tracks`],
//! [`tables`]) and the pairing/aggregation stage ([`analysis`]) that produces
//! the JSON dataset consumed by the external plotting step.
//!
//! The pipeline runs once over static files to completion; nothing is
//! incremental or real-time.

pub mod analysis;
pub mod constants;
pub mod geodesy;
pub mod matrix;
pub mod minsep_errors;
pub mod projection;
pub mod radar;
pub mod separation;
pub mod tables;
pub mod tracks;

pub use analysis::{analyze_departures, AnalysisReport, FlightSummary, PairResult};
pub use geodesy::{GeocentricPosition, GeodeticPosition, LocalCartesian};
pub use matrix::Matrix;
pub use minsep_errors::MinsepError;
pub use projection::{ProjectionFrame, StereographicPosition};
pub use radar::{RadarSite, RadarSlant, SiteCatalog};
pub use separation::{TrackPoint, Trajectory};
pub use tracks::TrackSet;
