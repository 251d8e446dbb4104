//! # Classification tables
//!
//! Readers for the small lookup tables the analysis correlates against:
//! the flight-plan departure list, the aircraft classification table and the
//! SID-group tables. All are semicolon-delimited CSV exports of the source
//! spreadsheets.
//!
//! These tables stay in the tens of entries, so tagging a departure with its
//! class or route group is a plain linear scan over them.

pub mod aircraft_classes;
pub mod flight_plans;
pub mod sid_groups;

pub use aircraft_classes::{class_of, read_aircraft_classes, AircraftClass};
pub use flight_plans::{read_flight_plans, FlightPlan, WakeCategory};
pub use sid_groups::{all_sids, group_of, read_sid_groups, SidGroup};
