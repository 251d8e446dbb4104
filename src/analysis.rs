//! # Departure-pair separation analysis
//!
//! Walks the departures in takeoff order, pairs every departure with the next
//! one, and reduces each pair to its separation statistics: the minimum
//! projected distance over the time-aligned samples and the distance at the
//! first aligned sample. Pairs whose trajectories never coexist in time
//! within the coordination tolerance are skipped, not reported as zero.
//!
//! The result is an explicit, ordered sequence of per-pair records — no
//! accumulation in shared state — serialized to a single JSON document with a
//! top-level `Results` array for the external plotting step.

use itertools::Itertools;
use log::{debug, info};
use serde::Serialize;

use crate::constants::NauticalMile;
use crate::minsep_errors::MinsepError;
use crate::projection::ProjectionFrame;
use crate::separation::{aligned_distances, separation_stats};
use crate::tables::{class_of, group_of, AircraftClass, FlightPlan, SidGroup, WakeCategory};
use crate::tracks::TrackSet;

/// Placeholder for a class or group the tables do not cover.
const UNCLASSIFIED: &str = "-";

/// Flight-plan metadata of one aircraft of a pair, as serialized in the report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlightSummary {
    #[serde(rename = "Callsign")]
    pub callsign: String,
    /// Three-letter ICAO operator prefix of the callsign
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Wake")]
    pub wake: WakeCategory,
    #[serde(rename = "Class")]
    pub class: String,
    #[serde(rename = "SidGroup")]
    pub sid_group: String,
}

/// Separation record of one consecutive-departure pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PairResult {
    #[serde(rename = "First")]
    pub first: FlightSummary,
    #[serde(rename = "Second")]
    pub second: FlightSummary,
    /// Minimum projected distance over the aligned samples, nautical miles
    #[serde(rename = "MinDistance")]
    pub min_distance: NauticalMile,
    /// Distance at the first aligned sample, nautical miles
    #[serde(rename = "Separation")]
    pub separation: NauticalMile,
}

/// The full analysis output: one record per comparable departure pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisReport {
    #[serde(rename = "Results")]
    pub results: Vec<PairResult>,
}

/// Run the separation analysis over all consecutive departures.
///
/// Departures are sorted by time of departure and paired with their immediate
/// successor. A pair enters the report only when both callsigns have a
/// recorded trajectory **and** the trajectories overlap in time within the
/// coordination tolerance; everything else is skipped with a log line.
///
/// Arguments
/// -----------------
/// * `frame`: projection frame all distances are measured in.
/// * `flight_plans`: departure table (any order; sorted internally).
/// * `tracks`: recorded trajectories keyed by callsign.
/// * `classes`: aircraft classification table.
/// * `groups`: departure-route group table.
///
/// Return
/// ----------
/// * The ordered per-pair records, ready for JSON serialization.
pub fn analyze_departures(
    frame: &ProjectionFrame,
    flight_plans: &[FlightPlan],
    tracks: &TrackSet,
    classes: &[AircraftClass],
    groups: &[SidGroup],
) -> Result<AnalysisReport, MinsepError> {
    let ordered: Vec<&FlightPlan> = flight_plans
        .iter()
        .sorted_by(|a, b| a.time_of_departure.total_cmp(&b.time_of_departure))
        .collect();

    let mut results = Vec::new();
    let mut skipped = 0usize;

    for (first, second) in ordered.iter().tuple_windows() {
        let (Some(track1), Some(track2)) =
            (tracks.get(&first.callsign), tracks.get(&second.callsign))
        else {
            debug!(
                "no trajectory for pair {} / {}",
                first.callsign, second.callsign
            );
            skipped += 1;
            continue;
        };

        let distances = aligned_distances(frame, track1, track2)?;
        let Some(stats) = separation_stats(&distances) else {
            debug!(
                "no temporal overlap for pair {} / {}",
                first.callsign, second.callsign
            );
            skipped += 1;
            continue;
        };

        results.push(PairResult {
            first: summarize(first, classes, groups),
            second: summarize(second, classes, groups),
            min_distance: stats.minimum,
            separation: stats.initial,
        });
    }

    info!(
        "analyzed {} departure pairs ({} skipped)",
        results.len(),
        skipped
    );
    Ok(AnalysisReport { results })
}

/// Tag one departure with its operator prefix, class and route group.
fn summarize(plan: &FlightPlan, classes: &[AircraftClass], groups: &[SidGroup]) -> FlightSummary {
    FlightSummary {
        callsign: plan.callsign.clone(),
        company: operator_prefix(&plan.callsign).to_string(),
        wake: plan.wake,
        class: class_of(classes, &plan.aircraft_type)
            .unwrap_or(UNCLASSIFIED)
            .to_string(),
        sid_group: group_of(groups, &plan.sid)
            .unwrap_or(UNCLASSIFIED)
            .to_string(),
    }
}

/// The three-letter ICAO operator code at the front of an airline callsign.
fn operator_prefix(callsign: &str) -> &str {
    callsign.get(..3).unwrap_or(callsign)
}
