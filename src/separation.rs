//! # Trajectory alignment and separation distances
//!
//! Given two time-ordered trajectories for two different callsigns, this
//! module performs a tolerance-based temporal alignment (a two-pointer merge
//! over the timestamps) and computes the projected horizontal distance, in
//! nautical miles, at every aligned sample.
//!
//! An **empty** output sequence means the two trajectories never temporally
//! coexisted within tolerance — "no comparison possible", never a zero
//! distance. The aligner holds no state across pairs; each pair is processed
//! independently.

use crate::constants::{
    Meter, NauticalMile, Seconds, COORDINATION_TOLERANCE, METERS_PER_NAUTICAL_MILE,
};
use crate::geodesy::GeodeticPosition;
use crate::minsep_errors::MinsepError;
use crate::projection::ProjectionFrame;

/// One surveillance report for one aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    /// Aircraft callsign the report belongs to
    pub callsign: String,
    /// Geodetic position of the report
    pub position: GeodeticPosition,
    /// Report timestamp in seconds since midnight
    pub time: Seconds,
}

/// Time-ordered sequence of reports for a single callsign.
///
/// Non-decreasing timestamps are an invariant the aligner depends on; the
/// track readers sort before anything enters this module.
pub type Trajectory = Vec<TrackPoint>;

/// Separation statistics of one aircraft pair over its aligned samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparationStats {
    /// Minimum projected distance over the aligned sequence, in nautical miles
    pub minimum: NauticalMile,
    /// Distance at the very first aligned sample ("separation at release"),
    /// kept distinct from the minimum
    pub initial: NauticalMile,
}

/// Projected distances at time-aligned samples of two trajectories.
///
/// Uses the fixed [`COORDINATION_TOLERANCE`]; see
/// [`aligned_distances_with_tolerance`] for the underlying algorithm.
pub fn aligned_distances(
    frame: &ProjectionFrame,
    first: &[TrackPoint],
    second: &[TrackPoint],
) -> Result<Vec<NauticalMile>, MinsepError> {
    aligned_distances_with_tolerance(frame, first, second, COORDINATION_TOLERANCE)
}

/// Two-pointer temporal alignment and distance computation.
///
/// Both cursors start at the head of their trajectory. When the current
/// timestamps differ by more than `tolerance`, the cursor holding the earlier
/// report advances and that report is consumed unmatched. When they are within
/// tolerance, both points are projected onto the stereographic plane, the
/// planar distance is emitted in nautical miles, and both cursors advance.
/// The merge stops as soon as either trajectory is exhausted.
///
/// Arguments
/// -----------------
/// * `frame`: the projection frame all positions are measured in.
/// * `first`, `second`: time-ascending report sequences of the two aircraft.
/// * `tolerance`: maximum timestamp difference, in seconds, for two reports
///   to count as simultaneous.
///
/// Return
/// ----------
/// * The distances at every aligned sample, in emission order. An empty
///   vector signals that the trajectories never overlapped in time within
///   tolerance; callers must treat it as "no comparison possible".
pub fn aligned_distances_with_tolerance(
    frame: &ProjectionFrame,
    first: &[TrackPoint],
    second: &[TrackPoint],
    tolerance: Seconds,
) -> Result<Vec<NauticalMile>, MinsepError> {
    let mut distances = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < first.len() && j < second.len() {
        let (p1, p2) = (&first[i], &second[j]);

        if (p1.time - p2.time).abs() > tolerance {
            if p1.time < p2.time {
                i += 1;
            } else {
                j += 1;
            }
            continue;
        }

        i += 1;
        j += 1;

        let proj1 = frame.geocentric_to_stereographic(&p1.position.to_geocentric())?;
        let proj2 = frame.geocentric_to_stereographic(&p2.position.to_geocentric())?;
        let meters: Meter = proj1.distance_to(&proj2);
        distances.push(meters / METERS_PER_NAUTICAL_MILE);
    }

    Ok(distances)
}

/// Reduce an aligned-distance sequence to its separation statistics.
///
/// Returns `None` on an empty sequence — the explicit "no temporal overlap"
/// branch callers are required to take.
pub fn separation_stats(distances: &[NauticalMile]) -> Option<SeparationStats> {
    let initial = *distances.first()?;
    let minimum = distances.iter().copied().fold(f64::INFINITY, f64::min);
    Some(SeparationStats { minimum, initial })
}
