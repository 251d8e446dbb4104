//! # Surveillance track ingestion
//!
//! Reader for the decoded surveillance CSV (one row per plot, semicolon
//! delimited, decimal commas, one header row). Rows carry geodetic latitude,
//! longitude, altitude and a timestamp in the first four columns and the
//! callsign in column 7.
//!
//! The reader groups reports per callsign into a [`TrackSet`], sorts every
//! trajectory by timestamp, and truncates a trajectory at the first
//! inter-report gap larger than [`FLIGHT_GAP_LIMIT`] — a callsign flying
//! twice on the same day must not be stitched into one trajectory. Malformed
//! rows are logged and skipped; they never abort the batch.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

use ahash::RandomState;
use camino::Utf8Path;
use log::{debug, warn};

use crate::constants::FLIGHT_GAP_LIMIT;
use crate::geodesy::GeodeticPosition;
use crate::minsep_errors::MinsepError;
use crate::separation::{TrackPoint, Trajectory};

/// All ingested trajectories, keyed by callsign.
pub type TrackSet = HashMap<String, Trajectory, RandomState>;

/// Column index of the callsign field in the decoded CSV.
const CALLSIGN_COLUMN: usize = 7;

/// Read a decoded surveillance CSV file into a [`TrackSet`].
///
/// Arguments
/// -----------------
/// * `path`: path to the semicolon-delimited CSV with a single header row.
///
/// Return
/// ----------
/// * The per-callsign trajectories, time-sorted and gap-truncated, or an
///   I/O / CSV error if the file itself cannot be read.
pub fn read_tracks(path: &Utf8Path) -> Result<TrackSet, MinsepError> {
    let file = File::open(path)?;
    read_tracks_from(file)
}

/// Same as [`read_tracks`] over any reader, used by the tests.
pub fn read_tracks_from<R: Read>(input: R) -> Result<TrackSet, MinsepError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut tracks = TrackSet::default();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record?;
        match parse_plot(&record) {
            Some(point) => tracks
                .entry(point.callsign.clone())
                .or_default()
                .push(point),
            None => {
                skipped += 1;
                warn!("skipping malformed surveillance row: {record:?}");
            }
        }
    }

    for trajectory in tracks.values_mut() {
        trajectory.sort_by(|a, b| a.time.total_cmp(&b.time));
        truncate_at_flight_gap(trajectory);
    }

    debug!(
        "ingested {} trajectories ({} malformed rows skipped)",
        tracks.len(),
        skipped
    );
    Ok(tracks)
}

/// Keep only trajectories whose callsign satisfies the predicate.
///
/// Used to restrict the track set to callsigns that actually departed from
/// the analyzed airport before pairing begins.
pub fn retain_callsigns<F>(tracks: &mut TrackSet, mut keep: F)
where
    F: FnMut(&str) -> bool,
{
    tracks.retain(|callsign, _| keep(callsign));
}

/// Parse one CSV record into a [`TrackPoint`]. `None` on any malformed field.
fn parse_plot(record: &csv::StringRecord) -> Option<TrackPoint> {
    let latitude = parse_decimal(record.get(0)?)?;
    let longitude = parse_decimal(record.get(1)?)?;
    let altitude = parse_decimal(record.get(2)?)?;
    let time = parse_decimal(record.get(3)?)?;
    let callsign = record.get(CALLSIGN_COLUMN)?.trim();

    if callsign.is_empty() {
        return None;
    }

    Some(TrackPoint {
        callsign: callsign.to_string(),
        position: GeodeticPosition::new(latitude, longitude, altitude),
        time,
    })
}

/// Parse a number that may use a decimal comma.
fn parse_decimal(field: &str) -> Option<f64> {
    field.trim().replacen(',', ".", 1).parse().ok()
}

/// Cut the trajectory at the first inter-report gap above [`FLIGHT_GAP_LIMIT`].
fn truncate_at_flight_gap(trajectory: &mut Trajectory) {
    if let Some(cut) = trajectory
        .windows(2)
        .position(|w| w[1].time - w[0].time > FLIGHT_GAP_LIMIT)
    {
        trajectory.truncate(cut + 1);
    }
}

#[cfg(test)]
mod tracks_test {
    use super::*;

    const HEADER: &str = "LAT;LON;ALT;TIME;A;B;C;CALLSIGN\n";

    #[test]
    fn parses_decimal_commas_and_groups_by_callsign() {
        let csv = format!(
            "{HEADER}\
             41,3050;2,1100;350,5;28800,0;x;x;x;VLG1234\n\
             41,3100;2,1200;400,0;28804,0;x;x;x;VLG1234\n\
             41,3000;2,0900;300,0;28802,0;x;x;x;RYR5678\n"
        );
        let tracks = read_tracks_from(csv.as_bytes()).unwrap();

        assert_eq!(tracks.len(), 2);
        let vlg = &tracks["VLG1234"];
        assert_eq!(vlg.len(), 2);
        assert!((vlg[0].position.latitude - 41.305).abs() < 1e-9);
        assert!((vlg[0].position.longitude - 2.11).abs() < 1e-9);
        assert!((vlg[0].time - 28800.0).abs() < 1e-9);
    }

    #[test]
    fn trajectories_are_sorted_by_time() {
        let csv = format!(
            "{HEADER}\
             41,31;2,11;400;28808;x;x;x;VLG1234\n\
             41,30;2,10;350;28800;x;x;x;VLG1234\n\
             41,32;2,12;450;28804;x;x;x;VLG1234\n"
        );
        let tracks = read_tracks_from(csv.as_bytes()).unwrap();
        let times: Vec<f64> = tracks["VLG1234"].iter().map(|p| p.time).collect();
        assert_eq!(times, vec![28800.0, 28804.0, 28808.0]);
    }

    #[test]
    fn second_flight_of_the_day_is_truncated() {
        let csv = format!(
            "{HEADER}\
             41,30;2,10;350;28800;x;x;x;VLG1234\n\
             41,31;2,11;400;28810;x;x;x;VLG1234\n\
             41,32;2,12;450;55000;x;x;x;VLG1234\n\
             41,33;2,13;500;55010;x;x;x;VLG1234\n"
        );
        let tracks = read_tracks_from(csv.as_bytes()).unwrap();
        assert_eq!(tracks["VLG1234"].len(), 2);
        assert!((tracks["VLG1234"].last().unwrap().time - 28810.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let csv = format!(
            "{HEADER}\
             not-a-number;2,10;350;28800;x;x;x;VLG1234\n\
             41,30;2,10;350;28800;x;x;x;VLG1234\n\
             41,31;2,11;400;28804;x;x;x;\n"
        );
        let tracks = read_tracks_from(csv.as_bytes()).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks["VLG1234"].len(), 1);
    }

    #[test]
    fn retain_drops_unlisted_callsigns() {
        let csv = format!(
            "{HEADER}\
             41,30;2,10;350;28800;x;x;x;VLG1234\n\
             41,31;2,11;400;28804;x;x;x;RYR5678\n"
        );
        let mut tracks = read_tracks_from(csv.as_bytes()).unwrap();
        retain_callsigns(&mut tracks, |cs| cs == "VLG1234");
        assert_eq!(tracks.len(), 1);
        assert!(tracks.contains_key("VLG1234"));
    }
}
