//! Flight-plan departure table.
//!
//! One row per departure: callsign, time of departure, free-text remarks,
//! aircraft type, wake category, departure procedure and runway. Only the
//! two analyzed runways (24L and 06R) are kept. Each row resolves to a SID:
//! either the departure procedure with its two-character designator suffix
//! stripped, or, when the flight plan carries no procedure, the first word of
//! the remarks found in the known SID set.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use camino::Utf8Path;
use log::debug;
use serde::Serialize;

use crate::constants::Seconds;
use crate::minsep_errors::MinsepError;

/// Wake-turbulence category of a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WakeCategory {
    Light,
    Medium,
    Heavy,
}

impl WakeCategory {
    /// Parse the wake cell; the source tables use Spanish labels, English
    /// ones are accepted as well.
    fn parse(value: &str) -> Result<Self, MinsepError> {
        match value.trim() {
            "Ligera" | "Light" => Ok(WakeCategory::Light),
            "Media" | "Medium" => Ok(WakeCategory::Medium),
            "Pesada" | "Heavy" => Ok(WakeCategory::Heavy),
            other => Err(MinsepError::InvalidRecord(format!(
                "unknown wake category: {other}"
            ))),
        }
    }
}

/// One departure of the flight-plan table.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    pub callsign: String,
    /// Time of departure in seconds since midnight
    pub time_of_departure: Seconds,
    /// ICAO aircraft type designator (e.g. `A320`)
    pub aircraft_type: String,
    pub wake: WakeCategory,
    /// Resolved SID root, designator suffix stripped (e.g. `GRAUS`)
    pub sid: String,
    /// Departure runway (`24L` or `06R`)
    pub runway: String,
}

/// Read the departure table.
///
/// Arguments
/// -----------------
/// * `path`: semicolon-delimited CSV with a header row and columns
///   `callsign;departure_time;remarks;aircraft_type;wake;procedure;runway`.
/// * `known_sids`: union of all SIDs from the route-group tables, used to
///   resolve rows whose procedure cell is empty (`-`).
///
/// Return
/// ----------
/// * The departures of the analyzed runways, in file order. A row whose wake
///   or SID cannot be resolved fails the whole parse with
///   [`MinsepError::InvalidRecord`]; rows for other runways are silently
///   dropped.
pub fn read_flight_plans(
    path: &Utf8Path,
    known_sids: &HashSet<String>,
) -> Result<Vec<FlightPlan>, MinsepError> {
    let file = File::open(path)?;
    read_flight_plans_from(file, known_sids)
}

/// Same as [`read_flight_plans`] over any reader, used by the tests.
pub fn read_flight_plans_from<R: Read>(
    input: R,
    known_sids: &HashSet<String>,
) -> Result<Vec<FlightPlan>, MinsepError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut departures = Vec::new();

    for record in reader.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let callsign = field(0).to_string();
        if callsign.is_empty() {
            continue;
        }

        let runway = match field(6).rsplit('-').next() {
            Some(r @ ("24L" | "06R" | "6R")) => normalize_runway(r),
            _ => continue,
        };

        let time_of_departure = parse_time_of_day(field(1)).ok_or_else(|| {
            MinsepError::InvalidRecord(format!(
                "bad departure time for {callsign}: {}",
                field(1)
            ))
        })?;

        let wake = WakeCategory::parse(field(4))?;
        let sid = resolve_sid(field(5), field(2), known_sids).ok_or_else(|| {
            MinsepError::InvalidRecord(format!("cannot associate a SID to {callsign}"))
        })?;

        departures.push(FlightPlan {
            callsign,
            time_of_departure,
            aircraft_type: field(3).to_string(),
            wake,
            sid,
            runway,
        });
    }

    debug!("parsed {} departures", departures.len());
    Ok(departures)
}

/// Map the two spellings of the east-configuration runway onto one.
fn normalize_runway(runway: &str) -> String {
    if runway == "6R" {
        "06R".to_string()
    } else {
        runway.to_string()
    }
}

/// Parse `HH:MM:SS` into seconds since midnight.
fn parse_time_of_day(value: &str) -> Option<Seconds> {
    let mut parts = value.split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || minutes > 59 || seconds > 59 {
        return None;
    }
    Some(f64::from(hours * 3600 + minutes * 60 + seconds))
}

/// Resolve the SID of a departure.
///
/// A filed procedure like `GRAUS1B` carries a two-character designator suffix
/// that is stripped to its root. When no procedure was filed (`-`), the
/// remarks are scanned for a word — possibly parenthesized — matching the
/// known SID set.
fn resolve_sid(procedure: &str, remarks: &str, known_sids: &HashSet<String>) -> Option<String> {
    if procedure != "-" && !procedure.is_empty() {
        if procedure.len() <= 2 {
            return None;
        }
        return Some(procedure[..procedure.len() - 2].to_string());
    }

    remarks
        .split_whitespace()
        .map(strip_parentheses)
        .find(|word| known_sids.contains(*word))
        .map(str::to_string)
}

/// Extract the content between the outermost parentheses, if any.
fn strip_parentheses(word: &str) -> &str {
    match (word.find('('), word.rfind(')')) {
        (Some(open), Some(close)) if open < close => &word[open + 1..close],
        _ => word,
    }
}

#[cfg(test)]
mod flight_plans_test {
    use super::*;

    const HEADER: &str = "CALLSIGN;TIME;REMARKS;TYPE;WAKE;PROCEDURE;RUNWAY\n";

    fn sids() -> HashSet<String> {
        ["GRAUS", "MOPAS", "OKABI"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parses_a_regular_departure() {
        let csv = format!("{HEADER}VLG1234;08:00:30;-;A320;Media;GRAUS1B;LEBL-24L\n");
        let plans = read_flight_plans_from(csv.as_bytes(), &sids()).unwrap();

        assert_eq!(plans.len(), 1);
        let plan = &plans[0];
        assert_eq!(plan.callsign, "VLG1234");
        assert_eq!(plan.time_of_departure, 28830.0);
        assert_eq!(plan.aircraft_type, "A320");
        assert_eq!(plan.wake, WakeCategory::Medium);
        assert_eq!(plan.sid, "GRAUS");
        assert_eq!(plan.runway, "24L");
    }

    #[test]
    fn sid_falls_back_to_remarks_scan() {
        let csv = format!("{HEADER}RYR5678;09:15:00;CLB VIA (MOPAS) DCT;B738;Media;-;LEBL-06R\n");
        let plans = read_flight_plans_from(csv.as_bytes(), &sids()).unwrap();
        assert_eq!(plans[0].sid, "MOPAS");
        assert_eq!(plans[0].runway, "06R");
    }

    #[test]
    fn unresolvable_sid_is_an_error() {
        let csv = format!("{HEADER}RYR5678;09:15:00;NO ROUTE HERE;B738;Media;-;LEBL-24L\n");
        let err = read_flight_plans_from(csv.as_bytes(), &sids()).unwrap_err();
        assert!(matches!(err, MinsepError::InvalidRecord(_)));
    }

    #[test]
    fn other_runways_are_dropped() {
        let csv = format!(
            "{HEADER}\
             VLG1234;08:00:30;-;A320;Media;GRAUS1B;LEBL-24L\n\
             IBE0001;08:02:00;-;A321;Media;GRAUS1B;LEBL-02\n"
        );
        let plans = read_flight_plans_from(csv.as_bytes(), &sids()).unwrap();
        assert_eq!(plans.len(), 1);
    }

    #[test]
    fn unknown_wake_is_an_error() {
        let csv = format!("{HEADER}VLG1234;08:00:30;-;A320;Gigante;GRAUS1B;LEBL-24L\n");
        assert!(matches!(
            read_flight_plans_from(csv.as_bytes(), &sids()),
            Err(MinsepError::InvalidRecord(_))
        ));
    }

    #[test]
    fn wake_accepts_both_label_sets() {
        assert_eq!(WakeCategory::parse("Ligera").unwrap(), WakeCategory::Light);
        assert_eq!(WakeCategory::parse("Heavy").unwrap(), WakeCategory::Heavy);
    }
}
