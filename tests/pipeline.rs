//! Full-pipeline test over the CSV fixtures: tables + tracks in, JSON-shaped
//! report out.

use camino::Utf8Path;

use minsep::analysis::analyze_departures;
use minsep::projection::ProjectionFrame;
use minsep::radar::SiteCatalog;
use minsep::tables::{
    all_sids, read_aircraft_classes, read_flight_plans, read_sid_groups, WakeCategory,
};
use minsep::tracks::{read_tracks, retain_callsigns};

#[test]
fn fixtures_produce_one_comparable_pair() {
    let site = SiteCatalog::default().resolve(0x14, 0x81).unwrap();
    let frame = ProjectionFrame::new(*site.location());

    let sid_groups = read_sid_groups(Utf8Path::new("tests/data/sid_groups.csv")).unwrap();
    let classes = read_aircraft_classes(Utf8Path::new("tests/data/classes.csv")).unwrap();
    let flight_plans = read_flight_plans(
        Utf8Path::new("tests/data/flight_plans.csv"),
        &all_sids(&sid_groups),
    )
    .unwrap();

    // The LEBL-02 row is dropped; the three analyzed-runway departures remain.
    assert_eq!(flight_plans.len(), 3);
    assert_eq!(flight_plans[1].sid, "MOPAS");

    let mut tracks = read_tracks(Utf8Path::new("tests/data/tracks.csv")).unwrap();
    assert_eq!(tracks.len(), 4);
    retain_callsigns(&mut tracks, |callsign| {
        flight_plans.iter().any(|plan| plan.callsign == callsign)
    });
    // BAW9999 never filed a departure and is dropped.
    assert_eq!(tracks.len(), 3);

    let report = analyze_departures(&frame, &flight_plans, &tracks, &classes, &sid_groups).unwrap();

    // VLG1234/RYR5678 overlap in time; RYR5678/EZY9012 do not.
    assert_eq!(report.results.len(), 1);
    let pair = &report.results[0];

    assert_eq!(pair.first.callsign, "VLG1234");
    assert_eq!(pair.first.company, "VLG");
    assert_eq!(pair.first.wake, WakeCategory::Medium);
    assert_eq!(pair.first.class, "Class I");
    assert_eq!(pair.first.sid_group, "West");

    assert_eq!(pair.second.callsign, "RYR5678");
    assert_eq!(pair.second.class, "Class I");
    assert_eq!(pair.second.sid_group, "Coast");

    // The two tracks run parallel, 0.05° of latitude (≈ 3 NM) apart.
    assert!(
        (pair.min_distance - 3.0).abs() < 0.05,
        "min distance = {}",
        pair.min_distance
    );
    assert!((pair.separation - 3.0).abs() < 0.05);
    assert!(pair.min_distance <= pair.separation);
}

#[test]
fn report_json_has_the_published_shape() {
    let site = SiteCatalog::default().resolve(0x14, 0x81).unwrap();
    let frame = ProjectionFrame::new(*site.location());

    let sid_groups = read_sid_groups(Utf8Path::new("tests/data/sid_groups.csv")).unwrap();
    let classes = read_aircraft_classes(Utf8Path::new("tests/data/classes.csv")).unwrap();
    let flight_plans = read_flight_plans(
        Utf8Path::new("tests/data/flight_plans.csv"),
        &all_sids(&sid_groups),
    )
    .unwrap();
    let tracks = read_tracks(Utf8Path::new("tests/data/tracks.csv")).unwrap();

    let report = analyze_departures(&frame, &flight_plans, &tracks, &classes, &sid_groups).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    let results = value["Results"].as_array().unwrap();
    assert!(!results.is_empty());
    for entry in results {
        for side in ["First", "Second"] {
            for key in ["Callsign", "Company", "Wake", "Class", "SidGroup"] {
                assert!(
                    entry[side][key].is_string(),
                    "missing {side}.{key} in {entry}"
                );
            }
        }
        assert!(entry["MinDistance"].is_f64());
        assert!(entry["Separation"].is_f64());
    }
}
