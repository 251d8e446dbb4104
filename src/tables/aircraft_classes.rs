//! Aircraft classification table.
//!
//! Column-oriented CSV: the first row holds the class names, each following
//! row one ICAO type designator per column (columns may end early).

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use ahash::RandomState;
use camino::Utf8Path;

use crate::minsep_errors::MinsepError;

/// One performance class and the type designators belonging to it.
#[derive(Debug, Clone)]
pub struct AircraftClass {
    pub name: String,
    pub types: HashSet<String, RandomState>,
}

/// Read the classification table.
pub fn read_aircraft_classes(path: &Utf8Path) -> Result<Vec<AircraftClass>, MinsepError> {
    let file = File::open(path)?;
    read_aircraft_classes_from(file)
}

/// Same as [`read_aircraft_classes`] over any reader, used by the tests.
pub fn read_aircraft_classes_from<R: Read>(input: R) -> Result<Vec<AircraftClass>, MinsepError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut classes: Vec<AircraftClass> = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        for (col, cell) in record.iter().enumerate() {
            let cell = cell.trim();
            if row == 0 {
                classes.push(AircraftClass {
                    name: cell.to_string(),
                    types: HashSet::default(),
                });
            } else if !cell.is_empty() {
                if let Some(class) = classes.get_mut(col) {
                    class.types.insert(cell.to_string());
                }
            }
        }
    }

    Ok(classes)
}

/// Class name of an aircraft type, by linear scan over the small table.
pub fn class_of<'a>(classes: &'a [AircraftClass], aircraft_type: &str) -> Option<&'a str> {
    classes
        .iter()
        .find(|class| class.types.contains(aircraft_type))
        .map(|class| class.name.as_str())
}
