//! SID-group tables.
//!
//! Column-oriented CSV, one table per runway: the first row names each group,
//! each following row holds one full procedure name per column (designator
//! suffix included, e.g. `GRAUS1B`). Procedures of a group share the same
//! separation rules; the suffix is stripped so groups are keyed by SID root.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use ahash::RandomState;
use camino::Utf8Path;

use crate::minsep_errors::MinsepError;

/// One departure-route group and the SID roots belonging to it.
#[derive(Debug, Clone)]
pub struct SidGroup {
    pub name: String,
    pub sids: HashSet<String, RandomState>,
}

/// Read one SID-group table.
pub fn read_sid_groups(path: &Utf8Path) -> Result<Vec<SidGroup>, MinsepError> {
    let file = File::open(path)?;
    read_sid_groups_from(file)
}

/// Same as [`read_sid_groups`] over any reader, used by the tests.
pub fn read_sid_groups_from<R: Read>(input: R) -> Result<Vec<SidGroup>, MinsepError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut groups: Vec<SidGroup> = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        for (col, cell) in record.iter().enumerate() {
            let cell = cell.trim();
            if row == 0 {
                groups.push(SidGroup {
                    name: cell.to_string(),
                    sids: HashSet::default(),
                });
            } else if cell.len() > 2 {
                if let Some(group) = groups.get_mut(col) {
                    // Strip the two-character designator suffix (e.g. "1B").
                    group.sids.insert(cell[..cell.len() - 2].to_string());
                }
            }
        }
    }

    Ok(groups)
}

/// Group name of a SID root, by linear scan over the small table.
pub fn group_of<'a>(groups: &'a [SidGroup], sid: &str) -> Option<&'a str> {
    groups
        .iter()
        .find(|group| group.sids.contains(sid))
        .map(|group| group.name.as_str())
}

/// Union of all SID roots across the groups, used by the flight-plan reader
/// to resolve departures without a filed procedure.
pub fn all_sids(groups: &[SidGroup]) -> HashSet<String> {
    groups
        .iter()
        .flat_map(|group| group.sids.iter().cloned())
        .collect()
}

#[cfg(test)]
mod sid_groups_test {
    use super::*;

    const TABLE: &str = "West;Coast\nGRAUS1B;MOPAS2C\nOKABI5D;SENIA1A\nGRAUS2A;\n";

    #[test]
    fn suffixes_are_stripped_per_column() {
        let groups = read_sid_groups_from(TABLE.as_bytes()).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "West");
        // GRAUS appears twice with different designators but is one root.
        assert_eq!(groups[0].sids.len(), 2);
        assert!(groups[0].sids.contains("GRAUS"));
        assert!(groups[0].sids.contains("OKABI"));
        assert!(groups[1].sids.contains("MOPAS"));
        assert!(groups[1].sids.contains("SENIA"));
    }

    #[test]
    fn lookup_and_union() {
        let groups = read_sid_groups_from(TABLE.as_bytes()).unwrap();
        assert_eq!(group_of(&groups, "GRAUS"), Some("West"));
        assert_eq!(group_of(&groups, "SENIA"), Some("Coast"));
        assert_eq!(group_of(&groups, "NOWHERE"), None);

        let union = all_sids(&groups);
        assert_eq!(union.len(), 4);
    }
}
