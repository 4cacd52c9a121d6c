use std::fmt;

use super::error::ExtractError;

/// Mainland French regions plus Corsica, keyed by their slug.
const REGIONS: &[(&str, &[&str])] = &[
    // Allier (3) rather than Aisne (2), which belongs to hauts-de-france only
    (
        "auvergne-rhone-alpes",
        &["1", "3", "7", "15", "26", "38", "42", "43", "63", "69", "73", "74"],
    ),
    ("bourgogne-franche-comte", &["21", "25", "39", "58", "70", "71", "89", "90"]),
    ("bretagne", &["22", "29", "35", "56"]),
    ("centre-val-de-loire", &["18", "28", "36", "37", "41", "45"]),
    ("corse", &["2A", "2B"]),
    ("grand-est", &["8", "10", "51", "52", "54", "55", "57", "67", "68", "88"]),
    ("hauts-de-france", &["2", "59", "60", "62", "80"]),
    ("ile-de-france", &["75", "77", "78", "91", "92", "93", "94", "95"]),
    ("normandie", &["14", "27", "50", "61", "76"]),
    (
        "nouvelle-aquitaine",
        &["16", "17", "19", "23", "24", "33", "40", "47", "64", "79", "86", "87"],
    ),
    ("occitanie", &["9", "11", "12", "30", "31", "32", "34", "46", "48", "65", "66", "81", "82"]),
    ("pays-de-la-loire", &["44", "49", "53", "72", "85"]),
    ("provence-alpes-cote-dazur", &["4", "5", "6", "13", "83", "84"]),
];

/// A region and the department codes it groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    name: &'static str,
    departments: &'static [&'static str],
}

impl Region {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn departments(&self) -> &'static [&'static str] {
        self.departments
    }

    /// Checks if a department code belongs to this region (e.g., "01" and "1" are both the Ain).
    pub fn contains(&self, code: &str) -> bool {
        let code = canonical_code(code);
        self.departments.iter().any(|dep| canonical_code(dep) == code)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.departments.join(", "))
    }
}

/// Strips surrounding blanks, and leading zeros from purely numeric codes.
fn canonical_code(code: &str) -> &str {
    let code = code.trim();
    if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
        let stripped = code.trim_start_matches('0');
        if stripped.is_empty() {
            "0"
        } else {
            stripped
        }
    } else {
        code
    }
}

/// Read-only view over the built-in region table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionTable;

impl RegionTable {
    pub fn iter(&self) -> impl Iterator<Item = Region> {
        REGIONS.iter().map(|&(name, departments)| Region { name, departments })
    }

    pub fn names(&self) -> Vec<&'static str> {
        REGIONS.iter().map(|(name, _)| *name).collect()
    }

    pub fn get(&self, name: &str) -> Option<Region> {
        self.iter().find(|region| region.name == name)
    }

    /// Like `get`, but the error carries the list of valid keys for the user.
    pub fn find(&self, name: &str) -> Result<Region, ExtractError> {
        self.get(name).ok_or_else(|| ExtractError::UnknownRegion {
            name: name.to_string(),
            available: self.names().into_iter().map(String::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_thirteen_regions() {
        assert_eq!(RegionTable.names().len(), 13);
    }

    #[test]
    fn corse_only_accepts_2a_and_2b() {
        let corse = RegionTable.get("corse").unwrap();
        assert!(corse.contains("2A"));
        assert!(corse.contains("2B"));
        assert!(!corse.contains("2C"));
        assert!(!corse.contains("2"));
    }

    #[test]
    fn numeric_codes_ignore_leading_zeros() {
        let ara = RegionTable.get("auvergne-rhone-alpes").unwrap();
        assert!(ara.contains("01"));
        assert!(ara.contains("1"));
        assert!(ara.contains(" 03 "));
        assert!(!ara.contains("10"));
        assert!(ara.contains("3"));
        assert!(!ara.contains("2"));
    }

    #[test]
    fn every_mainland_department_has_exactly_one_region() {
        for dep in (1..=95).filter(|&d| d != 20) {
            let code = dep.to_string();
            let owners: Vec<_> = RegionTable
                .iter()
                .filter(|r| r.contains(&code))
                .map(|r| r.name())
                .collect();
            assert_eq!(owners.len(), 1, "department {code} owned by {owners:?}");
        }
    }

    #[test]
    fn unknown_region_lists_valid_names() {
        let err = RegionTable.find("atlantis").unwrap_err();
        match &err {
            ExtractError::UnknownRegion { name, available } => {
                assert_eq!(name, "atlantis");
                assert_eq!(available.len(), 13);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("bretagne"));
        assert!(message.contains("provence-alpes-cote-dazur"));
    }
}
