use csv::StringRecord;

use super::error::ExtractError;

// Column positions in villes_france.csv
pub const DEPARTMENT_COL: usize = 1;
pub const NAME_COL: usize = 5;
pub const POPULATION_COL: usize = 16;
pub const LATITUDE_COL: usize = 19;
pub const LONGITUDE_COL: usize = 20;
pub const MIN_COLUMNS: usize = LONGITUDE_COL + 1;

/// The fields of a city row this tool cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub department: String,
    pub name: String,
    pub population: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    /// Parses a raw CSV row. `line` is only used to build the error.
    pub fn from_record(record: &StringRecord, line: u64) -> Result<Self, ExtractError> {
        let malformed = |reason: String| ExtractError::MalformedRow { line, reason };

        if record.len() < MIN_COLUMNS {
            return Err(malformed(format!(
                "expected at least {} columns, found {}",
                MIN_COLUMNS,
                record.len()
            )));
        }

        let field = |index: usize| record.get(index).unwrap_or_default();

        let population = field(POPULATION_COL)
            .trim()
            .parse::<u64>()
            .map_err(|e| {
                malformed(format!("invalid population {:?}: {}", field(POPULATION_COL), e))
            })?;
        let latitude = parse_coordinate(field(LATITUDE_COL), "latitude").map_err(malformed)?;
        let longitude =
            parse_coordinate(field(LONGITUDE_COL), "longitude").map_err(malformed)?;

        Ok(CityRecord {
            department: field(DEPARTMENT_COL).to_string(),
            name: field(NAME_COL).to_string(),
            population,
            latitude,
            longitude,
        })
    }
}

fn parse_coordinate(raw: &str, label: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(value) => Err(format!("non-finite {} {}", label, value)),
        Err(e) => Err(format!("invalid {} {:?}: {}", label, raw, e)),
    }
}

/// A header row has a non-numeric population column, e.g. `ville_population_2012`.
/// Signed numbers such as `-5` are bad data, not a header.
pub fn looks_like_header(record: &StringRecord) -> bool {
    record
        .get(POPULATION_COL)
        .map(|value| {
            let value = value.trim();
            !value.is_empty() && value.parse::<i64>().is_err()
        })
        .unwrap_or(false)
}

/// Spaces become underscores and apostrophes are dropped, so the name is a single token.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '\'')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
