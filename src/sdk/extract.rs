// Region extraction pass: villes_france.csv -> <region>.temprp.txt
use std::{
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use csv::{Reader, ReaderBuilder};
use tempfile::NamedTempFile;

use super::{
    cities::{looks_like_header, sanitize_name, CityRecord},
    config::ExtractConfig,
    encoder::{GeoAddEncoder, RallyingPoint},
    error::ExtractError,
    regions::{Region, RegionTable},
};

/// Counters for one pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractReport {
    pub rows_read: u64,
    pub written: u64,
    pub rejected: u64,
    pub malformed: u64,
    pub headers_skipped: u64,
}

#[derive(Debug, Clone)]
pub struct ExtractSummary {
    pub region: Region,
    pub output_path: PathBuf,
    pub report: ExtractReport,
}

/// Selects a city and derives its rallying point.
/// The point is returned even when the city is rejected.
pub fn is_valid(city: &CityRecord, max_people: u64, region: &Region) -> (bool, RallyingPoint) {
    let point = RallyingPoint {
        latitude: city.latitude,
        longitude: city.longitude,
        name: sanitize_name(&city.name),
    };
    let valid = city.population <= max_people && region.contains(&city.department);
    (valid, point)
}

/// Headerless and flexible: rows of any length reach the parser, which reports short ones.
pub fn csv_reader<R: Read>(input: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
}

/// Runs through the input and writes one command per valid city, in input order.
pub fn collect_cities<R: Read, W: Write>(
    reader: &mut Reader<R>,
    out: &mut W,
    max_people: u64,
    region: &Region,
    strict: bool,
) -> Result<ExtractReport, ExtractError> {
    let encoder = GeoAddEncoder;
    let mut report = ExtractReport::default();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        report.rows_read += 1;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 1);

        let city = match CityRecord::from_record(&record, line) {
            Ok(city) => city,
            Err(_) if index == 0 && looks_like_header(&record) => {
                log::info!("Skipping header row at line {}", line);
                report.headers_skipped += 1;
                continue;
            }
            Err(err) if strict => return Err(err),
            Err(err) => {
                log::warn!("{}, skipping", err);
                report.malformed += 1;
                continue;
            }
        };

        let (valid, point) = is_valid(&city, max_people, region);
        if valid {
            log::debug!(
                "[RALLYING POINT] {} ({}, pop {})",
                point.name,
                city.department,
                city.population
            );
            encoder.write(out, &point).map_err(ExtractError::Write)?;
            report.written += 1;
        } else {
            report.rejected += 1;
        }
    }

    Ok(report)
}

/// Extracts the rallying points of `region_name` into `<output_dir>/<region_name>.temprp.txt`.
///
/// The region is resolved before any file is touched, and the output only appears once the whole
/// input has been processed, so a failed run leaves no output file behind.
pub fn run(region_name: &str, config: &ExtractConfig) -> Result<ExtractSummary, ExtractError> {
    let region = RegionTable.find(region_name)?;

    let input = File::open(&config.input_path)
        .map_err(|e| ExtractError::io(&config.input_path, e))?;
    let mut reader = csv_reader(input);

    let output_path = config.output_path(region.name());
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| ExtractError::io(&config.output_dir, e))?;
    let staging = NamedTempFile::new_in(&config.output_dir)
        .map_err(|e| ExtractError::io(&config.output_dir, e))?;

    log::info!(
        "Extracting cities of {} with at most {} inhabitants from {}",
        region,
        config.max_people,
        config.input_path.display()
    );

    let mut out = BufWriter::new(staging);
    let report = collect_cities(&mut reader, &mut out, config.max_people, &region, config.strict)?;

    let staging = out
        .into_inner()
        .map_err(|e| ExtractError::Write(e.into_error()))?;
    make_shareable(staging.path())?;
    staging
        .persist(&output_path)
        .map_err(|e| ExtractError::io(&output_path, e.error))?;

    Ok(ExtractSummary {
        region,
        output_path,
        report,
    })
}

/// Temp files are created owner-only; the published output is world-readable like a plain create.
#[cfg(unix)]
fn make_shareable(path: &Path) -> Result<(), ExtractError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
        .map_err(|e| ExtractError::io(path, e))
}

#[cfg(not(unix))]
fn make_shareable(_path: &Path) -> Result<(), ExtractError> {
    Ok(())
}
