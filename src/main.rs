use anyhow::Context;
use clap::Parser;
use rallying_points::{
    run,
    sdk::{config::ExtractConfig, util::log::init_logging},
    RegionTable,
};
use std::path::PathBuf;

/// Generates GEOADD commands registering the small cities of a French region as rallying points
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The region key (e.g., "bretagne"), see --list-regions
    #[arg(required_unless_present = "list_regions")]
    region: Option<String>,

    /// [Optional] Input CSV of French cities [env: RP_INPUT_PATH, default: ./villes_france.csv]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// [Optional] Maximum population of a selected city [env: RP_MAX_PEOPLE, default: 50000]
    #[arg(short, long)]
    max_people: Option<u64>,

    /// [Optional] Directory receiving <region>.temprp.txt [env: RP_OUTPUT_DIR, default: .]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Abort on the first malformed row instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Print the available regions and their departments, then exit
    #[arg(long)]
    list_regions: bool,

    /// Log every selected city
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    // --- 1. Argument Parsing with Clap ---
    // Parsed before the logger so that -v can pick the level
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_logging(cli.verbose);

    if cli.list_regions {
        for region in RegionTable.iter() {
            println!("{}", region);
        }
        return Ok(());
    }

    // --- 2. Configuration: defaults, then RP_* variables, then flags ---
    let mut config = ExtractConfig::from_env()?;
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(max_people) = cli.max_people {
        config.max_people = max_people;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    config.strict = cli.strict;

    // --- 3. Execute SDK Logic ---
    // `required_unless_present` guarantees a region once --list-regions is ruled out
    let region_name = cli.region.unwrap_or_default();
    let summary = run(&region_name, &config)
        .with_context(|| format!("Rallying point extraction failed for '{}'", region_name))?;

    // --- 4. Output Results ---
    let report = summary.report;
    log::info!(
        "Read {} rows: {} rallying points, {} rejected, {} malformed, {} header",
        report.rows_read,
        report.written,
        report.rejected,
        report.malformed,
        report.headers_skipped
    );
    log::info!("Commands written to {}", summary.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn missing_region_is_a_usage_error() {
        let err = Cli::try_parse_from(["rallying-points"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn list_regions_needs_no_region() {
        let cli = Cli::try_parse_from(["rallying-points", "--list-regions"]).unwrap();
        assert!(cli.list_regions);
        assert_eq!(cli.region, None);
    }

    #[test]
    fn flags_are_optional_overrides() {
        let cli = Cli::try_parse_from(["rallying-points", "corse"]).unwrap();
        assert_eq!(cli.region.as_deref(), Some("corse"));
        assert_eq!(cli.max_people, None);
        assert!(!cli.strict);

        let cli = Cli::try_parse_from([
            "rallying-points",
            "bretagne",
            "-m",
            "1200",
            "-i",
            "villes.csv",
            "-o",
            "out",
            "--strict",
        ])
        .unwrap();
        assert_eq!(cli.max_people, Some(1200));
        assert_eq!(cli.input, Some(PathBuf::from("villes.csv")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(cli.strict);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
