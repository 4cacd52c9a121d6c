use std::{env, path::PathBuf};

use super::error::ExtractError;

pub const DEFAULT_INPUT_PATH: &str = "./villes_france.csv";
pub const DEFAULT_MAX_PEOPLE: u64 = 50_000;
pub const OUTPUT_SUFFIX: &str = ".temprp.txt";

pub const INPUT_PATH_VAR: &str = "RP_INPUT_PATH";
pub const MAX_PEOPLE_VAR: &str = "RP_MAX_PEOPLE";
pub const OUTPUT_DIR_VAR: &str = "RP_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub max_people: u64,
    /// Abort on the first malformed row instead of skipping it.
    pub strict: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from("."),
            max_people: DEFAULT_MAX_PEOPLE,
            strict: false,
        }
    }
}

impl ExtractConfig {
    /// Defaults overridden by `RP_*` variables.
    /// Call `dotenvy::dotenv()` first to honor a `.env` file.
    pub fn from_env() -> Result<Self, ExtractError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExtractError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(INPUT_PATH_VAR) {
            config.input_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(OUTPUT_DIR_VAR) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(MAX_PEOPLE_VAR) {
            config.max_people = raw.trim().parse().map_err(|e| {
                ExtractError::Config(format!(
                    "{}={:?} is not a valid count: {}",
                    MAX_PEOPLE_VAR, raw, e
                ))
            })?;
        }

        Ok(config)
    }

    /// `<output_dir>/<region>.temprp.txt`
    pub fn output_path(&self, region_name: &str) -> PathBuf {
        self.output_dir.join(format!("{}{}", region_name, OUTPUT_SUFFIX))
    }
}
