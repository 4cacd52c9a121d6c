use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unknown region '{name}', available regions: {}", .available.join(", "))]
    UnknownRegion { name: String, available: Vec<String> },

    // Line numbers are 1-based, as reported by the csv reader
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error("Failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
