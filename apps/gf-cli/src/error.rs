use std::path::PathBuf;

use gf_sim::SimError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid plant config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Simulation failed at step {step}: {source}")]
    Step {
        step: u64,
        #[source]
        source: SimError,
    },

    #[error("Steam backend '{0}' is not compiled in (enable the `coolprop` feature)")]
    BackendUnavailable(&'static str),
}

pub type CliResult<T> = Result<T, CliError>;
