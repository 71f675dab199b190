mod runner;
mod state;

pub use runner::{CommandOutput, CommandRunner, TofuRunner};
pub use state::{ImportStatus, StateBackend};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerraformError {
    #[error("failed to run '{binary}': {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },

    #[error("{0}")]
    InitFailed(String),

    #[error("{0}")]
    StateListFailed(String),

    #[error("import failed for {address}: {stderr}")]
    ImportFailed { address: String, stderr: String },
}
