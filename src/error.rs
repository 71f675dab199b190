use thiserror::Error;

use crate::config::ConfigError;
use crate::providers::cloudflare::CloudflareError;
use crate::terraform::TerraformError;

/// Every fatal condition of an import run.
///
/// Messages are printed verbatim on stderr, so wrapped errors are transparent.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Terraform(#[from] TerraformError),

    #[error(transparent)]
    Cloudflare(#[from] CloudflareError),

    #[error("Could not find Hyperdrive config '{name}'")]
    HyperdriveNotFound { name: String },
}
