//! cf-import - Cloudflare to OpenTofu state importer
//!
//! Looks up pre-existing Cloudflare resources by name and imports the ones
//! missing from OpenTofu state, so a declarative configuration can take them over.

pub mod cli;
pub mod config;
pub mod error;
pub mod importer;
pub mod output;
pub mod providers;
pub mod resource;
pub mod terraform;

pub use config::{ConfigError, ImportConfig};
pub use error::ImportError;
pub use importer::{Importer, ResolvedIds};
pub use providers::ResourceLookup;
pub use providers::cloudflare::{CloudflareClient, CloudflareError};
pub use resource::{ImportOutcome, ImportReport, ImportTarget};
pub use terraform::{CommandOutput, CommandRunner, StateBackend, TerraformError, TofuRunner};
