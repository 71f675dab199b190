use clap::Parser;

use crate::config::{DEFAULT_HYPERDRIVE_NAME, DEFAULT_PAGES_PROJECT};
use crate::providers::cloudflare::CLOUDFLARE_API_BASE;

/// Import pre-existing Cloudflare resources into OpenTofu state.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(long, env = "TF_VAR_cloudflare_account_id")]
    pub account_id: Option<String>,

    #[arg(long, env = "TF_VAR_cloudflare_zone_id")]
    pub zone_id: Option<String>,

    #[arg(long, env = "TF_VAR_cloudflare_api_token", hide_env_values = true)]
    pub api_token: Option<String>,

    #[arg(long, env = "TF_IMPORT_PAGES_PROJECT", default_value = DEFAULT_PAGES_PROJECT)]
    pub pages_project: String,

    #[arg(long, env = "TF_IMPORT_FRONTEND_DOMAIN")]
    pub frontend_domain: Option<String>,

    /// Used only when --frontend-domain is unset.
    #[arg(long, env = "TF_VAR_frontend_domain", hide = true)]
    pub frontend_domain_fallback: Option<String>,

    #[arg(long, env = "TF_IMPORT_HYPERDRIVE_NAME", default_value = DEFAULT_HYPERDRIVE_NAME)]
    pub hyperdrive_name: String,

    /// State binary to invoke
    #[arg(long, env = "TF_IMPORT_BINARY", default_value = "tofu")]
    pub tofu_bin: String,

    /// Working directory passed as -chdir
    #[arg(long, env = "TF_IMPORT_CHDIR", default_value = "terraform")]
    pub chdir: String,

    #[arg(long, env = "CLOUDFLARE_API_BASE", default_value = CLOUDFLARE_API_BASE, hide = true)]
    pub api_base: String,

    /// Check state and report what would be imported without importing
    #[arg(long)]
    pub dry_run: bool,
}
