use thiserror::Error;

pub const ACCOUNT_ID_ENV: &str = "TF_VAR_cloudflare_account_id";
pub const ZONE_ID_ENV: &str = "TF_VAR_cloudflare_zone_id";
pub const API_TOKEN_ENV: &str = "TF_VAR_cloudflare_api_token";

pub const DEFAULT_PAGES_PROJECT: &str = "lag-meepen-dev-frontend";
pub const DEFAULT_FRONTEND_DOMAIN: &str = "lag.meepen.dev";
pub const DEFAULT_HYPERDRIVE_NAME: &str = "api-workers-hyperdrive";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Everything the importer needs to locate and address the four resources.
#[derive(Clone, PartialEq, Eq)]
pub struct ImportConfig {
    pub account_id: String,
    pub zone_id: String,
    pub api_token: String,
    pub pages_project: String,
    pub frontend_domain: String,
    pub hyperdrive_name: String,
}

impl ImportConfig {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self, ConfigError> {
        let account_id = require(ACCOUNT_ID_ENV, cli.account_id.as_deref())?;
        let zone_id = require(ZONE_ID_ENV, cli.zone_id.as_deref())?;
        let api_token = require(API_TOKEN_ENV, cli.api_token.as_deref())?;

        let frontend_domain = cli
            .frontend_domain
            .clone()
            .or_else(|| cli.frontend_domain_fallback.clone())
            .unwrap_or_else(|| DEFAULT_FRONTEND_DOMAIN.to_string());

        Ok(Self {
            account_id,
            zone_id,
            api_token,
            pages_project: cli.pages_project.clone(),
            frontend_domain,
            hyperdrive_name: cli.hyperdrive_name.clone(),
        })
    }
}

impl std::fmt::Debug for ImportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportConfig")
            .field("account_id", &self.account_id)
            .field("zone_id", &self.zone_id)
            .field("api_token", &"[REDACTED]")
            .field("pages_project", &self.pages_project)
            .field("frontend_domain", &self.frontend_domain)
            .field("hyperdrive_name", &self.hyperdrive_name)
            .finish()
    }
}

/// Blank and whitespace-only values count as missing.
fn require(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::MissingEnv(name))
}
