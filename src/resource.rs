use std::fmt;

use crate::config::ImportConfig;

pub const HYPERDRIVE_ADDRESS: &str = "module.api.cloudflare_hyperdrive_config.api_db";
pub const PAGES_PROJECT_ADDRESS: &str = "module.frontend.cloudflare_pages_project.frontend";
pub const PAGES_DOMAIN_ADDRESS: &str = "module.frontend.cloudflare_pages_domain.custom_domain[0]";
pub const CNAME_RECORD_ADDRESS: &str = "module.frontend.cloudflare_record.frontend_cname[0]";

/// A state address paired with the id `tofu import` needs to bind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportTarget {
    pub address: &'static str,
    pub import_id: String,
}

impl ImportTarget {
    pub fn hyperdrive(config: &ImportConfig, hyperdrive_id: &str) -> Self {
        Self {
            address: HYPERDRIVE_ADDRESS,
            import_id: format!("{}/{}", config.account_id, hyperdrive_id),
        }
    }

    pub fn pages_project(config: &ImportConfig) -> Self {
        Self {
            address: PAGES_PROJECT_ADDRESS,
            import_id: format!("{}/{}", config.account_id, config.pages_project),
        }
    }

    // NOTE: The provider imports Pages domains by name, not by the looked-up id.
    pub fn pages_domain(config: &ImportConfig) -> Self {
        Self {
            address: PAGES_DOMAIN_ADDRESS,
            import_id: format!(
                "{}/{}/{}",
                config.account_id, config.pages_project, config.frontend_domain
            ),
        }
    }

    pub fn cname_record(config: &ImportConfig, record_id: &str) -> Self {
        Self {
            address: CNAME_RECORD_ADDRESS,
            import_id: format!("{}/{}", config.zone_id, record_id),
        }
    }
}

/// What happened to one candidate during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported { address: String },
    AlreadyPresent { address: String },
    WouldImport { address: String, import_id: String },
    NotFound { address: String, reason: String },
}

impl ImportOutcome {
    pub fn address(&self) -> &str {
        match self {
            Self::Imported { address }
            | Self::AlreadyPresent { address }
            | Self::WouldImport { address, .. }
            | Self::NotFound { address, .. } => address,
        }
    }

    pub fn is_imported(&self) -> bool {
        matches!(self, Self::Imported { .. })
    }
}

/// Progress line as printed on stdout.
impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imported { address } => write!(f, "imported {}", address),
            Self::AlreadyPresent { address } => write!(f, "skip {}: already in state", address),
            Self::WouldImport { address, import_id } => {
                write!(f, "would import {} as {}", address, import_id)
            }
            Self::NotFound { address, reason } => write!(f, "skip {}: {}", address, reason),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub outcomes: Vec<ImportOutcome>,
}

impl ImportReport {
    pub fn imported_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_imported()).count()
    }
}
