use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::output;
use crate::providers::ResourceLookup;
use crate::resource::{
    CNAME_RECORD_ADDRESS, ImportOutcome, ImportReport, ImportTarget, PAGES_DOMAIN_ADDRESS,
};
use crate::terraform::{CommandRunner, ImportStatus, StateBackend};

/// Ids resolved from the API for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolvedIds {
    pub hyperdrive: Option<String>,
    pub pages_domain: Option<String>,
    pub cname_record: Option<String>,
}

/// Runs init, lookups and the conditional imports, in that order.
///
/// Stops at the first fatal error; nothing after it is attempted.
pub struct Importer<'a, L, R> {
    config: &'a ImportConfig,
    lookup: &'a L,
    state: StateBackend<R>,
    dry_run: bool,
}

impl<'a, L, R> Importer<'a, L, R>
where
    L: ResourceLookup,
    R: CommandRunner,
{
    pub fn new(config: &'a ImportConfig, lookup: &'a L, state: StateBackend<R>) -> Self {
        Self {
            config,
            lookup,
            state,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn state(&self) -> &StateBackend<R> {
        &self.state
    }

    pub async fn run(&self) -> Result<ImportReport, ImportError> {
        self.state.init().await?;

        let ids = self.resolve_ids().await?;
        let hyperdrive_id = ids
            .hyperdrive
            .ok_or_else(|| ImportError::HyperdriveNotFound {
                name: self.config.hyperdrive_name.clone(),
            })?;

        let config = self.config;
        let mut report = ImportReport::default();

        report
            .outcomes
            .push(self.apply(ImportTarget::hyperdrive(config, &hyperdrive_id)).await?);
        report
            .outcomes
            .push(self.apply(ImportTarget::pages_project(config)).await?);

        let domain_outcome = match ids.pages_domain {
            Some(_) => self.apply(ImportTarget::pages_domain(config)).await?,
            None => self.not_found(
                PAGES_DOMAIN_ADDRESS,
                format!("domain '{}' not found", config.frontend_domain),
            ),
        };
        report.outcomes.push(domain_outcome);

        let cname_outcome = match ids.cname_record {
            Some(record_id) => {
                self.apply(ImportTarget::cname_record(config, &record_id))
                    .await?
            }
            None => self.not_found(
                CNAME_RECORD_ADDRESS,
                format!("CNAME '{}' not found", config.frontend_domain),
            ),
        };
        report.outcomes.push(cname_outcome);

        Ok(report)
    }

    pub async fn resolve_ids(&self) -> Result<ResolvedIds, ImportError> {
        let config = self.config;

        let hyperdrive = self
            .lookup
            .hyperdrive_id(&config.account_id, &config.hyperdrive_name)
            .await?;
        let pages_domain = self
            .lookup
            .pages_domain_id(
                &config.account_id,
                &config.pages_project,
                &config.frontend_domain,
            )
            .await?;
        let cname_record = self
            .lookup
            .cname_record_id(&config.zone_id, &config.frontend_domain)
            .await?;

        tracing::info!(
            hyperdrive = hyperdrive.is_some(),
            pages_domain = pages_domain.is_some(),
            cname_record = cname_record.is_some(),
            "lookups complete"
        );

        Ok(ResolvedIds {
            hyperdrive,
            pages_domain,
            cname_record,
        })
    }

    async fn apply(&self, target: ImportTarget) -> Result<ImportOutcome, ImportError> {
        let address = target.address.to_string();

        let outcome = if self.dry_run {
            if self.state.has(target.address).await? {
                ImportOutcome::AlreadyPresent { address }
            } else {
                ImportOutcome::WouldImport {
                    address,
                    import_id: target.import_id,
                }
            }
        } else {
            match self
                .state
                .import_if_missing(target.address, &target.import_id)
                .await?
            {
                ImportStatus::Imported => ImportOutcome::Imported { address },
                ImportStatus::AlreadyPresent => ImportOutcome::AlreadyPresent { address },
            }
        };

        output::print_outcome(&outcome);
        Ok(outcome)
    }

    fn not_found(&self, address: &str, reason: String) -> ImportOutcome {
        tracing::warn!(address, %reason, "resource not found, skipping");
        let outcome = ImportOutcome::NotFound {
            address: address.to_string(),
            reason,
        };
        output::print_outcome(&outcome);
        outcome
    }
}
