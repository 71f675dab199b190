use super::{CommandRunner, TerraformError};

/// Printed on stderr by `state list` when the backend holds no state yet.
// NOTE: Substring match on CLI output; re-check when upgrading tofu.
const NO_STATE_MARKER: &str = "No state file was found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Imported,
    AlreadyPresent,
}

/// Drives the state binary: init, membership checks and imports.
#[derive(Debug)]
pub struct StateBackend<R> {
    runner: R,
}

impl<R: CommandRunner> StateBackend<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn init(&self) -> Result<(), TerraformError> {
        let output = self.runner.run(&["init", "-input=false"]).await?;
        if !output.success() {
            return Err(TerraformError::InitFailed(non_empty_or(
                &output.stderr,
                "Failed to initialize terraform",
            )));
        }

        tracing::info!("state backend initialized");
        Ok(())
    }

    /// Lists every address in state. A missing state file is an empty list.
    pub async fn list(&self) -> Result<Vec<String>, TerraformError> {
        let output = self.runner.run(&["state", "list"]).await?;

        if !output.success() {
            if output.stderr.contains(NO_STATE_MARKER) {
                tracing::debug!("no state file yet, treating state as empty");
                return Ok(Vec::new());
            }
            return Err(TerraformError::StateListFailed(non_empty_or(
                &output.stderr,
                "Failed to list terraform state",
            )));
        }

        Ok(output.stdout.lines().map(str::to_string).collect())
    }

    pub async fn has(&self, address: &str) -> Result<bool, TerraformError> {
        let addresses = self.list().await?;
        Ok(addresses.iter().any(|listed| listed == address))
    }

    pub async fn import(&self, address: &str, import_id: &str) -> Result<(), TerraformError> {
        tracing::info!(address, import_id, "importing resource");

        let output = self.runner.run(&["import", address, import_id]).await?;
        if !output.success() {
            return Err(TerraformError::ImportFailed {
                address: address.to_string(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(())
    }

    pub async fn import_if_missing(
        &self,
        address: &str,
        import_id: &str,
    ) -> Result<ImportStatus, TerraformError> {
        if self.has(address).await? {
            tracing::debug!(address, "already in state");
            return Ok(ImportStatus::AlreadyPresent);
        }

        self.import(address, import_id).await?;
        Ok(ImportStatus::Imported)
    }
}

fn non_empty_or(stderr: &str, fallback: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
