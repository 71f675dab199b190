use std::process::Stdio;

use async_trait::async_trait;

use super::TerraformError;

/// Captured result of one state-binary invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs the state binary with subcommand arguments.
///
/// A nonzero exit is not an error at this level; callers inspect
/// [`CommandOutput`] and decide. Only a failure to start the process is.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[&str]) -> Result<CommandOutput, TerraformError>;
}

/// Invokes `tofu` (or a compatible binary) against a fixed working directory.
#[derive(Debug, Clone)]
pub struct TofuRunner {
    binary: String,
    chdir: String,
}

impl TofuRunner {
    pub fn new(binary: impl Into<String>, chdir: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            chdir: chdir.into(),
        }
    }

    fn full_args(&self, args: &[&str]) -> Vec<String> {
        std::iter::once(format!("-chdir={}", self.chdir))
            .chain(args.iter().map(|a| a.to_string()))
            .collect()
    }
}

#[async_trait]
impl CommandRunner for TofuRunner {
    async fn run(&self, args: &[&str]) -> Result<CommandOutput, TerraformError> {
        let full_args = self.full_args(args);
        tracing::debug!(binary = %self.binary, args = ?full_args, "running state command");

        let output = tokio::process::Command::new(&self.binary)
            .args(&full_args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| TerraformError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(code = ?result.code, "state command finished");
        Ok(result)
    }
}
