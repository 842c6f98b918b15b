//! `lectern check` command implementation.

use std::process::ExitCode;

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Exits with status 1 when the ordering document produced warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the content cannot be read.
    pub(crate) fn execute(self) -> Result<ExitCode, CliError> {
        let output = Output::new();
        let build = self.source.load()?;

        if build.warnings.is_empty() {
            output.success(&format!(
                "Navigation OK ({} nodes)",
                build.tree.node_count()
            ));
            return Ok(ExitCode::SUCCESS);
        }

        for warning in &build.warnings {
            output.warning(warning);
        }
        output.info(&format!("{} warning(s)", build.warnings.len()));
        Ok(ExitCode::FAILURE)
    }
}
