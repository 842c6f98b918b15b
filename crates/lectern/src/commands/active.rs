//! `lectern active` command implementation.

use std::process::ExitCode;

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the active command.
#[derive(Args)]
pub(crate) struct ActiveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Route of the current page, e.g. `/trinity/the-son`.
    route: String,
}

impl ActiveArgs {
    /// Execute the active command.
    ///
    /// Prints the breadcrumb trail and the active node. Exits with status 1
    /// when no node is active for the route.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the content cannot be read.
    pub(crate) fn execute(self) -> Result<ExitCode, CliError> {
        let output = Output::new();
        let route = self.route;
        let build = self.source.load()?;
        let tree = &build.tree;

        let Some(active) = tree.active_node(&route).and_then(|id| tree.node(id)) else {
            output.warning(&format!("No active node for {route}"));
            return Ok(ExitCode::FAILURE);
        };

        for crumb in tree.breadcrumbs(&route) {
            output.line(&format!("{} {}", crumb.title, output.dim(&crumb.path)));
        }
        output.highlight(&format!("{} {}", active.title, active.path));
        output.info(&format!("node id: {}", active.id.index()));
        Ok(ExitCode::SUCCESS)
    }
}
