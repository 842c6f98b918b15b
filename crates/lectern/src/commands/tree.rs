//! `lectern tree` command implementation.

use std::process::ExitCode;

use clap::Args;
use lectern_nav::{NavTree, NodeId, NodeKind};

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the tree as JSON.
    #[arg(long)]
    json: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the content cannot be read.
    pub(crate) fn execute(self) -> Result<ExitCode, CliError> {
        let output = Output::new();
        let json = self.json;
        let build = self.source.load()?;

        for warning in &build.warnings {
            output.warning(&format!("warning: {warning}"));
        }

        if json {
            output.line(&build.tree.to_json()?);
        } else {
            output.highlight(&build.tree.root().title);
            for line in render_lines(&build.tree) {
                output.line(&line);
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Render the tree below the root as indented text, one node per line.
pub(crate) fn render_lines(tree: &NavTree) -> Vec<String> {
    fn walk(tree: &NavTree, id: NodeId, depth: usize, lines: &mut Vec<String>) {
        for &child in tree.children(id) {
            let Some(node) = tree.node(child) else {
                continue;
            };
            let indent = "  ".repeat(depth);
            let line = match node.kind {
                NodeKind::Primary => format!("{indent}{} ({})", node.title, node.path),
                NodeKind::Alias => format!("{indent}{} -> {}", node.title, node.path),
                NodeKind::External => format!("{indent}{} <{}>", node.title, node.path),
                NodeKind::Header => format!("{indent}[{}]", node.title),
                NodeKind::Separator => format!("{indent}---"),
            };
            lines.push(line);
            walk(tree, child, depth + 1, lines);
        }
    }

    let mut lines = Vec::new();
    walk(tree, NavTree::ROOT, 0, &mut lines);
    lines
}
