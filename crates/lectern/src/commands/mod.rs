//! CLI command implementations.

pub(crate) mod active;
pub(crate) mod check;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use lectern_config::{CliSettings, Config};
use lectern_nav::{BuildOptions, NavBuild, load_navigation};
use lectern_pages::FsContent;

use crate::error::CliError;

pub(crate) use active::ActiveArgs;
pub(crate) use check::CheckArgs;
pub(crate) use tree::TreeArgs;

/// Options shared by every command that loads navigation.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover lectern.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long, env = "LECTERN_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Ordering document filename inside the source directory (overrides config).
    #[arg(long)]
    menu_file: Option<String>,

    /// Root title when the site has no home page (overrides config).
    #[arg(long)]
    home_title: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SourceArgs {
    /// Load configuration and build navigation from the content directory.
    fn load(self) -> Result<NavBuild, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            menu_file: self.menu_file,
            home_title: self.home_title,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        tracing::info!(
            source_dir = %config.content_resolved.source_dir.display(),
            menu = %config.content_resolved.menu_path().display(),
            "Loading navigation"
        );

        let content = FsContent::with_menu_file(
            config.content_resolved.source_dir.clone(),
            &config.content_resolved.menu_file,
        );
        let options = BuildOptions {
            home_title: config.navigation.home_title,
        };
        Ok(load_navigation(&content, &content, &options)?)
    }
}
