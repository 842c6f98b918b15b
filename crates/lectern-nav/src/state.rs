//! Navigation loading and caching.
//!
//! [`load_navigation`] reads both inputs and builds a tree. A broken or
//! missing ordering document degrades to alphabetical order; only a failing
//! page index is an error.
//!
//! [`NavigationState`] is the caller-owned cache around it. Loads are tagged
//! with a [`LoadTicket`] so a result that arrives after a newer load started
//! is dropped instead of overwriting fresher data.

use std::sync::Arc;
use std::time::Instant;

use lectern_menu::parse_menu;
use lectern_pages::{MenuSource, PageIndex, PageIndexError};

use crate::builder::{BuildOptions, NavBuild, build_tree};
use crate::tree::NavTree;

/// Error returned when navigation cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// The page index could not be read.
    #[error("navigation unavailable: {0}")]
    IndexUnavailable(#[source] PageIndexError),
}

/// Load pages and the ordering document, then build the tree.
///
/// # Errors
///
/// Returns [`NavError::IndexUnavailable`] if the page index fails. Menu
/// failures are recorded in [`NavBuild::warnings`] instead.
pub fn load_navigation(
    index: &dyn PageIndex,
    menu: &dyn MenuSource,
    options: &BuildOptions,
) -> Result<NavBuild, NavError> {
    let start = Instant::now();
    let pages = index.pages().map_err(NavError::IndexUnavailable)?;

    let mut warnings = Vec::new();
    let entries = match menu.menu_document() {
        Ok(Some(text)) => match parse_menu(&text) {
            Ok(parsed) => {
                warnings.extend(parsed.warnings);
                parsed.entries
            }
            Err(e) => {
                let message = format!("{e}; using alphabetical order");
                tracing::warn!("{message}");
                warnings.push(message);
                Vec::new()
            }
        },
        Ok(None) => {
            tracing::debug!("No ordering document, using alphabetical order");
            Vec::new()
        }
        Err(e) => {
            let message = format!("cannot read ordering document: {e}; using alphabetical order");
            tracing::warn!("{message}");
            warnings.push(message);
            Vec::new()
        }
    };

    let mut build = build_tree(&pages, &entries, options);
    warnings.append(&mut build.warnings);
    build.warnings = warnings;

    tracing::info!(
        pages = pages.len(),
        nodes = build.tree.node_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Loaded navigation"
    );

    Ok(build)
}

/// Identifies one load started with [`NavigationState::begin_load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Cached navigation for one session.
///
/// Holds the last successfully built tree. Readers get an `Arc<NavTree>` and
/// keep using it even after the state moves on.
#[derive(Debug, Default)]
pub struct NavigationState {
    tree: Option<Arc<NavTree>>,
    warnings: Vec<String>,
    is_loading: bool,
    generation: u64,
}

impl NavigationState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tree, if one has been loaded.
    #[must_use]
    pub fn tree(&self) -> Option<Arc<NavTree>> {
        self.tree.clone()
    }

    /// Whether a load is in progress.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Warnings from the load that produced the current tree.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Start a load. Any earlier outstanding ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.is_loading = true;
        LoadTicket(self.generation)
    }

    /// Complete a load.
    ///
    /// Returns `false` and changes nothing if `ticket` was superseded by a
    /// later [`begin_load`](Self::begin_load). On error the tree is cleared.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<NavBuild, NavError>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "Ignoring stale navigation load"
            );
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(build) => {
                self.apply(build);
            }
            Err(e) => self.fail(&e),
        }
        true
    }

    /// Return the cached tree, building it first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if the page index cannot be read. The state is
    /// left without a tree.
    pub fn ensure_loaded(
        &mut self,
        index: &dyn PageIndex,
        menu: &dyn MenuSource,
        options: &BuildOptions,
    ) -> Result<Arc<NavTree>, NavError> {
        if let Some(tree) = &self.tree {
            return Ok(Arc::clone(tree));
        }

        self.begin_load();
        let result = load_navigation(index, menu, options);
        self.is_loading = false;
        match result {
            Ok(build) => Ok(self.apply(build)),
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    /// Drop the cached tree so the next [`ensure_loaded`](Self::ensure_loaded)
    /// rebuilds. Outstanding tickets become stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.is_loading = false;
        self.tree = None;
        self.warnings.clear();
    }

    fn apply(&mut self, build: NavBuild) -> Arc<NavTree> {
        let tree = Arc::new(build.tree);
        self.tree = Some(Arc::clone(&tree));
        self.warnings = build.warnings;
        tree
    }

    fn fail(&mut self, error: &NavError) {
        tracing::error!(error = %error, "Navigation load failed");
        self.tree = None;
        self.warnings.clear();
    }
}
