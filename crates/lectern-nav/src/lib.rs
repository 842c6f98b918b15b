//! Navigation tree building for Lectern.
//!
//! This crate provides:
//! - [`build_tree`]: merges the page index with the ordering document
//! - [`NavTree`]: the rooted tree with active-route and ancestor queries
//! - [`NavigationState`]: caller-owned cache with stale-load protection
//! - [`ExpandedNodes`]: which submenus are shown open
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use lectern_nav::{BuildOptions, NavigationState};
//! use lectern_pages::FsContent;
//!
//! let content = FsContent::new(PathBuf::from("content"));
//! let mut state = NavigationState::new();
//! let tree = state.ensure_loaded(&content, &content, &BuildOptions::default())?;
//!
//! for crumb in tree.breadcrumbs("/trinity/the-son") {
//!     println!("{} -> {}", crumb.title, crumb.path);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod expansion;
mod state;
mod tree;

pub use builder::{BuildOptions, NavBuild, UNORDERED, build_tree};
pub use expansion::ExpandedNodes;
pub use state::{LoadTicket, NavError, NavigationState, load_navigation};
pub use tree::{BreadcrumbItem, NavItem, NavNode, NavTree, NodeId, NodeKind, is_home_route};
