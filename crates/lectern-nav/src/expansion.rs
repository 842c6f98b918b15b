//! Expanded submenu tracking.

use std::collections::HashSet;

use crate::tree::{NavTree, NodeId, is_home_route};

/// Set of submenu nodes currently shown expanded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedNodes {
    expanded: HashSet<NodeId>,
}

impl ExpandedNodes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expand(&mut self, id: NodeId) {
        self.expanded.insert(id);
    }

    pub fn collapse(&mut self, id: NodeId) {
        self.expanded.remove(&id);
    }

    /// Flip a node's state. Returns `true` if it is now expanded.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expand every ancestor of the node active for `route`.
    ///
    /// Navigating home collapses everything. Nodes the user opened by hand
    /// stay open otherwise.
    pub fn follow_route(&mut self, tree: &NavTree, route: &str) {
        if is_home_route(route) {
            self.clear();
            return;
        }
        self.expanded.extend(tree.ancestors(route));
    }
}
