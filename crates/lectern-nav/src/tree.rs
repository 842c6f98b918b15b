//! Navigation tree.
//!
//! Nodes are stored in a flat `Vec<NavNode>` with parent/children
//! relationships tracked by [`NodeId`] indices. The root is always
//! [`NavTree::ROOT`]. This provides:
//! - O(1) node access by id
//! - O(d) ancestor walks where d is the node depth
//! - O(n) active-route search (trees are a few hundred nodes)
//!
//! A tree is immutable once built; menu changes require a rebuild.

use lectern_menu::normalize_route;
use serde::Serialize;

/// Stable node identifier, unique within one build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the tree's node table.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// A page at its canonical place in the hierarchy. Eligible for highlighting.
    Primary,
    /// Custom-titled shortcut to a page. Never highlighted.
    Alias,
    /// Absolute web link. Never highlighted, never expandable.
    External,
    /// Non-clickable label.
    Header,
    /// Visual divider.
    Separator,
}

impl NodeKind {
    /// Whether the node links somewhere.
    #[must_use]
    pub fn is_link(self) -> bool {
        matches!(self, Self::Primary | Self::Alias | Self::External)
    }
}

/// One navigation node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavNode {
    /// Node identifier.
    pub id: NodeId,
    /// Display title (page title or menu override).
    pub title: String,
    /// Route, external URL, or `#header-<id>` / `#separator-<id>` placeholder.
    pub path: String,
    /// Rank among siblings.
    pub order: u32,
    /// Node kind.
    pub kind: NodeKind,
    /// Description of the originating page.
    pub description: Option<String>,
    /// Keywords of the originating page.
    pub keywords: Vec<String>,
}

/// Serializable view of a node and its subtree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Node identifier.
    pub id: NodeId,
    /// Display title.
    pub title: String,
    /// Link target or placeholder.
    pub path: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Rank among siblings.
    pub order: u32,
    /// Page description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Page keywords.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Child items in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Serialized form of a whole tree.
#[derive(Serialize)]
struct TreeView<'a> {
    title: &'a str,
    path: &'a str,
    items: Vec<NavItem>,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
}

/// Whether a route is the home page.
#[must_use]
pub fn is_home_route(route: &str) -> bool {
    normalize_route(route) == "/"
}

/// Rooted navigation tree.
#[derive(Debug)]
pub struct NavTree {
    nodes: Vec<NavNode>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Option<NodeId>>,
}

impl NavTree {
    /// Identifier of the root node (`/`).
    pub const ROOT: NodeId = NodeId(0);

    /// Assemble a tree from its node table.
    ///
    /// `children` lists must already be in display order.
    pub(crate) fn new(
        nodes: Vec<NavNode>,
        children: Vec<Vec<NodeId>>,
        parents: Vec<Option<NodeId>>,
    ) -> Self {
        debug_assert_eq!(nodes.len(), children.len());
        debug_assert_eq!(nodes.len(), parents.len());
        Self {
            nodes,
            children,
            parents,
        }
    }

    /// The root node. Never rendered as a list item and never active.
    #[must_use]
    pub fn root(&self) -> &NavNode {
        &self.nodes[Self::ROOT.0]
    }

    /// Get a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NavNode> {
        self.nodes.get(id.0)
    }

    /// Children of a node in display order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id.0).map(Vec::as_slice).unwrap_or_default()
    }

    /// Parent of a node. `None` for the root and unknown ids.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.0).copied().flatten()
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &NavNode> {
        self.nodes.iter()
    }

    /// Find the primary node for the current route.
    ///
    /// Aliases never match, and the home route never matches anything.
    /// Depth-first in display order.
    #[must_use]
    pub fn active_node(&self, route: &str) -> Option<NodeId> {
        let route = normalize_route(route);
        if route == "/" {
            return None;
        }

        let mut stack: Vec<NodeId> = self.children(Self::ROOT).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.kind == NodeKind::Primary && node.path == route {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev());
        }
        None
    }

    /// Ancestors of the active node for a route, outermost first.
    ///
    /// Excludes the root and the active node itself. Empty when no node is
    /// active.
    #[must_use]
    pub fn ancestors(&self, route: &str) -> Vec<NodeId> {
        let Some(active) = self.active_node(route) else {
            return Vec::new();
        };

        let mut ancestors = Vec::new();
        let mut current = self.parent(active);
        while let Some(id) = current {
            if id == Self::ROOT {
                break;
            }
            ancestors.push(id);
            current = self.parent(id);
        }
        ancestors.reverse();
        ancestors
    }

    /// Build breadcrumbs for a route.
    ///
    /// Starts with the root, followed by ancestor nodes. The current page is
    /// not included. Unknown routes get the root alone; the home route gets
    /// nothing.
    #[must_use]
    pub fn breadcrumbs(&self, route: &str) -> Vec<BreadcrumbItem> {
        if is_home_route(route) {
            return Vec::new();
        }

        let root = self.root();
        let mut breadcrumbs = vec![BreadcrumbItem {
            title: root.title.clone(),
            path: root.path.clone(),
        }];
        breadcrumbs.extend(self.ancestors(route).into_iter().map(|id| {
            let node = &self.nodes[id.0];
            BreadcrumbItem {
                title: node.title.clone(),
                path: node.path.clone(),
            }
        }));
        breadcrumbs
    }

    /// Serializable items for the root's children.
    #[must_use]
    pub fn to_items(&self) -> Vec<NavItem> {
        self.children(Self::ROOT)
            .iter()
            .map(|&id| self.build_item(id))
            .collect()
    }

    /// Serialize the whole tree as pretty-printed JSON.
    ///
    /// Equal trees serialize to identical bytes.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let root = self.root();
        serde_json::to_string_pretty(&TreeView {
            title: &root.title,
            path: &root.path,
            items: self.to_items(),
        })
    }

    /// Recursively build a [`NavItem`].
    fn build_item(&self, id: NodeId) -> NavItem {
        let node = &self.nodes[id.0];
        NavItem {
            id,
            title: node.title.clone(),
            path: node.path.clone(),
            kind: node.kind,
            order: node.order,
            description: node.description.clone(),
            keywords: node.keywords.clone(),
            children: self
                .children(id)
                .iter()
                .map(|&child| self.build_item(child))
                .collect(),
        }
    }
}
