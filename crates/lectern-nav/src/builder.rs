//! Navigation tree builder.
//!
//! Merges the page index with the parsed ordering document:
//!
//! 1. Every non-root page gets a provisional primary node.
//! 2. Menu entries are walked top-down. Each nesting level owns its own
//!    order counter, starting at 0.
//! 3. Pages the menu never mentions are attached to their structural parent
//!    (nearest ancestor route in the index) after the explicit entries,
//!    sorted case-insensitively by title.
//!
//! Entries that reference unknown pages are dropped with a warning. A build
//! always succeeds.

use std::collections::{BTreeMap, HashMap};

use lectern_menu::{MenuEntry, normalize_route, parent_route};
use lectern_pages::PageRecord;

use crate::tree::{NavNode, NavTree, NodeId, NodeKind};

/// Order of a provisional node that has not been placed yet.
pub const UNORDERED: u32 = u32::MAX;

/// Options for [`build_tree`].
#[derive(Clone, Debug)]
pub struct BuildOptions {
    /// Root title used when the index has no `/` page.
    pub home_title: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            home_title: "Home".to_owned(),
        }
    }
}

/// Result of a build.
#[derive(Debug)]
pub struct NavBuild {
    /// The assembled tree.
    pub tree: NavTree,
    /// Diagnostics for entries and pages that were skipped.
    pub warnings: Vec<String>,
}

/// Build a navigation tree.
///
/// # Arguments
///
/// * `pages` - Published pages, in any order
/// * `entries` - Parsed ordering document (empty for alphabetical order)
/// * `options` - Build options
#[must_use]
pub fn build_tree(pages: &[PageRecord], entries: &[MenuEntry], options: &BuildOptions) -> NavBuild {
    let mut builder = TreeBuilder::new(pages, options);
    builder.place_entries(entries, NavTree::ROOT);
    builder.attach_unplaced();
    builder.finish()
}

/// A menu path resolved against the index.
enum Target {
    Root,
    Page(NodeId),
}

/// Mutable state of a single build.
struct TreeBuilder {
    nodes: Vec<NavNode>,
    parents: Vec<Option<NodeId>>,
    placed: Vec<bool>,
    /// Next order value per node, used when it acts as a parent.
    next_order: Vec<u32>,
    page_nodes: HashMap<String, NodeId>,
    warnings: Vec<String>,
}

impl TreeBuilder {
    /// Create the root and one provisional node per page.
    fn new(pages: &[PageRecord], options: &BuildOptions) -> Self {
        let mut sorted: Vec<(String, &PageRecord)> = pages
            .iter()
            .map(|page| (normalize_route(&page.path), page))
            .collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut builder = Self {
            nodes: Vec::with_capacity(sorted.len() + 1),
            parents: Vec::with_capacity(sorted.len() + 1),
            placed: Vec::with_capacity(sorted.len() + 1),
            next_order: Vec::with_capacity(sorted.len() + 1),
            page_nodes: HashMap::with_capacity(sorted.len()),
            warnings: Vec::new(),
        };

        let root_page = sorted.iter().find(|(path, _)| path == "/").map(|(_, p)| *p);
        let root = builder.push_node(
            root_page.map_or_else(|| options.home_title.clone(), |p| p.title.clone()),
            "/".to_owned(),
            NodeKind::Primary,
            None,
        );
        builder.nodes[root.0].order = 0;
        builder.placed[root.0] = true;
        if let Some(page) = root_page {
            builder.nodes[root.0].description.clone_from(&page.description);
            builder.nodes[root.0].keywords.clone_from(&page.keywords);
        }

        for (path, page) in sorted {
            if path == "/" {
                continue;
            }
            if builder.page_nodes.contains_key(&path) {
                builder.warn(format!("duplicate page {path} ignored"));
                continue;
            }
            let id = builder.push_node(page.title.clone(), path.clone(), NodeKind::Primary, None);
            builder.nodes[id.0].description.clone_from(&page.description);
            builder.nodes[id.0].keywords.clone_from(&page.keywords);
            builder.page_nodes.insert(path, id);
        }

        builder
    }

    /// Append a node to the table.
    ///
    /// Nodes with a parent are placed immediately; others stay provisional.
    fn push_node(
        &mut self,
        title: String,
        path: String,
        kind: NodeKind,
        placement: Option<(NodeId, u32)>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let (parent, order) = placement.map_or((None, UNORDERED), |(p, o)| (Some(p), o));
        self.nodes.push(NavNode {
            id,
            title,
            path,
            order,
            kind,
            description: None,
            keywords: Vec::new(),
        });
        self.parents.push(parent);
        self.placed.push(parent.is_some());
        self.next_order.push(0);
        id
    }

    /// Append a synthetic node whose path is a placeholder derived from its id.
    fn push_placeholder(&mut self, title: String, kind: NodeKind, parent: NodeId, order: u32) {
        let id = self.push_node(title, String::new(), kind, Some((parent, order)));
        let prefix = if kind == NodeKind::Header {
            "header"
        } else {
            "separator"
        };
        self.nodes[id.0].path = format!("#{prefix}-{}", id.0);
    }

    fn resolve(&self, path: &str) -> Option<Target> {
        if path == "/" {
            return Some(Target::Root);
        }
        self.page_nodes.get(path).map(|&id| Target::Page(id))
    }

    /// Create an alias node pointing at a resolved target.
    fn push_alias(
        &mut self,
        title: Option<String>,
        target: &Target,
        parent: NodeId,
        order: u32,
    ) -> NodeId {
        let source = match target {
            Target::Root => NavTree::ROOT,
            Target::Page(id) => *id,
        };
        let source_node = &self.nodes[source.0];
        let title = title.unwrap_or_else(|| source_node.title.clone());
        let path = source_node.path.clone();
        let description = source_node.description.clone();
        let keywords = source_node.keywords.clone();

        let id = self.push_node(title, path, NodeKind::Alias, Some((parent, order)));
        self.nodes[id.0].description = description;
        self.nodes[id.0].keywords = keywords;
        id
    }

    /// Place a page reference under `parent`.
    ///
    /// The first reference claims the page's primary node; later references
    /// (and references to `/`) become aliases. Returns `None` for unknown pages.
    fn place_page(&mut self, path: &str, parent: NodeId, order: u32) -> Option<NodeId> {
        match self.resolve(path)? {
            Target::Page(id) if !self.placed[id.0] => {
                self.parents[id.0] = Some(parent);
                self.nodes[id.0].order = order;
                self.placed[id.0] = true;
                Some(id)
            }
            target => Some(self.push_alias(None, &target, parent, order)),
        }
    }

    /// Walk one menu level with its own order counter.
    fn place_entries(&mut self, entries: &[MenuEntry], parent: NodeId) {
        let mut order = self.next_order[parent.0];

        for entry in entries {
            match entry {
                MenuEntry::PageRef(path) => {
                    if self.place_page(path, parent, order).is_none() {
                        self.warn(format!("menu entry {path} does not match any page"));
                        continue;
                    }
                }
                MenuEntry::AliasRef { title, target } => {
                    let Some(resolved) = self.resolve(target) else {
                        self.warn(format!(
                            "alias '{title}' points to {target}, which does not match any page"
                        ));
                        continue;
                    };
                    self.push_alias(Some(title.clone()), &resolved, parent, order);
                }
                MenuEntry::ExternalRef { title, url } => {
                    self.push_node(
                        title.clone(),
                        url.clone(),
                        NodeKind::External,
                        Some((parent, order)),
                    );
                }
                MenuEntry::Header(title) => {
                    self.push_placeholder(title.clone(), NodeKind::Header, parent, order);
                }
                MenuEntry::Separator => {
                    self.push_placeholder(String::new(), NodeKind::Separator, parent, order);
                }
                MenuEntry::Submenu { path, children } => {
                    let Some(id) = self.place_page(path, parent, order) else {
                        self.warn(format!(
                            "submenu {path} does not match any page, dropping {} nested entries",
                            children.len()
                        ));
                        continue;
                    };
                    // Children count from the submenu's own counter
                    self.place_entries(children, id);
                }
            }
            order += 1;
        }

        self.next_order[parent.0] = order;
    }

    /// Nearest ancestor route present in the index, else the root.
    fn structural_parent(&self, path: &str) -> NodeId {
        let mut current = parent_route(path);
        while current != "/" {
            if let Some(&id) = self.page_nodes.get(current) {
                return id;
            }
            current = parent_route(current);
        }
        NavTree::ROOT
    }

    /// Attach every page the menu did not place, alphabetically per parent.
    fn attach_unplaced(&mut self) {
        let mut groups: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
        for (index, placed) in self.placed.iter().enumerate() {
            if !placed {
                let parent = self.structural_parent(&self.nodes[index].path);
                groups.entry(parent).or_default().push(NodeId(index));
            }
        }

        for (parent, mut ids) in groups {
            ids.sort_by_cached_key(|id| {
                let node = &self.nodes[id.0];
                (node.title.to_lowercase(), node.path.clone())
            });
            for id in ids {
                let order = self.next_order[parent.0];
                self.next_order[parent.0] += 1;
                self.parents[id.0] = Some(parent);
                self.nodes[id.0].order = order;
                self.placed[id.0] = true;
            }
        }
    }

    /// Build children lists in display order and produce the tree.
    fn finish(self) -> NavBuild {
        let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); self.nodes.len()];
        for (index, parent) in self.parents.iter().enumerate() {
            if let Some(parent) = parent {
                children[parent.0].push(NodeId(index));
            }
        }
        for list in &mut children {
            list.sort_by_key(|id| self.nodes[id.0].order);
        }

        tracing::debug!(
            nodes = self.nodes.len(),
            warnings = self.warnings.len(),
            "Built navigation tree"
        );

        NavBuild {
            tree: NavTree::new(self.nodes, children, self.parents),
            warnings: self.warnings,
        }
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{message}");
        self.warnings.push(message);
    }
}
