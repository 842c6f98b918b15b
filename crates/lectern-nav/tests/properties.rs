//! End-to-end checks of navigation building against mock and filesystem content.

use std::fs;

use lectern_nav::{
    BuildOptions, ExpandedNodes, NavError, NavTree, NavigationState, NodeId, NodeKind,
    load_navigation,
};
use lectern_pages::{FsContent, MockContent, PageRecord};
use pretty_assertions::assert_eq;

static_assertions::assert_impl_all!(NavTree: Send, Sync);
static_assertions::assert_impl_all!(NodeId: Copy, Send, Sync);

fn load(content: &MockContent) -> NavTree {
    load_navigation(content, content, &BuildOptions::default())
        .unwrap()
        .tree
}

/// `(title, order)` of each child of `id`.
fn level(tree: &NavTree, id: NodeId) -> Vec<(&str, u32)> {
    tree.children(id)
        .iter()
        .map(|&c| {
            let node = tree.node(c).unwrap();
            (node.title.as_str(), node.order)
        })
        .collect()
}

fn find(tree: &NavTree, title: &str) -> NodeId {
    tree.iter().find(|n| n.title == title).unwrap().id
}

fn order_example() -> MockContent {
    MockContent::new()
        .with_page("/", "Home")
        .with_page("/a", "a")
        .with_page("/b", "b")
        .with_page("/parent", "parent")
        .with_page("/parent/x", "x")
        .with_page("/parent/y", "y")
        .with_page("/c", "c")
        .with_page("/d", "d")
        .with_menu("- a\n- b\n- parent:\n    - x\n    - y\n- c\n- d\n")
}

#[test]
fn test_build_is_deterministic() {
    let content = order_example();

    let first = load(&content).to_json().unwrap();
    let second = load(&content).to_json().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_page_order_does_not_affect_output() {
    let forward = MockContent::new()
        .with_page("/b", "Beta")
        .with_page("/a", "Alpha")
        .with_page("/a/z", "Zed");
    let backward = MockContent::new()
        .with_page("/a/z", "Zed")
        .with_page("/a", "Alpha")
        .with_page("/b", "Beta");

    assert_eq!(load(&forward).to_json().unwrap(), load(&backward).to_json().unwrap());
}

#[test]
fn test_submenu_counters_are_independent() {
    let tree = load(&order_example());

    assert_eq!(
        level(&tree, NavTree::ROOT),
        vec![("a", 0), ("b", 1), ("parent", 2), ("c", 3), ("d", 4)]
    );
    assert_eq!(level(&tree, find(&tree, "parent")), vec![("x", 0), ("y", 1)]);
}

#[test]
fn test_alias_to_home_is_not_exclusive() {
    let content = MockContent::new()
        .with_page("/", "Home")
        .with_page("/trinity", "Trinity")
        .with_menu("- trinity\n- The Son: /\n");
    let tree = load(&content);

    let children = tree.children(NavTree::ROOT);
    assert_eq!(children.len(), 2);

    let primary = tree.node(children[0]).unwrap();
    let alias = tree.node(children[1]).unwrap();
    assert_eq!(primary.kind, NodeKind::Primary);
    assert_eq!(alias.kind, NodeKind::Alias);
    assert_eq!(alias.title, "The Son");
    assert_ne!(primary.id, alias.id);
    assert_eq!(tree.active_node("/trinity"), Some(primary.id));
}

#[test]
fn test_unlisted_pages_fall_back_alphabetically() {
    let content = MockContent::new()
        .with_page("/", "Home")
        .with_page("/zeal", "Zeal")
        .with_page("/atonement", "atonement")
        .with_page("/baptism", "Baptism")
        .with_page("/mercy", "Mercy")
        .with_menu("- mercy\n");
    let tree = load(&content);

    assert_eq!(
        level(&tree, NavTree::ROOT),
        vec![("Mercy", 0), ("atonement", 1), ("Baptism", 2), ("Zeal", 3)]
    );
}

#[test]
fn test_home_is_never_active() {
    let content = MockContent::new()
        .with_page("/", "Home")
        .with_page("/trinity", "Trinity")
        .with_menu("- /\n- trinity\n");
    let tree = load(&content);

    assert_eq!(tree.active_node("/"), None);
    assert_eq!(tree.active_node(""), None);
    assert!(tree.ancestors("/").is_empty());
    assert!(tree.breadcrumbs("/").is_empty());
    assert!(tree.children(NavTree::ROOT).iter().all(|&id| id != NavTree::ROOT));
}

#[test]
fn test_empty_menu_is_alphabetical_at_every_level() {
    let content = MockContent::new()
        .with_page("/", "Home")
        .with_page("/trinity", "Trinity")
        .with_page("/trinity/the-spirit", "The Spirit")
        .with_page("/trinity/the-father", "The Father")
        .with_page("/creeds", "Creeds")
        .with_menu("");
    let tree = load(&content);

    assert_eq!(level(&tree, NavTree::ROOT), vec![("Creeds", 0), ("Trinity", 1)]);
    assert_eq!(
        level(&tree, find(&tree, "Trinity")),
        vec![("The Father", 0), ("The Spirit", 1)]
    );
}

#[test]
fn test_alias_carries_target_metadata() {
    let content = MockContent::new()
        .with_record(
            PageRecord::new("/grace", "Grace")
                .with_description("Unmerited favour")
                .with_keywords(["charis"]),
        )
        .with_menu("- grace\n- Favour: grace\n");
    let tree = load(&content);

    let alias = tree.node(find(&tree, "Favour")).unwrap();
    assert_eq!(alias.kind, NodeKind::Alias);
    assert_eq!(alias.description.as_deref(), Some("Unmerited favour"));
    assert_eq!(alias.keywords, vec!["charis"]);
}

#[test]
fn test_index_unavailable_is_fatal() {
    let content = MockContent::new().with_menu("- trinity\n").unavailable();
    let mut state = NavigationState::new();

    let result = state.ensure_loaded(&content, &content, &BuildOptions::default());

    assert!(matches!(result, Err(NavError::IndexUnavailable(_))));
    assert!(state.tree().is_none());
}

#[test]
fn test_rebuild_after_invalidate_is_byte_equal() {
    let content = order_example();
    let mut state = NavigationState::new();

    let first = state
        .ensure_loaded(&content, &content, &BuildOptions::default())
        .unwrap()
        .to_json()
        .unwrap();
    state.invalidate();
    let second = state
        .ensure_loaded(&content, &content, &BuildOptions::default())
        .unwrap()
        .to_json()
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_filesystem_content_end_to_end() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("trinity")).unwrap();
    fs::write(root.join("index.md"), "# Welcome\n").unwrap();
    fs::write(root.join("trinity/index.md"), "# The Trinity\n").unwrap();
    fs::write(root.join("trinity/the-son.md"), "# The Son\n").unwrap();
    fs::write(root.join("trinity/the-father.md"), "# The Father\n").unwrap();
    fs::write(root.join("grace.md"), "---\ntitle: Grace Alone\n---\n# Grace\n").unwrap();
    fs::write(root.join("draft.md"), "---\ndraft: true\n---\n# Draft\n").unwrap();
    fs::write(
        root.join("menu.yaml"),
        "- trinity:\n    - the-son\n- Doctrine: \"===\"\n- grace\n- Bible Hub: https://biblehub.com\n",
    )
    .unwrap();
    let content = FsContent::new(root.to_path_buf());

    let build = load_navigation(&content, &content, &BuildOptions::default()).unwrap();
    let tree = &build.tree;

    assert!(build.warnings.is_empty());
    assert_eq!(tree.root().title, "Welcome");
    assert_eq!(
        level(tree, NavTree::ROOT),
        vec![("The Trinity", 0), ("Doctrine", 1), ("Grace Alone", 2), ("Bible Hub", 3)]
    );
    assert_eq!(
        level(tree, find(tree, "The Trinity")),
        vec![("The Son", 0), ("The Father", 1)]
    );
    assert!(tree.iter().all(|n| n.title != "Draft"));

    let mut expanded = ExpandedNodes::new();
    expanded.follow_route(tree, "/trinity/the-father");
    assert!(expanded.is_expanded(find(tree, "The Trinity")));

    let crumbs: Vec<_> = tree
        .breadcrumbs("/trinity/the-father")
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(crumbs, vec!["Welcome", "The Trinity"]);
}
