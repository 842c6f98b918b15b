//! Mapping between content files and page routes.

use std::path::Path;

/// Convert a markdown file path (relative to the content root) to a route.
///
/// Examples:
/// - `index.md` -> `"/"`
/// - `trinity.md` -> `"/trinity"`
/// - `trinity/index.md` -> `"/trinity"`
/// - `trinity/the-son.md` -> `"/trinity/the-son"`
pub(crate) fn file_path_to_route(rel_path: &Path) -> String {
    let mut segments: Vec<String> = rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if let Some(last) = segments.pop() {
        let stem = last.strip_suffix(".md").unwrap_or(&last);
        if stem != "index" {
            segments.push(stem.to_owned());
        }
    }

    format!("/{}", segments.join("/"))
}

/// Derive a fallback title from a route's last segment.
///
/// Falls back to "Home" for the root route.
pub(crate) fn title_from_route(route: &str) -> String {
    match route.rsplit_once('/').map_or(route, |(_, last)| last) {
        "" => "Home".to_owned(),
        slug => titlecase_from_slug(slug),
    }
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Replaces `-` and `_` with spaces, then capitalizes the first letter of each word.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}
