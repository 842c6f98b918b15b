//! Route normalization and relative path resolution.
//!
//! Routes are absolute, slash-separated, without a trailing slash; `/` is
//! the root.

/// Normalize a route.
///
/// Adds the leading slash, collapses empty segments and trims the trailing
/// slash. An empty input is the root.
///
/// ```
/// use lectern_menu::normalize_route;
///
/// assert_eq!(normalize_route("trinity//the-son/"), "/trinity/the-son");
/// assert_eq!(normalize_route(""), "/");
/// ```
#[must_use]
pub fn normalize_route(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Parent of a normalized route. The root is its own parent.
#[must_use]
pub fn parent_route(route: &str) -> &str {
    match route.rsplit_once('/') {
        Some(("", _)) | None => "/",
        Some((parent, _)) => parent,
    }
}

/// Append a relative remainder under a normalized base route.
fn join_route(base: &str, rest: &str) -> String {
    if base == "/" {
        normalize_route(rest)
    } else {
        normalize_route(&format!("{base}/{rest}"))
    }
}

/// Resolve a menu token against the route of the menu level it appears in.
///
/// - `/x` is absolute and used as-is
/// - each leading `../` strips one trailing segment from the context
/// - `./x` and bare `x` are placed directly under the context
///
/// ```
/// use lectern_menu::resolve_path;
///
/// assert_eq!(resolve_path("the-son", "/trinity"), "/trinity/the-son");
/// assert_eq!(resolve_path("../grace", "/trinity"), "/grace");
/// assert_eq!(resolve_path("/creeds", "/trinity"), "/creeds");
/// ```
#[must_use]
pub fn resolve_path(token: &str, context_path: &str) -> String {
    let token = token.trim();
    if token.starts_with('/') {
        return normalize_route(token);
    }

    let mut base = normalize_route(context_path);
    let mut rest = token;
    loop {
        if let Some(remainder) = rest.strip_prefix("../") {
            base = parent_route(&base).to_owned();
            rest = remainder;
        } else if let Some(remainder) = rest.strip_prefix("./") {
            rest = remainder;
        } else {
            break;
        }
    }

    match rest {
        ".." => parent_route(&base).to_owned(),
        "." => base,
        _ => join_route(&base, rest),
    }
}
