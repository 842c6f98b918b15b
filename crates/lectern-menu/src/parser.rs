//! Ordering document parser.
//!
//! The ordering document is a YAML list. Each item is one of:
//!
//! ```yaml
//! - trinity                      # page reference (slug or path)
//! - ===                          # separator
//! - Doctrine: ===                # header
//! - The Son: /trinity/the-son    # alias
//! - Bible Gateway: https://www.biblegateway.com   # external link
//! - trinity:                     # submenu, children resolved under /trinity
//!     - the-father
//!     - the-son
//! ```
//!
//! Entries that cannot be understood are dropped with a warning; parsing
//! never fails because of a single item.

use serde_yaml::{Mapping, Value};

use crate::route::resolve_path;

/// Marker for separators (as a list item) and headers (as a mapping value).
pub const DIVIDER_MARKER: &str = "===";

/// Legacy separator marker.
pub const LEGACY_SEPARATOR: &str = "-";

/// One item of the ordering document.
///
/// All paths are resolved to absolute routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    /// Reference to a page; becomes the page's primary node.
    PageRef(String),
    /// Custom-titled shortcut to a page.
    AliasRef {
        /// Display title.
        title: String,
        /// Route of the target page.
        target: String,
    },
    /// Link to an absolute `http(s)` URL.
    ExternalRef {
        /// Display title.
        title: String,
        /// Target URL.
        url: String,
    },
    /// Non-clickable label.
    Header(String),
    /// Visual divider.
    Separator,
    /// Page reference with nested entries.
    Submenu {
        /// Route of the submenu's page.
        path: String,
        /// Nested entries, resolved under `path`.
        children: Vec<MenuEntry>,
    },
}

/// Parse result with the diagnostics collected along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedMenu {
    /// Entries in document order.
    pub entries: Vec<MenuEntry>,
    /// Human-readable descriptions of dropped items.
    pub warnings: Vec<String>,
}

/// Error returned when the document as a whole cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Document is not valid YAML.
    #[error("invalid ordering document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Document is valid YAML but not a list.
    #[error("ordering document must be a list, found {0}")]
    NotASequence(&'static str),
}

/// Parse an ordering document rooted at `/`.
///
/// An empty document is an empty menu.
///
/// # Errors
///
/// Returns [`MenuError`] if the text is not YAML or its top level is not a list.
pub fn parse_menu(text: &str) -> Result<ParsedMenu, MenuError> {
    if text.trim().is_empty() {
        return Ok(ParsedMenu::default());
    }
    let value: Value = serde_yaml::from_str(text)?;
    parse_menu_value(&value, "/")
}

/// Parse an already-loaded ordering document under `context_path`.
///
/// # Errors
///
/// Returns [`MenuError::NotASequence`] if `value` is neither a list nor null.
pub fn parse_menu_value(value: &Value, context_path: &str) -> Result<ParsedMenu, MenuError> {
    let mut warnings = Vec::new();
    let entries = match value {
        Value::Null => Vec::new(),
        Value::Sequence(items) => parse_items(items, context_path, &mut warnings),
        other => return Err(MenuError::NotASequence(value_kind(other))),
    };
    Ok(ParsedMenu { entries, warnings })
}

/// Parse one list level.
fn parse_items(items: &[Value], context_path: &str, warnings: &mut Vec<String>) -> Vec<MenuEntry> {
    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Null => entries.push(MenuEntry::Separator),
            Value::Mapping(mapping) => {
                parse_mapping(mapping, context_path, warnings, &mut entries);
            }
            scalar => match scalar_to_string(scalar) {
                Some(token) if token == DIVIDER_MARKER || token == LEGACY_SEPARATOR => {
                    entries.push(MenuEntry::Separator);
                }
                Some(token) if token.trim().is_empty() => {
                    warn(warnings, format!("empty menu item under {context_path}"));
                }
                Some(token) => entries.push(MenuEntry::PageRef(resolve_path(&token, context_path))),
                None => warn(
                    warnings,
                    format!(
                        "unsupported {} menu item under {context_path}",
                        value_kind(scalar)
                    ),
                ),
            },
        }
    }
    entries
}

/// Parse a mapping item. Each key/value pair becomes one entry, in order.
fn parse_mapping(
    mapping: &Mapping,
    context_path: &str,
    warnings: &mut Vec<String>,
    entries: &mut Vec<MenuEntry>,
) {
    for (key, value) in mapping {
        let Some(key) = scalar_to_string(key) else {
            warn(
                warnings,
                format!("unsupported {} menu key under {context_path}", value_kind(key)),
            );
            continue;
        };

        match value {
            Value::Null => entries.push(MenuEntry::Header(key)),
            Value::Sequence(children) => {
                let path = resolve_path(&key, context_path);
                let children = parse_items(children, &path, warnings);
                entries.push(MenuEntry::Submenu { path, children });
            }
            Value::String(target) => {
                let target = target.trim();
                if target.is_empty() || target == DIVIDER_MARKER {
                    entries.push(MenuEntry::Header(key));
                } else if is_external_url(target) {
                    entries.push(MenuEntry::ExternalRef {
                        title: key,
                        url: target.to_owned(),
                    });
                } else {
                    entries.push(MenuEntry::AliasRef {
                        title: key,
                        target: resolve_path(target, context_path),
                    });
                }
            }
            other => warn(
                warnings,
                format!(
                    "unsupported {} value for menu item '{key}' under {context_path}",
                    value_kind(other)
                ),
            ),
        }
    }
}

/// Whether a menu value is an absolute web URL.
fn is_external_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Stringify YAML scalars usable as slugs or titles.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

fn warn(warnings: &mut Vec<String>, message: String) {
    tracing::warn!("{message}");
    warnings.push(message);
}
