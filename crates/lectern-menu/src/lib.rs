//! Ordering document parsing for Lectern navigation.
//!
//! A site's navigation order is written by hand as a YAML list (the
//! *ordering document*). This crate turns that document into a sequence of
//! [`MenuEntry`] values with every path resolved to an absolute route.
//!
//! # Example
//!
//! ```
//! use lectern_menu::{MenuEntry, parse_menu};
//!
//! let menu = parse_menu("- trinity\n- Doctrine: \"===\"\n").unwrap();
//! assert_eq!(menu.entries[0], MenuEntry::PageRef("/trinity".to_owned()));
//! assert_eq!(menu.entries[1], MenuEntry::Header("Doctrine".to_owned()));
//! ```

mod parser;
mod route;

pub use parser::{
    DIVIDER_MARKER, LEGACY_SEPARATOR, MenuEntry, MenuError, ParsedMenu, parse_menu,
    parse_menu_value,
};
pub use route::{normalize_route, parent_route, resolve_path};
