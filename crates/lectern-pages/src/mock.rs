//! Mock content backend for testing.
//!
//! Provides [`MockContent`] for unit testing without filesystem access.

use std::sync::RwLock;

use crate::index::{MenuSource, PageIndex, PageIndexError, PageIndexErrorKind, PageRecord};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock content for testing.
///
/// Stores pages and the ordering document in memory. Use the builder methods
/// to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use lectern_pages::{MockContent, PageIndex};
///
/// let content = MockContent::new()
///     .with_page("/", "Home")
///     .with_page("/trinity", "The Trinity")
///     .with_menu("- trinity\n");
///
/// let pages = content.pages().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockContent {
    pages: RwLock<Vec<PageRecord>>,
    menu: RwLock<Option<String>>,
    unavailable: RwLock<bool>,
}

impl MockContent {
    /// Create a new empty mock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page with the given route and title.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, path: impl Into<String>, title: impl Into<String>) -> Self {
        self.pages
            .write()
            .unwrap()
            .push(PageRecord::new(path, title));
        self
    }

    /// Add a fully specified page record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_record(self, record: PageRecord) -> Self {
        self.pages.write().unwrap().push(record);
        self
    }

    /// Set the ordering document text.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_menu(self, menu: impl Into<String>) -> Self {
        *self.menu.write().unwrap() = Some(menu.into());
        self
    }

    /// Make `pages()` fail as if the backend were down.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn unavailable(self) -> Self {
        *self.unavailable.write().unwrap() = true;
        self
    }

    /// Replace the ordering document after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_menu(&self, menu: Option<String>) {
        *self.menu.write().unwrap() = menu;
    }
}

impl PageIndex for MockContent {
    fn pages(&self) -> Result<Vec<PageRecord>, PageIndexError> {
        if *self.unavailable.read().unwrap() {
            return Err(PageIndexError::new(PageIndexErrorKind::Unavailable).with_backend(BACKEND));
        }
        Ok(self.pages.read().unwrap().clone())
    }
}

impl MenuSource for MockContent {
    fn menu_document(&self) -> Result<Option<String>, PageIndexError> {
        Ok(self.menu.read().unwrap().clone())
    }
}
