//! Page index traits and error types.
//!
//! Provides the [`PageIndex`] and [`MenuSource`] traits that the navigation
//! builder reads from, along with [`PageIndexError`] for unified error handling
//! across backends.
//!
//! # Route Convention
//!
//! All page paths are absolute routes:
//! - `"/"` - root (home page)
//! - `"/trinity"` - top-level page
//! - `"/trinity/the-son"` - nested page

use std::path::PathBuf;

/// A published content page.
///
/// Produced by a [`PageIndex`] backend. Unpublished pages (drafts) are
/// excluded before records are returned, so consumers never filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRecord {
    /// Absolute route (e.g., "/", "/trinity", "/trinity/the-son").
    pub path: String,
    /// Page title (front matter > first H1 > last path segment).
    pub title: String,
    /// Page description from front matter.
    pub description: Option<String>,
    /// Page keywords from front matter.
    pub keywords: Vec<String>,
}

impl PageRecord {
    /// Create a record with no description or keywords.
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            description: None,
            keywords: Vec::new(),
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this record is the site's home page.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PageIndexErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Page index error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct PageIndexError {
    /// Semantic error category.
    pub kind: PageIndexErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PageIndexError {
    /// Create a new page index error.
    #[must_use]
    pub fn new(kind: PageIndexErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(PageIndexErrorKind::NotFound).with_path(path)
    }

    /// Create a page index error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => PageIndexErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => PageIndexErrorKind::PermissionDenied,
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted => {
                PageIndexErrorKind::Unavailable
            }
            _ => PageIndexErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for PageIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            PageIndexErrorKind::NotFound => "Not found",
            PageIndexErrorKind::PermissionDenied => "Permission denied",
            PageIndexErrorKind::InvalidPath => "Invalid path",
            PageIndexErrorKind::Unavailable => "Unavailable",
            PageIndexErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for PageIndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only access to the published pages of a site.
pub trait PageIndex {
    /// Return every published page.
    ///
    /// Order is unspecified; consumers sort as they need.
    ///
    /// # Errors
    ///
    /// Returns [`PageIndexError`] if the index cannot be produced at all
    /// (e.g., content directory missing or unreadable).
    fn pages(&self) -> Result<Vec<PageRecord>, PageIndexError>;
}

/// Access to the hand-authored ordering document.
pub trait MenuSource {
    /// Read the raw ordering document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(text))` - the document exists
    /// - `Ok(None)` - no ordering document for this site
    ///
    /// # Errors
    ///
    /// Returns [`PageIndexError`] if the document exists but cannot be read.
    fn menu_document(&self) -> Result<Option<String>, PageIndexError>;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_page_record_builder() {
        let page = PageRecord::new("/trinity", "The Trinity")
            .with_description("One God in three persons")
            .with_keywords(["godhead", "persons"]);

        assert_eq!(page.path, "/trinity");
        assert_eq!(page.title, "The Trinity");
        assert_eq!(page.description.as_deref(), Some("One God in three persons"));
        assert_eq!(page.keywords, vec!["godhead", "persons"]);
        assert!(!page.is_root());
    }

    #[test]
    fn test_page_record_root() {
        assert!(PageRecord::new("/", "Home").is_root());
    }

    #[test]
    fn test_error_not_found() {
        let err = PageIndexError::not_found("/content");

        assert_eq!(err.kind, PageIndexErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some(Path::new("/content")));
    }

    #[test]
    fn test_error_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = PageIndexError::io(io_err, None);

        assert_eq!(err.kind, PageIndexErrorKind::PermissionDenied);
    }

    #[test]
    fn test_error_display_simple() {
        let err = PageIndexError::new(PageIndexErrorKind::Unavailable);

        assert_eq!(err.to_string(), "Unavailable");
    }

    #[test]
    fn test_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = PageIndexError::new(PageIndexErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("/content")
            .with_source(io_err);

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: no such directory (path: /content)"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PageIndexError>();
    }
}
