//! Filesystem content backend.
//!
//! [`FsContent`] walks a content directory for markdown pages and reads the
//! site's ordering document. It implements both [`PageIndex`] and
//! [`MenuSource`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use rayon::prelude::*;

use crate::front_matter::{FrontMatter, parse_front_matter, split_front_matter};
use crate::index::{MenuSource, PageIndex, PageIndexError, PageIndexErrorKind, PageRecord};
use crate::route::{file_path_to_route, title_from_route};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Default ordering document filename.
const DEFAULT_MENU_FILE: &str = "menu.yaml";

/// A page file discovered during the walk, before it is read.
struct PageFile {
    abs_path: PathBuf,
    route: String,
    is_index: bool,
}

/// Filesystem content backend.
///
/// # Layout
///
/// - `index.md` files become their directory's route
/// - other `.md` files become `<dir>/<stem>`
/// - hidden files and directories are skipped
/// - when both `guide.md` and `guide/index.md` exist, the directory index wins
pub struct FsContent {
    source_dir: PathBuf,
    menu_file: String,
}

impl FsContent {
    /// Create a backend rooted at `source_dir` using `menu.yaml` as ordering document.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self::with_menu_file(source_dir, DEFAULT_MENU_FILE)
    }

    /// Create a backend with a custom ordering document filename.
    #[must_use]
    pub fn with_menu_file(source_dir: PathBuf, menu_file: &str) -> Self {
        Self {
            source_dir,
            menu_file: menu_file.to_owned(),
        }
    }

    /// Root content directory.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Walk the content directory and collect markdown files.
    fn discover(&self) -> Vec<PageFile> {
        let walker = WalkBuilder::new(&self.source_dir)
            .standard_filters(false)
            .hidden(true)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read content entry, skipping");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if path.extension().is_none_or(|e| e != "md") {
                continue;
            }
            let Ok(rel_path) = path.strip_prefix(&self.source_dir) else {
                continue;
            };
            files.push(PageFile {
                abs_path: path.to_path_buf(),
                route: file_path_to_route(rel_path),
                is_index: rel_path.file_name().is_some_and(|n| n == "index.md"),
            });
        }
        files
    }

    /// Read a page file and build its record.
    ///
    /// Returns `None` for unpublished pages and unreadable files.
    fn build_record(file: &PageFile) -> Option<PageRecord> {
        let content = match fs::read_to_string(&file.abs_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %file.abs_path.display(),
                    error = %e,
                    "Failed to read page, skipping"
                );
                return None;
            }
        };

        let (front_matter, body) = split_front_matter(&content);
        let front_matter = match front_matter {
            Some(yaml) => parse_front_matter(yaml).unwrap_or_else(|| {
                tracing::warn!(
                    path = %file.abs_path.display(),
                    "Invalid front matter, ignoring it"
                );
                FrontMatter::empty()
            }),
            None => FrontMatter::empty(),
        };

        if !front_matter.published {
            tracing::debug!(route = %file.route, "Skipping unpublished page");
            return None;
        }

        let title = front_matter
            .title
            .or_else(|| extract_h1(body))
            .unwrap_or_else(|| title_from_route(&file.route));

        Some(PageRecord {
            path: file.route.clone(),
            title,
            description: front_matter.description,
            keywords: front_matter.keywords,
        })
    }
}

/// Extract the first H1 heading from a markdown body.
///
/// Headings inside code blocks are not headings and are skipped.
fn extract_h1(body: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut title = String::new();
    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let text = title.trim();
                if !text.is_empty() {
                    return Some(text.to_owned());
                }
                in_h1 = false;
                title.clear();
            }
            Event::Text(text) | Event::Code(text) if in_h1 => title.push_str(&text),
            _ => {}
        }
    }
    None
}

impl PageIndex for FsContent {
    fn pages(&self) -> Result<Vec<PageRecord>, PageIndexError> {
        match fs::metadata(&self.source_dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(PageIndexError::new(PageIndexErrorKind::InvalidPath)
                    .with_path(&self.source_dir)
                    .with_backend(BACKEND));
            }
            Err(e) => {
                return Err(
                    PageIndexError::io(e, Some(self.source_dir.clone())).with_backend(BACKEND)
                );
            }
        }

        let files = self.discover();
        let records: Vec<(bool, PageRecord)> = files
            .par_iter()
            .filter_map(|file| Self::build_record(file).map(|record| (file.is_index, record)))
            .collect();

        // Among published files, a directory index wins over a same-named standalone file
        let mut by_route: BTreeMap<String, (bool, PageRecord)> = BTreeMap::new();
        for (is_index, record) in records {
            let keep_existing = by_route
                .get(&record.path)
                .is_some_and(|(existing_is_index, _)| *existing_is_index || !is_index);
            if !keep_existing {
                by_route.insert(record.path.clone(), (is_index, record));
            }
        }

        let pages: Vec<PageRecord> = by_route.into_values().map(|(_, record)| record).collect();

        tracing::debug!(count = pages.len(), dir = %self.source_dir.display(), "Scanned pages");
        Ok(pages)
    }
}

impl MenuSource for FsContent {
    fn menu_document(&self) -> Result<Option<String>, PageIndexError> {
        let path = self.source_dir.join(&self.menu_file);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PageIndexError::io(e, Some(path)).with_backend(BACKEND)),
        }
    }
}
