//! Page index and menu source access for Lectern.
//!
//! This crate provides the [`PageIndex`] and [`MenuSource`] traits the
//! navigation builder reads from. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Clean separation** between tree building and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`PageIndex`] trait returning published [`PageRecord`]s
//! - [`MenuSource`] trait returning the raw ordering document
//! - [`FsContent`] implementing both over a markdown directory
//! - [`MockContent`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use lectern_pages::{FsContent, PageIndex};
//!
//! let content = FsContent::new(PathBuf::from("content"));
//! for page in content.pages()? {
//!     println!("{}: {}", page.path, page.title);
//! }
//! ```

mod front_matter;
mod fs;
mod index;
#[cfg(feature = "mock")]
mod mock;
mod route;

pub use fs::FsContent;
pub use index::{MenuSource, PageIndex, PageIndexError, PageIndexErrorKind, PageRecord};
#[cfg(feature = "mock")]
pub use mock::MockContent;
