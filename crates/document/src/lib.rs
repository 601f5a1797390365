//! folio-document: the document model for the folio text viewer.
//!
//! This crate owns the loaded file content and nothing else. The main type
//! is [`Document`]: an immutable byte buffer together with a table of line
//! start offsets derived from it once, at construction. Everything downstream
//! (layout, scrolling, painting) works in terms of integer byte offsets into
//! this one buffer, so the document never needs to be re-read or copied.
//!
//! # Overview
//!
//! - [`Document`] — immutable bytes + line-start table + max line length
//! - [`load`] — whole-file loader returning [`Document`] or [`LoadError`]
//!
//! # Example
//!
//! ```
//! use folio_document::Document;
//!
//! let doc = Document::from_bytes(b"Hello\nWorld".to_vec()).unwrap();
//! assert_eq!(doc.line_count(), 2);
//! assert_eq!(doc.line_bytes(0), Some(&b"Hello"[..]));
//! assert_eq!(doc.line_bytes(1), Some(&b"World"[..]));
//! ```
//!
//! # Lifecycle
//!
//! A `Document` is created when a file is opened and dropped when another
//! file replaces it or the viewer closes. There is no mutation API: a new
//! file means a new `Document`.

mod document;
mod loader;

pub use document::Document;
pub use loader::{load, LoadError};
