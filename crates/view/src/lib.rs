//! folio-view: the layout and viewport engine for the folio text viewer.
//!
//! This crate is the core of the viewer. It never performs I/O and never
//! draws; it turns an immutable [`Document`](folio_document::Document) into
//! an ordered sequence of displayable line spans and keeps a scrollable
//! viewport over them:
//!
//! - [`Layout`] — the span sequence, built under one of two strategies
//!   ([`LayoutMode::NoWrap`] / [`LayoutMode::FixedWrap`]), regenerated
//!   wholesale on every rebuild
//! - [`anchor`] — relocates the topmost visible byte offset into a freshly
//!   built span sequence, so a resize or mode switch keeps the same text on
//!   screen
//! - [`Viewport`] — scroll position, page size, and the clamping rules for
//!   absolute and relative scrolling
//! - [`ScrollAxis`] — per-axis mapping of line units onto the external
//!   scrollbar widget's fixed range
//! - [`View`] — the aggregate owning one coherent generation of all of the
//!   above, replaced atomically by [`View::rebuild`]
//!
//! # Coordinate model
//!
//! Everything is an integer byte offset into the document buffer or an index
//! into the span sequence. Pixel values appear only at the rebuild boundary,
//! where the window size and [`FontMetrics`] are divided down into page
//! units; after that the engine is pure integer arithmetic.

pub mod anchor;
mod font;
mod layout;
mod scrollbar;
mod view;
mod viewport;

pub use font::FontMetrics;
pub use layout::{Layout, LayoutError, LayoutMode, ViewLine};
pub use scrollbar::{ScrollAxis, WIDGET_RANGE};
pub use view::{View, WindowSize};
pub use viewport::{PageGeometry, Viewport};
