//! folio: a read-only text viewer engine.
//!
//! This crate is the embedding surface. A platform shell (a window proc, an
//! app delegate, a TUI loop) owns a [`ViewerController`], feeds it events,
//! and implements the outbound collaborator traits:
//!
//! - [`Renderer`] — receives the visible [`Frame`] to paint
//! - [`ScrollbarHost`] — receives per-axis visibility and thumb position
//! - [`FontSource`] — measures a [`FontRequest`] into font metrics
//!
//! The controller wires the document model and the layout/viewport core
//! together; it performs no I/O besides opening the file it is asked to
//! open and never draws. Everything platform-shaped stays on the other
//! side of the traits.
//!
//! ```no_run
//! use std::time::Instant;
//! use folio::{ViewerController, ViewerEvent};
//!
//! let mut viewer = ViewerController::new();
//! viewer.open("README.md".as_ref(), None)?;
//! viewer.handle_event(ViewerEvent::Resize { width_px: 640, height_px: 400 }, Instant::now())?;
//! # Ok::<(), folio::ViewerError>(())
//! ```

mod controller;
mod host;
pub mod session;
mod viewer_event;

pub use controller::{ViewerController, ViewerError};
pub use host::{Axis, AxisUpdate, FontRequest, FontSource, Frame, Renderer, ScrollbarHost};
pub use viewer_event::ViewerEvent;

// The engine vocabulary embedders need alongside the controller.
pub use folio_document::{load, Document, LoadError};
pub use folio_input::{Key, KeyRepeatDebouncer, ScrollRequest};
pub use folio_view::{
    FontMetrics, Layout, LayoutError, LayoutMode, ScrollAxis, View, ViewLine, WindowSize,
    WIDGET_RANGE,
};
