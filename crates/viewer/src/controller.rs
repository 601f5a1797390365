//! The viewer controller: single owner of document and view state.
//!
//! One controller instance lives on the UI thread and processes every event
//! to completion — there is no other mutator, so there is nothing to lock.
//! Inbound events arrive either as [`ViewerEvent`]s (keys, wheel,
//! scrollbars, resize) or as direct method calls (open, mode, font);
//! outbound effects are pulled by the shell: [`frame`] for painting and
//! [`sync_scrollbars`] for the native widgets.
//!
//! [`frame`]: ViewerController::frame
//! [`sync_scrollbars`]: ViewerController::sync_scrollbars

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use folio_document::{load, Document, LoadError};
use folio_input::{Key, KeyRepeatDebouncer, ScrollRequest};
use folio_view::{LayoutError, LayoutMode, View, WindowSize, WIDGET_RANGE};

use crate::host::{Axis, AxisUpdate, FontRequest, FontSource, Frame, ScrollbarHost};
use crate::viewer_event::ViewerEvent;

/// Errors surfaced to the embedding shell.
#[derive(Debug)]
pub enum ViewerError {
    /// Opening a file failed; the previous document is still active.
    Load(LoadError),
    /// A rebuild failed; the view is in the empty configuration.
    Layout(LayoutError),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Load(err) => write!(f, "{}", err),
            ViewerError::Layout(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Load(err) => Some(err),
            ViewerError::Layout(err) => Some(err),
        }
    }
}

impl From<LoadError> for ViewerError {
    fn from(err: LoadError) -> Self {
        ViewerError::Load(err)
    }
}

impl From<LayoutError> for ViewerError {
    fn from(err: LayoutError) -> Self {
        ViewerError::Layout(err)
    }
}

/// The viewer: a document (maybe), the view over it, and input bookkeeping.
pub struct ViewerController {
    document: Option<Document>,
    /// Path of the open document, for session capture
    path: Option<PathBuf>,
    view: View,
    /// Last font request, re-measured on font change and saved in sessions
    font_request: FontRequest,
    debouncer: KeyRepeatDebouncer,
}

impl Default for ViewerController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerController {
    /// Creates an inert controller: nothing loaded, nothing to draw.
    pub fn new() -> Self {
        Self {
            document: None,
            path: None,
            view: View::new(),
            font_request: FontRequest::default(),
            debouncer: KeyRepeatDebouncer::with_default(),
        }
    }

    /// Returns true once a document is loaded.
    pub fn is_active(&self) -> bool {
        self.document.is_some()
    }

    /// Returns the open document, if any.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Returns the path of the open document, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the view state.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Returns the current font request.
    pub fn font_request(&self) -> &FontRequest {
        &self.font_request
    }

    /// Opens a file, replacing the current document on success.
    ///
    /// `size` is the window size to lay out for, or `None` to keep the last
    /// known one. Reading restarts at the top of the new document; mode,
    /// font, and window size carry over.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Load`] leaves the previous document (and everything
    /// on screen) untouched. [`ViewerError::Layout`] means the new document
    /// was loaded but could not be laid out; the view is empty until a
    /// rebuild succeeds.
    pub fn open(&mut self, path: &Path, size: Option<WindowSize>) -> Result<(), ViewerError> {
        let document = load(path)?;
        log::info!(
            "opened {} ({} bytes, {} lines)",
            path.display(),
            document.len(),
            document.line_count(),
        );

        self.document = Some(document);
        self.path = Some(path.to_path_buf());
        self.view.clear();
        self.rebuild(size)
    }

    /// Drops the document and resets the view; the viewer goes inert.
    pub fn close(&mut self) {
        self.document = None;
        self.path = None;
        self.view.clear();
    }

    /// Re-lays-out for a new window size (or the last known one).
    pub fn rebuild(&mut self, size: Option<WindowSize>) -> Result<(), ViewerError> {
        self.view.rebuild(self.document.as_ref(), size)?;
        Ok(())
    }

    /// Switches the layout mode and rebuilds at the last known size.
    pub fn set_mode(&mut self, mode: LayoutMode) -> Result<(), ViewerError> {
        self.view.set_mode(mode);
        self.rebuild(None)
    }

    /// Measures a font request and rebuilds with the new metrics.
    pub fn set_font(
        &mut self,
        source: &dyn FontSource,
        request: FontRequest,
    ) -> Result<(), ViewerError> {
        let metrics = source.measure(&request);
        log::debug!("font {:?} measured as {:?}", request, metrics);
        self.font_request = request;
        self.view.set_metrics(metrics);
        self.rebuild(None)
    }

    /// Processes one input event.
    ///
    /// Returns true if the screen contents may have changed and the shell
    /// should repaint (and re-sync its scrollbars).
    ///
    /// `now` feeds the key-repeat debouncer; pass the event timestamp if
    /// the platform provides one, `Instant::now()` otherwise.
    pub fn handle_event(
        &mut self,
        event: ViewerEvent,
        now: Instant,
    ) -> Result<bool, ViewerError> {
        match event {
            ViewerEvent::Resize { width_px, height_px } => {
                self.rebuild(Some(WindowSize { width_px, height_px }))?;
                Ok(true)
            }
            // Scroll events on an inert viewer have nothing to move.
            _ if !self.is_active() => Ok(false),
            ViewerEvent::Key(key) => Ok(self.handle_key(key, now)),
            ViewerEvent::Wheel { delta_lines } => {
                self.view.scroll_vertical_by(delta_lines);
                Ok(true)
            }
            ViewerEvent::VerticalScrollbar(request) => {
                self.handle_scrollbar(Axis::Vertical, request);
                Ok(true)
            }
            ViewerEvent::HorizontalScrollbar(request) => {
                self.handle_scrollbar(Axis::Horizontal, request);
                Ok(true)
            }
        }
    }

    /// Key navigation, behind the repeat debouncer.
    fn handle_key(&mut self, key: Key, now: Instant) -> bool {
        if !self.debouncer.accept(key, now) {
            return false;
        }

        let page = self.view.viewport().lines_per_page() as i64;
        match key {
            Key::Up => self.view.scroll_vertical_by(-1),
            Key::Down => self.view.scroll_vertical_by(1),
            Key::Left => self.view.scroll_horizontal_by(-1),
            Key::Right => self.view.scroll_horizontal_by(1),
            Key::PageUp => self.view.scroll_vertical_by(-page),
            Key::PageDown => self.view.scroll_vertical_by(page),
        }
        true
    }

    /// Scrollbar messages; thumb positions are scaled back out of the
    /// widget domain before they touch the viewport.
    fn handle_scrollbar(&mut self, axis: Axis, request: ScrollRequest) {
        let viewport = self.view.viewport();
        match axis {
            Axis::Vertical => {
                let page = viewport.lines_per_page() as i64;
                match request {
                    ScrollRequest::LineBack => self.view.scroll_vertical_by(-1),
                    ScrollRequest::LineForward => self.view.scroll_vertical_by(1),
                    ScrollRequest::PageBack => self.view.scroll_vertical_by(-page),
                    ScrollRequest::PageForward => self.view.scroll_vertical_by(page),
                    ScrollRequest::Thumb(pos) => {
                        let target = self.view.vertical_axis().from_widget(pos);
                        self.view.scroll_vertical_to(target);
                    }
                }
            }
            Axis::Horizontal => {
                let page = viewport.chars_per_page() as i64;
                match request {
                    ScrollRequest::LineBack => self.view.scroll_horizontal_by(-1),
                    ScrollRequest::LineForward => self.view.scroll_horizontal_by(1),
                    ScrollRequest::PageBack => self.view.scroll_horizontal_by(-page),
                    ScrollRequest::PageForward => self.view.scroll_horizontal_by(page),
                    ScrollRequest::Thumb(pos) => {
                        let target = self.view.horizontal_axis().from_widget(pos);
                        self.view.scroll_horizontal_to(target);
                    }
                }
            }
        }
    }

    /// Assembles the paintable snapshot of the current viewport.
    ///
    /// Each visible span is resolved to its display bytes with the
    /// horizontal offset applied; rows scrolled entirely off the left edge
    /// come out empty. With no document loaded the frame has no rows.
    pub fn frame(&self) -> Frame<'_> {
        let metrics = self.view.metrics();
        let document = match &self.document {
            Some(document) => document,
            None => return Frame { top_line: 0, lines: Vec::new(), metrics },
        };

        let h_offset = self.view.viewport().h_offset();
        let lines = self
            .view
            .visible_lines()
            .iter()
            .map(|span| {
                let bytes = &document.bytes()[span.start..span.start + span.len];
                &bytes[h_offset.min(bytes.len())..]
            })
            .collect();

        Frame {
            top_line: self.view.viewport().top_line(),
            lines,
            metrics,
        }
    }

    /// Pushes current axis state to the native scrollbar widgets.
    ///
    /// Call after every repaint-worthy event; the widget has no other way
    /// to learn that the range or position changed.
    pub fn sync_scrollbars(&self, host: &mut dyn ScrollbarHost) {
        let viewport = self.view.viewport();

        let vertical = self.view.vertical_axis();
        host.update_axis(
            Axis::Vertical,
            AxisUpdate {
                visible: vertical.is_visible(),
                position: vertical.to_widget(viewport.top_line()),
                range_max: WIDGET_RANGE,
            },
        );

        let horizontal = self.view.horizontal_axis();
        host.update_axis(
            Axis::Horizontal,
            AxisUpdate {
                visible: horizontal.is_visible(),
                position: horizontal.to_widget(viewport.h_offset()),
                range_max: WIDGET_RANGE,
            },
        );
    }
}
