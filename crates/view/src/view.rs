//! The view aggregate: one coherent generation of per-rebuild state.
//!
//! A [`View`] owns the layout, the viewport, and both scroll axes, plus the
//! inputs they were derived from (mode, font metrics, last known window
//! size). [`View::rebuild`] regenerates all of it together:
//!
//! 1. capture the anchor offset from the outgoing generation
//! 2. derive the page geometry from the window size and font metrics
//! 3. build the new span sequence
//! 4. relocate the anchor and re-place the viewport (clamping everything)
//! 5. recompute both axis scales
//!
//! The generation is replaced atomically: on any failure the view falls
//! back to the empty configuration rather than keeping a mix of old and
//! new state. Scrolling between rebuilds mutates only the viewport.

use folio_document::Document;

use crate::anchor;
use crate::font::FontMetrics;
use crate::layout::{Layout, LayoutError, LayoutMode, ViewLine};
use crate::scrollbar::ScrollAxis;
use crate::viewport::{PageGeometry, Viewport};

/// Window client-area size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSize {
    pub width_px: u32,
    pub height_px: u32,
}

/// The engine's complete presentation state for one document.
#[derive(Debug, Clone)]
pub struct View {
    mode: LayoutMode,
    metrics: FontMetrics,
    /// Last known window size, reused when a rebuild omits dimensions.
    window: WindowSize,
    layout: Layout,
    viewport: Viewport,
    vertical: ScrollAxis,
    horizontal: ScrollAxis,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Creates an inert view: no spans, hidden axes, default metrics.
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::default(),
            metrics: FontMetrics::default(),
            window: WindowSize::default(),
            layout: Layout::empty(),
            viewport: Viewport::empty(),
            vertical: ScrollAxis::Hidden,
            horizontal: ScrollAxis::Hidden,
        }
    }

    /// Returns the current layout mode.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Switches the layout mode. Takes effect at the next [`rebuild`].
    ///
    /// The horizontal offset is not carried across a mode change; it resets
    /// to 0 here (the anchor still keeps the right text on screen).
    ///
    /// [`rebuild`]: View::rebuild
    pub fn set_mode(&mut self, mode: LayoutMode) {
        if mode != self.mode {
            self.viewport.reset_horizontal();
        }
        self.mode = mode;
    }

    /// Returns the font metrics in effect.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Installs new font metrics. Takes effect at the next [`rebuild`].
    ///
    /// [`rebuild`]: View::rebuild
    pub fn set_metrics(&mut self, metrics: FontMetrics) {
        self.metrics = metrics;
    }

    /// Returns the last known window size.
    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// Regenerates layout, viewport, and axes for the given document.
    ///
    /// `size` is the new window size, or `None` to reuse the last known one
    /// (mode and font changes rebuild without a resize). `document` is
    /// `None` when nothing is loaded, which resets to the empty
    /// configuration.
    ///
    /// The previous reading position is preserved: the top-left visible
    /// byte offset is captured first and relocated into the new spans, so
    /// the same text stays on screen across resizes and mode switches.
    ///
    /// # Errors
    ///
    /// [`LayoutError::OutOfMemory`] if the span sequence cannot be
    /// allocated. The view is then in the empty configuration — no partial
    /// generation survives — and a later rebuild can recover.
    pub fn rebuild(
        &mut self,
        document: Option<&Document>,
        size: Option<WindowSize>,
    ) -> Result<(), LayoutError> {
        if let Some(size) = size {
            self.window = size;
        }

        let doc = match document {
            Some(doc) => doc,
            None => {
                self.clear();
                return Ok(());
            }
        };

        // The old spans are still alive here; the anchor must be taken
        // before they are replaced.
        let anchor = anchor::anchor_offset(&self.layout, &self.viewport);

        let pages = PageGeometry {
            lines_per_page: self.metrics.rows_for_height(self.window.height_px),
            chars_per_page: self.metrics.cols_for_width(self.window.width_px),
        };

        let layout = match Layout::build(doc, self.mode, pages.chars_per_page) {
            Ok(layout) => layout,
            Err(err) => {
                self.clear();
                return Err(err);
            }
        };

        let top_line = match anchor {
            Some(offset) => anchor::relocate(&layout, offset),
            None => 0,
        };
        let horizontal_scrolling = self.mode == LayoutMode::NoWrap;

        self.viewport = Viewport::place(
            pages,
            &layout,
            horizontal_scrolling,
            top_line,
            self.viewport.h_offset(),
        );
        self.vertical = ScrollAxis::compute(layout.len(), pages.lines_per_page);
        self.horizontal = if horizontal_scrolling {
            ScrollAxis::compute(layout.max_line_len(), pages.chars_per_page)
        } else {
            ScrollAxis::Hidden
        };
        self.layout = layout;

        log::debug!(
            "rebuilt view: {:?}, {} spans, page {}x{}, top line {}",
            self.mode,
            self.layout.len(),
            pages.chars_per_page,
            pages.lines_per_page,
            self.viewport.top_line(),
        );
        Ok(())
    }

    /// Resets to the empty configuration: no spans, zeroed viewport,
    /// hidden axes. Mode, metrics, and window size survive.
    pub fn clear(&mut self) {
        self.layout = Layout::empty();
        self.viewport = Viewport::empty();
        self.vertical = ScrollAxis::Hidden;
        self.horizontal = ScrollAxis::Hidden;
    }

    /// Returns the current span sequence.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the vertical axis state.
    pub fn vertical_axis(&self) -> ScrollAxis {
        self.vertical
    }

    /// Returns the horizontal axis state.
    pub fn horizontal_axis(&self) -> ScrollAxis {
        self.horizontal
    }

    /// Returns the spans currently on screen.
    pub fn visible_lines(&self) -> &[ViewLine] {
        &self.layout.lines()[self.viewport.visible_range()]
    }

    /// Absolute vertical scroll (line units).
    pub fn scroll_vertical_to(&mut self, pos: usize) {
        self.viewport.set_vertical(pos);
    }

    /// Relative vertical scroll (line units).
    pub fn scroll_vertical_by(&mut self, delta: i64) {
        self.viewport.scroll_vertical_by(delta);
    }

    /// Absolute horizontal scroll (character units).
    pub fn scroll_horizontal_to(&mut self, pos: usize) {
        self.viewport.set_horizontal(pos);
    }

    /// Relative horizontal scroll (character units).
    pub fn scroll_horizontal_by(&mut self, delta: i64) {
        self.viewport.scroll_horizontal_by(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(content: &str) -> Document {
        Document::from_bytes(content.as_bytes().to_vec()).unwrap()
    }

    /// 8x16 metrics: an 80x25 page is a 640x400 window.
    fn size(cols: u32, rows: u32) -> WindowSize {
        WindowSize { width_px: cols * 8, height_px: rows * 16 }
    }

    fn numbered_lines(n: usize) -> String {
        (0..n).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    // ==================== rebuild basics ====================

    #[test]
    fn test_rebuild_no_document_is_empty_configuration() {
        let mut view = View::new();
        view.rebuild(None, Some(size(80, 25))).unwrap();
        assert!(view.layout().is_empty());
        assert!(!view.vertical_axis().is_visible());
        assert!(!view.horizontal_axis().is_visible());
        assert_eq!(view.visible_lines().len(), 0);
    }

    #[test]
    fn test_rebuild_empty_document_single_empty_span() {
        let d = doc("");
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        assert_eq!(view.layout().len(), 1);
        assert_eq!(view.layout().line(0), Some(&ViewLine { start: 0, len: 0 }));
        assert!(!view.vertical_axis().is_visible());
        assert!(!view.horizontal_axis().is_visible());
    }

    #[test]
    fn test_rebuild_reuses_last_window_size() {
        let d = doc(&numbered_lines(100));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        let lines_before = view.viewport().lines_per_page();

        // Mode/font rebuilds pass no size; geometry must not change.
        view.rebuild(Some(&d), None).unwrap();
        assert_eq!(view.viewport().lines_per_page(), lines_before);
    }

    #[test]
    fn test_rebuild_axis_visibility() {
        // 100 lines in a 25-line page: vertical active. Lines shorter than
        // 80 columns: horizontal hidden.
        let d = doc(&numbered_lines(100));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        assert!(view.vertical_axis().is_visible());
        assert!(!view.horizontal_axis().is_visible());
    }

    #[test]
    fn test_rebuild_horizontal_axis_for_wide_content() {
        let d = doc(&"w".repeat(200));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        assert!(view.horizontal_axis().is_visible());
    }

    #[test]
    fn test_rebuild_wrap_mode_hides_horizontal_axis() {
        let d = doc(&"w".repeat(200));
        let mut view = View::new();
        view.set_mode(LayoutMode::FixedWrap);
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        assert!(!view.horizontal_axis().is_visible());
        // 200 chars at 80 columns: 3 wrapped spans.
        assert_eq!(view.layout().len(), 3);
    }

    // ==================== anchor preservation ====================

    #[test]
    fn test_identical_rebuild_keeps_top_line() {
        let d = doc(&numbered_lines(100));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        view.scroll_vertical_to(40);

        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        assert_eq!(view.viewport().top_line(), 40);
    }

    #[test]
    fn test_height_only_resize_keeps_top_line_no_wrap() {
        let d = doc(&numbered_lines(100));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        view.scroll_vertical_to(40);

        view.rebuild(Some(&d), Some(size(80, 30))).unwrap();
        assert_eq!(view.viewport().top_line(), 40);
    }

    #[test]
    fn test_width_resize_keeps_top_line_no_wrap() {
        // NoWrap spans do not depend on width, so any resize keeps the line.
        let d = doc(&numbered_lines(100));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        view.scroll_vertical_to(33);

        view.rebuild(Some(&d), Some(size(40, 25))).unwrap();
        assert_eq!(view.viewport().top_line(), 33);
    }

    #[test]
    fn test_height_only_resize_keeps_top_line_fixed_wrap() {
        // 2000 chars at 80 columns: 25 wrapped spans.
        let d = doc(&"z".repeat(2000));
        let mut view = View::new();
        view.set_mode(LayoutMode::FixedWrap);
        view.rebuild(Some(&d), Some(size(80, 10))).unwrap();
        view.scroll_vertical_to(7);

        view.rebuild(Some(&d), Some(size(80, 5))).unwrap();
        assert_eq!(view.viewport().top_line(), 7);
    }

    #[test]
    fn test_width_resize_relocates_anchor_fixed_wrap() {
        // 2000 chars at 80 columns: span 7 starts at byte 560. At 40
        // columns that byte lives in span 560/40 = 14.
        let d = doc(&"z".repeat(2000));
        let mut view = View::new();
        view.set_mode(LayoutMode::FixedWrap);
        view.rebuild(Some(&d), Some(size(80, 10))).unwrap();
        view.scroll_vertical_to(7);

        view.rebuild(Some(&d), Some(size(40, 10))).unwrap();
        assert_eq!(view.viewport().top_line(), 14);
    }

    #[test]
    fn test_mode_change_keeps_anchor_line_visible() {
        // Line 40 of the NoWrap layout starts at some offset; after
        // wrapping, the top span must contain that offset.
        let d = doc(&numbered_lines(100));
        let anchor_start = {
            let l = Layout::build(&d, LayoutMode::NoWrap, 80).unwrap();
            l.line(40).unwrap().start
        };

        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        view.scroll_vertical_to(40);

        view.set_mode(LayoutMode::FixedWrap);
        view.rebuild(Some(&d), None).unwrap();

        let top = view.layout().line(view.viewport().top_line()).unwrap();
        assert!(top.start <= anchor_start && anchor_start < top.start + top.len.max(1));
    }

    #[test]
    fn test_mode_change_resets_horizontal_offset() {
        let d = doc(&"w".repeat(200));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        view.scroll_horizontal_to(30);
        assert_eq!(view.viewport().h_offset(), 30);

        view.set_mode(LayoutMode::FixedWrap);
        view.rebuild(Some(&d), None).unwrap();
        assert_eq!(view.viewport().h_offset(), 0);

        view.set_mode(LayoutMode::NoWrap);
        view.rebuild(Some(&d), None).unwrap();
        assert_eq!(view.viewport().h_offset(), 0);
    }

    #[test]
    fn test_pure_resize_preserves_horizontal_offset() {
        let d = doc(&"w".repeat(200));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        view.scroll_horizontal_to(30);

        view.rebuild(Some(&d), Some(size(80, 10))).unwrap();
        assert_eq!(view.viewport().h_offset(), 30);
    }

    #[test]
    fn test_resize_reclamps_horizontal_offset() {
        // Growing the window shrinks the horizontal range; the offset
        // clamps rather than pointing past the content.
        let d = doc(&"w".repeat(100));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        view.scroll_horizontal_to(20);
        assert_eq!(view.viewport().h_offset(), 20);

        view.rebuild(Some(&d), Some(size(90, 25))).unwrap();
        assert_eq!(view.viewport().h_offset(), 10);
    }

    // ==================== scrolling through the view ====================

    #[test]
    fn test_scroll_clamps_through_view() {
        let d = doc(&numbered_lines(100));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();

        view.scroll_vertical_to(95);
        assert_eq!(view.viewport().top_line(), 75);
        view.scroll_vertical_by(-1000);
        assert_eq!(view.viewport().top_line(), 0);
    }

    #[test]
    fn test_visible_lines_slice() {
        let d = doc(&numbered_lines(100));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 25))).unwrap();
        view.scroll_vertical_to(10);

        let visible = view.visible_lines();
        assert_eq!(visible.len(), 25);
        assert_eq!(visible[0], *view.layout().line(10).unwrap());
    }

    #[test]
    fn test_clear_then_rebuild_recovers() {
        let d = doc(&numbered_lines(10));
        let mut view = View::new();
        view.rebuild(Some(&d), Some(size(80, 5))).unwrap();
        view.clear();
        assert!(view.layout().is_empty());
        assert_eq!(view.visible_lines().len(), 0);

        view.rebuild(Some(&d), None).unwrap();
        assert_eq!(view.layout().len(), 10);
        assert_eq!(view.viewport().top_line(), 0);
    }
}
