//! Outbound collaborator contracts.
//!
//! The engine computes; the platform paints. These traits are the entire
//! surface the platform side sees: a frame to draw, scrollbar state to
//! mirror into the native widget, and a font request to measure. Test
//! suites implement them with plain structs; a real shell implements them
//! over its windowing API.

use folio_view::FontMetrics;

/// One paintable snapshot of the viewport.
///
/// `lines` holds the display bytes for each visible row, top to bottom,
/// with the horizontal offset already applied (rows shorter than the
/// offset come out empty). The last row of the document runs to its
/// natural end — there is no synthetic padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Index of the first visible span in the current layout
    pub top_line: usize,
    /// Display bytes per visible row
    pub lines: Vec<&'a [u8]>,
    /// Metrics the rows were laid out under
    pub metrics: FontMetrics,
}

/// Paints frames. Implemented by the platform shell.
pub trait Renderer {
    /// Draws one frame. Called after every event that changed what is
    /// visible.
    fn draw(&mut self, frame: &Frame<'_>);
}

/// A scrollbar direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// One axis update for the native scrollbar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisUpdate {
    /// Whether the widget should be shown at all
    pub visible: bool,
    /// Thumb position in the widget's own domain
    pub position: u32,
    /// Upper end of the widget's domain (the lower end is 0)
    pub range_max: u32,
}

/// Mirrors axis state into the native scrollbar widget.
pub trait ScrollbarHost {
    fn update_axis(&mut self, axis: Axis, update: AxisUpdate);
}

/// What the viewer wants measured: a face by name, or the platform default
/// when no name is given, at a pixel height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRequest {
    /// Face name, `None` for the platform default
    pub name: Option<String>,
    /// Requested height in pixels
    pub height_px: u32,
}

/// Default font height when nothing else is requested.
pub const DEFAULT_FONT_HEIGHT_PX: u32 = 18;

impl Default for FontRequest {
    fn default() -> Self {
        Self { name: None, height_px: DEFAULT_FONT_HEIGHT_PX }
    }
}

/// Measures fonts. Implemented by the platform shell; the engine only ever
/// sees the resulting [`FontMetrics`].
pub trait FontSource {
    fn measure(&self, request: &FontRequest) -> FontMetrics;
}
