//! Anchor preservation across layout rebuilds.
//!
//! Span boundaries move whenever the window, font, or layout mode changes,
//! so a line index from the old generation means nothing in the new one.
//! What stays meaningful is the absolute byte offset of the topmost visible
//! character — the anchor. It is captured *before* the old spans are
//! dropped, then binary-searched into the freshly built sequence.

use crate::layout::Layout;
use crate::viewport::Viewport;

/// Captures the anchor: the absolute byte offset of the top-left visible
/// character.
///
/// Returns `None` when there is nothing on screen to anchor to (empty
/// layout, or a top line that is somehow out of range) — the rebuild then
/// lands at the top of the document.
pub fn anchor_offset(layout: &Layout, viewport: &Viewport) -> Option<usize> {
    let top = layout.line(viewport.top_line())?;
    Some(top.start + viewport.h_offset())
}

/// Relocates a captured anchor into a freshly built layout.
///
/// Returns the index of the span containing the anchor offset, or the
/// nearest span before it. Anchors at or past the end of the document clamp
/// to the last span; an empty layout relocates to 0.
pub fn relocate(layout: &Layout, anchor: usize) -> usize {
    if layout.is_empty() {
        return 0;
    }
    layout.line_at_offset(anchor)
}
