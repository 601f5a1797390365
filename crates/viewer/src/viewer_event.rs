//! Viewer event types for the unified input queue.
//!
//! All input sources (key handler, wheel handler, scrollbar notifications,
//! window resize) funnel into one enum processed by a single owner, the
//! [`ViewerController`](crate::ViewerController). Commands with richer
//! arguments — open a file, switch mode, change font — are direct
//! controller methods; this enum covers the high-frequency input path.

use folio_input::{Key, ScrollRequest};

/// An input event for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// A navigation key went down
    Key(Key),

    /// Mouse-wheel motion, in whole lines (positive scrolls down)
    Wheel { delta_lines: i64 },

    /// The window client area changed size
    Resize { width_px: u32, height_px: u32 },

    /// A message from the vertical scrollbar widget
    VerticalScrollbar(ScrollRequest),

    /// A message from the horizontal scrollbar widget
    HorizontalScrollbar(ScrollRequest),
}

impl ViewerEvent {
    /// Returns true for events that only move the viewport (as opposed to
    /// changing its geometry).
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            ViewerEvent::Key(_)
                | ViewerEvent::Wheel { .. }
                | ViewerEvent::VerticalScrollbar(_)
                | ViewerEvent::HorizontalScrollbar(_)
        )
    }
}
