//! Layout: deriving displayable line spans from the document.
//!
//! A [`Layout`] is an ordered sequence of [`ViewLine`] spans — non-owning
//! `(start, len)` references into the document buffer — produced under one
//! of two strategies:
//!
//! - [`LayoutMode::NoWrap`]: one span per document line, terminators
//!   excluded. Long lines run past the right edge and are reached by
//!   horizontal scrolling.
//! - [`LayoutMode::FixedWrap`]: each document line of display length `L` is
//!   split into `ceil(L / cols_per_page)` contiguous spans of at most
//!   `cols_per_page` bytes. An empty line still yields one empty span.
//!   Horizontal scrolling is disabled in this mode.
//!
//! Building is a pure function of `(document, mode, cols_per_page)`:
//! identical inputs produce identical spans. The sequence is regenerated
//! wholesale on every rebuild and never mutated in place; the previous
//! generation is dropped only after the new one exists.

use std::collections::TryReserveError;
use std::fmt;

use folio_document::Document;

/// The layout strategy in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// One span per document line; horizontal scrolling reaches the rest.
    #[default]
    NoWrap,
    /// Document lines split into fixed-width chunks; no horizontal scroll.
    FixedWrap,
}

/// A displayable span of the document: `len` bytes starting at `start`.
///
/// Spans never include line terminators. `start + len` never exceeds the
/// document size the span was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLine {
    /// Byte offset of the first displayed character
    pub start: usize,
    /// Number of displayed bytes
    pub len: usize,
}

/// Failure to allocate the span sequence's backing storage.
///
/// The caller must discard any per-rebuild state and fall back to the empty
/// configuration; a half-built layout is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Not enough memory for the span sequence.
    OutOfMemory,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::OutOfMemory => write!(f, "not enough memory to lay out the document"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<TryReserveError> for LayoutError {
    fn from(_: TryReserveError) -> Self {
        LayoutError::OutOfMemory
    }
}

/// An immutable generation of displayable line spans.
///
/// `lines` is sorted ascending by `start` by construction (spans are
/// emitted front to back), which is what makes the anchor relocation
/// binary search valid.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    lines: Vec<ViewLine>,
    /// Longest display length among the spans' source lines; the
    /// horizontal scroll range in `NoWrap`, `cols_per_page` in `FixedWrap`.
    max_line_len: usize,
}

impl Layout {
    /// The layout of "nothing loaded": zero spans, zero range.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the span sequence for `document` under `mode`.
    ///
    /// `cols_per_page` is the page width in characters (already floored at
    /// 1 by the caller); it is the wrap width in `FixedWrap` and ignored
    /// for span generation in `NoWrap`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::OutOfMemory`] if the backing storage cannot be
    /// allocated. No partially built layout escapes: the error carries
    /// nothing and the caller resets to [`Layout::empty`].
    pub fn build(
        document: &Document,
        mode: LayoutMode,
        cols_per_page: usize,
    ) -> Result<Self, LayoutError> {
        match mode {
            LayoutMode::NoWrap => Self::build_no_wrap(document),
            LayoutMode::FixedWrap => Self::build_fixed_wrap(document, cols_per_page.max(1)),
        }
    }

    /// One span per document line, terminators excluded.
    fn build_no_wrap(document: &Document) -> Result<Self, LayoutError> {
        let count = document.line_count();

        let mut lines = Vec::new();
        lines.try_reserve_exact(count)?;

        for line in 0..count {
            // Both lookups are in range: `line` iterates the table itself.
            let start = document.line_start(line).unwrap_or(0);
            let len = document.line_len(line).unwrap_or(0);
            lines.push(ViewLine { start, len });
        }

        Ok(Self {
            lines,
            max_line_len: document.max_line_len(),
        })
    }

    /// Fixed-width chunks: `ceil(L / cols)` spans per line of length `L`,
    /// one empty span for an empty line.
    fn build_fixed_wrap(document: &Document, cols: usize) -> Result<Self, LayoutError> {
        // Upper bound on the span count: integer-division slack of one per
        // line. Reserving it up front means the pushes below never
        // reallocate, so the only fallible allocation is this one.
        let mut estimate: usize = 0;
        for line in 0..document.line_count() {
            let len = document.line_len(line).unwrap_or(0);
            estimate += len / cols + 1;
        }

        let mut lines = Vec::new();
        lines.try_reserve_exact(estimate)?;

        for line in 0..document.line_count() {
            let start = document.line_start(line).unwrap_or(0);
            let len = document.line_len(line).unwrap_or(0);

            if len == 0 {
                lines.push(ViewLine { start, len: 0 });
                continue;
            }

            let mut chunk = 0;
            while chunk * cols < len {
                let offset = chunk * cols;
                lines.push(ViewLine {
                    start: start + offset,
                    len: (len - offset).min(cols),
                });
                chunk += 1;
            }
        }

        Ok(Self {
            lines,
            max_line_len: cols,
        })
    }

    /// Returns the number of spans.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no spans (nothing loaded).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the span at `index`, if in range.
    pub fn line(&self, index: usize) -> Option<&ViewLine> {
        self.lines.get(index)
    }

    /// Returns all spans, front to back.
    pub fn lines(&self) -> &[ViewLine] {
        &self.lines
    }

    /// Returns the horizontal unit range (longest line length in `NoWrap`,
    /// the wrap width in `FixedWrap`).
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    /// Returns the index of the span containing (or immediately preceding)
    /// the given byte offset.
    ///
    /// Binary search over the ascending `start` offsets. Offsets past the
    /// last span clamp to the last index — never one past the end.
    /// Must not be called on an empty layout.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        debug_assert!(!self.lines.is_empty());
        let after = self.lines.partition_point(|span| span.start <= offset);
        after.saturating_sub(1).min(self.lines.len().saturating_sub(1))
    }
}
