//! Immutable document: owned bytes plus the line-start offset table.
//!
//! The table is built once by scanning for `\n`. Line *display* spans strip
//! the terminator: the `\n` itself and, for files with CRLF endings, the
//! `\r` before it. All accessors hand out offsets or borrowed slices; the
//! buffer is never copied after construction.

use crate::loader::LoadError;

/// An immutable in-memory document.
///
/// Invariants, established at construction and never broken afterwards:
///
/// - `line_starts` is strictly increasing and `line_starts[0] == 0`
/// - `line_starts[i] <= bytes.len()` for every `i`
/// - `line_starts.len()` equals the number of `\n` bytes plus one
///
/// An empty buffer still has one (empty) line, so `line_count()` is never 0.
#[derive(Debug, Clone)]
pub struct Document {
    /// The file content, byte for byte.
    bytes: Vec<u8>,
    /// Byte offset of the first character of each logical line.
    line_starts: Vec<usize>,
    /// Display length of the longest line (terminators excluded).
    max_line_len: usize,
}

impl Document {
    /// Builds a document from raw file bytes.
    ///
    /// Scans the buffer once to build the line-start table and the maximum
    /// line length. The table allocation is fallible: a file with more
    /// newlines than memory can index reports [`LoadError::OutOfMemory`]
    /// instead of aborting.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, LoadError> {
        let newlines = bytes.iter().filter(|&&b| b == b'\n').count();

        let mut line_starts = Vec::new();
        line_starts.try_reserve_exact(newlines + 1)?;

        line_starts.push(0);
        for (offset, &byte) in bytes.iter().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }

        let mut doc = Self {
            bytes,
            line_starts,
            max_line_len: 0,
        };
        doc.max_line_len = (0..doc.line_count())
            .map(|line| doc.line_len(line).unwrap_or(0))
            .max()
            .unwrap_or(0);
        Ok(doc)
    }

    /// Returns the document size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the document is zero bytes long.
    ///
    /// Note that an empty document still has one empty line.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the whole buffer.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of logical lines.
    ///
    /// Always at least 1: a document with no newlines is one line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the byte offset where the given line starts.
    ///
    /// Returns `None` if the line index is out of bounds.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the display length of the given line.
    ///
    /// The trailing `\n` is not counted, and neither is a `\r` directly
    /// before it (CRLF files display like their LF twins). For the last
    /// line the length runs to the end of the buffer.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;

        let end = if line + 1 < self.line_starts.len() {
            // Not the last line: back off over the terminator.
            let mut end = self.line_starts[line + 1] - 1;
            if end > start && self.bytes[end - 1] == b'\r' {
                end -= 1;
            }
            end
        } else {
            self.bytes.len()
        };

        Some(end - start)
    }

    /// Returns the display bytes of the given line (terminators excluded).
    pub fn line_bytes(&self, line: usize) -> Option<&[u8]> {
        let start = self.line_start(line)?;
        let len = self.line_len(line)?;
        Some(&self.bytes[start..start + len])
    }

    /// Returns the line containing the given byte offset.
    ///
    /// Offsets at or past the end of the buffer map to the last line.
    /// Uses binary search over the line-start table.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Returns the display length of the longest line in the document.
    ///
    /// This is the horizontal scroll range for un-wrapped layout; it is
    /// computed once at construction.
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }
}
