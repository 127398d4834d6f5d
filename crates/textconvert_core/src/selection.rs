//! Selection repair for programmatic content replacement.

use std::ops::Range;

/// Anchor/head pair in char offsets, meaningful only against the text it was
/// taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    pub anchor: usize,
    pub head: usize,
}

impl SelectionRange {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Collapsed selection at `pos`.
    pub fn cursor(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Normalized `start..end` range.
    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.head)..self.anchor.max(self.head)
    }
}

/// Clamps `old` so neither end points past `new_len`.
///
/// Used when content is replaced by the engine (conversion result, paste,
/// upload, clear); typed edits keep the surface's own selection.
pub fn preserve_selection(new_len: usize, old: SelectionRange) -> SelectionRange {
    SelectionRange {
        anchor: old.anchor.min(new_len),
        head: old.head.min(new_len),
    }
}
